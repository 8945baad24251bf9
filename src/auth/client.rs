//! Auth sub-client — signup, login, identity lookup.

use chrono::Utc;

use crate::auth::{CreatedUserWallet, Identity, SignInProof};
use crate::client::TerminalxClient;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a TerminalxClient,
}

impl<'a> Auth<'a> {
    /// Create a custodial wallet for a connected account.
    ///
    /// A client-side rejection (400/401/403/409) becomes
    /// [`AuthError::SignupRejected`]. The returned mnemonic is the only copy
    /// the client will ever see.
    pub async fn sign_up(&self, proof: &SignInProof) -> Result<CreatedUserWallet, SdkError> {
        let created = self
            .client
            .http
            .sign_up(proof)
            .await
            .map(CreatedUserWallet::from)
            .map_err(|e| auth_failure(e, AuthError::SignupRejected))?;

        self.remember(&proof.address).await;
        tracing::info!(address = %created.wallet.address, "Signup completed");
        Ok(created)
    }

    /// Establish a session. Success is decided by the response status alone.
    pub async fn log_in(&self, proof: &SignInProof) -> Result<Identity, SdkError> {
        self.client
            .http
            .log_in(proof)
            .await
            .map_err(|e| auth_failure(e, AuthError::LoginRejected))?;
        Ok(self.remember(&proof.address).await)
    }

    /// Whether the backend knows `address`.
    ///
    /// Never fails: any error is logged and reported as `false`.
    pub async fn identity_exists(&self, address: &str) -> bool {
        match self.client.http.identity_exists(address).await {
            Ok(resp) => resp.exists(),
            Err(e) => {
                tracing::warn!(address, error = %e, "Identity check failed, assuming unknown identity");
                false
            }
        }
    }

    /// Identity accepted by the last successful signup / login.
    pub async fn identity(&self) -> Option<Identity> {
        self.client.identity.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.identity.read().await.is_some()
    }

    /// Drop the remembered identity (wallet disconnected).
    pub async fn forget(&self) {
        *self.client.identity.write().await = None;
    }

    async fn remember(&self, address: &str) -> Identity {
        let identity = Identity {
            address: address.to_string(),
            authenticated_at: Utc::now(),
        };
        *self.client.identity.write().await = Some(identity.clone());
        identity
    }
}

/// A client-side rejection becomes `rejected(reason)`; anything else stays an
/// HTTP error.
fn auth_failure(err: HttpError, rejected: fn(String) -> AuthError) -> SdkError {
    if err.is_rejection() {
        rejected(err.to_string()).into()
    } else {
        err.into()
    }
}
