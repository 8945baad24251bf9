//! Authentication — sign-in proof, identity, signup wallet, login.
//!
//! ## Security Model
//!
//! - **Wasm/Browser**: the session lives in a cookie set by the backend. Requests
//!   are sent with `credentials: include`; the SDK never reads the cookie.
//! - **Native**: the HTTP client keeps a cookie store, so the session cookie set
//!   by `POST /login/` or `POST /signup/` is replayed automatically.
//! - **Mnemonic**: the signup response carries the new wallet's mnemonic. It is
//!   wrapped in [`Mnemonic`], which cannot be cloned, redacts itself in `Debug`,
//!   and is consumed by [`Mnemonic::reveal`]. There is no endpoint to fetch it
//!   again.
//!
//! Proof generation and verification belong to the wallet SDK and the backend.
//! This module only carries the already-signed proof.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message the wallet is asked to sign before signup / login.
pub const SIGN_IN_MESSAGE: &str = "Welcome to TerminalX!";

// ============================================================================
// Proof & identity
// ============================================================================

/// Signed ownership proof, sent as the body of `POST /signup/` and `POST /login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInProof {
    pub address: String,
    pub message: String,
    pub signature: String,
}

impl SignInProof {
    pub fn new(address: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            message: SIGN_IN_MESSAGE.to_string(),
            signature: signature.into(),
        }
    }
}

/// Identity the backend accepted for this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub address: String,
    pub authenticated_at: DateTime<Utc>,
}

// ============================================================================
// Wallets
// ============================================================================

/// A custodial wallet known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWallet {
    pub address: String,
}

/// Recovery phrase of a freshly created wallet. Readable exactly once.
pub struct Mnemonic(String);

impl Mnemonic {
    pub(crate) fn new(phrase: String) -> Self {
        Self(phrase)
    }

    /// Consume the phrase for display.
    pub fn reveal(self) -> String {
        self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic(<{} words redacted>)", self.word_count())
    }
}

/// Result of a successful signup.
#[derive(Debug)]
pub struct CreatedUserWallet {
    pub wallet: UserWallet,
    pub public_key: String,
    pub mnemonic: Mnemonic,
}

// ============================================================================
// Wire types
// ============================================================================

/// Signup response body.
#[derive(Deserialize)]
pub struct SignupResponse {
    pub address: String,
    pub mnemonic: String,
    #[serde(default)]
    pub public_key: String,
}

impl fmt::Debug for SignupResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupResponse")
            .field("address", &self.address)
            .field("mnemonic", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl From<SignupResponse> for CreatedUserWallet {
    fn from(resp: SignupResponse) -> Self {
        CreatedUserWallet {
            wallet: UserWallet {
                address: resp.address,
            },
            public_key: resp.public_key,
            mnemonic: Mnemonic::new(resp.mnemonic),
        }
    }
}

/// `GET /users/{address}/exists` body: `{"exists": true}` or a bare boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExistsResponse {
    Flag(bool),
    Object { exists: bool },
}

impl ExistsResponse {
    pub fn exists(&self) -> bool {
        match self {
            ExistsResponse::Flag(b) => *b,
            ExistsResponse::Object { exists } => *exists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proof_body_shape() {
        let proof = SignInProof::new("EQaddr", "sig==");
        let json = serde_json::to_value(&proof).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "EQaddr",
                "message": "Welcome to TerminalX!",
                "signature": "sig=="
            })
        );
    }

    #[test]
    fn test_mnemonic_redacted_in_debug() {
        let resp: SignupResponse = serde_json::from_str(
            r#"{"address": "EQnew", "mnemonic": "alpha beta gamma", "public_key": "pk"}"#,
        )
        .unwrap();
        assert!(!format!("{resp:?}").contains("alpha"));

        let created = CreatedUserWallet::from(resp);
        let debug = format!("{created:?}");
        assert!(!debug.contains("alpha"));
        assert!(debug.contains("3 words redacted"));
        assert_eq!(created.wallet.address, "EQnew");
        assert_eq!(created.mnemonic.reveal(), "alpha beta gamma");
    }

    #[test]
    fn test_exists_response_shapes() {
        let flag: ExistsResponse = serde_json::from_str("true").unwrap();
        assert!(flag.exists());
        let obj: ExistsResponse = serde_json::from_str(r#"{"exists": false}"#).unwrap();
        assert!(!obj.exists());
    }
}
