//! High-level client — `TerminalxClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the identity slot, and accessor methods.

use crate::auth::client::Auth;
use crate::auth::Identity;
use crate::domain::pair::client::Pairs;
use crate::domain::position::client::Positions;
use crate::error::SdkError;
use crate::http::{RetryPolicy, TerminalxHttp};

use async_lock::RwLock;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::pair::client::Pairs as PairsClient;
pub use crate::domain::position::client::Positions as PositionsClient;

/// The primary entry point for the TerminalX SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.pairs()`, `client.positions()`, `client.auth()`.
///
/// Cloning is cheap; clones share the transport and the identity slot.
pub struct TerminalxClient {
    pub(crate) http: TerminalxHttp,
    /// Identity accepted by the last successful signup / login.
    pub(crate) identity: Arc<RwLock<Option<Identity>>>,
}

impl TerminalxClient {
    pub fn builder() -> TerminalxClientBuilder {
        TerminalxClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn pairs(&self) -> Pairs<'_> {
        Pairs { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

impl Clone for TerminalxClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            identity: self.identity.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TerminalxClientBuilder {
    base_url: String,
    read_retry: RetryPolicy,
}

impl Default for TerminalxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            read_retry: RetryPolicy::None,
        }
    }
}

impl TerminalxClientBuilder {
    /// Builder whose base URL comes from the environment.
    ///
    /// Lookup order: `TERMINALX_API_URL` at runtime (native only), the same
    /// variable at compile time, then [`DEFAULT_API_URL`].
    ///
    /// [`DEFAULT_API_URL`]: crate::network::DEFAULT_API_URL
    pub fn from_env() -> Self {
        let base_url = runtime_api_url()
            .or_else(|| option_env!("TERMINALX_API_URL").map(str::to_string))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| crate::network::DEFAULT_API_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Retry policy for GET endpoints. Defaults to [`RetryPolicy::None`].
    pub fn read_retry(mut self, policy: RetryPolicy) -> Self {
        self.read_retry = policy;
        self
    }

    pub fn build(self) -> Result<TerminalxClient, SdkError> {
        tracing::debug!(base_url = %self.base_url, "Building TerminalX client");
        Ok(TerminalxClient {
            http: TerminalxHttp::new(&self.base_url, self.read_retry)?,
            identity: Arc::new(RwLock::new(None)),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_url() -> Option<String> {
    std::env::var(crate::network::API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_url() -> Option<String> {
    None
}
