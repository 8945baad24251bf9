//! # TerminalX SDK
//!
//! Client-side view layer of the TerminalX token-trading mini app, for native
//! and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain view-models, wire types and conversions (always available, WASM-safe)
//! 2. **Auth** — Sign-in proof, identity and the one-shot signup mnemonic
//! 3. **HTTP API** — `TerminalxHttp`, one method per endpoint, with retry policies
//! 4. **High-Level Client** — `TerminalxClient` with nested sub-clients
//! 5. **View** — View-state containers (`view`) and the page composer (`app`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use terminalx::prelude::*;
//!
//! let client = TerminalxClientBuilder::from_env().build()?;
//!
//! let trending = client.pairs().trending().await?;
//! let detail = client.pairs().detail(trending[0].address.as_str()).await?;
//! ```
//!
//! Driving the whole page:
//!
//! ```rust,ignore
//! let mut app = App::new(client, host, wallet);
//! app.mount().await;
//! app.dispatch(|c| c.select_row(0)).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, formatting and request tagging.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: sign-in proof, identity, signup wallet.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TerminalxClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: View ────────────────────────────────────────────────────────────

/// Presentational view-state containers.
pub mod view;

/// Page composer and async driver.
pub mod app;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PairAddress, RequestTracker, Side, Ticket, TimeRange};

    // Domain types — pair
    pub use crate::domain::pair::{BaseToken, Pair, PairDetail, TimeBucket, TimeBuckets, Txns};

    // Domain types — position
    pub use crate::domain::position::{Position, PositionStatus};

    // Errors
    pub use crate::error::{AuthError, ErrorKind, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth + wallet types
    pub use crate::auth::{
        CreatedUserWallet, Identity, Mnemonic, SignInProof, UserWallet, SIGN_IN_MESSAGE,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, PairsClient, PositionsClient, TerminalxClient, TerminalxClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // View state
    pub use crate::view::detail::DetailView;
    pub use crate::view::order_form::{LimitKind, OrderForm, OrderPreview, OrderType};
    pub use crate::view::pagination::Paginator;
    pub use crate::view::pair_list::PairListView;
    pub use crate::view::signup_modal::SignupModal;
    pub use crate::view::LoadState;

    // Page composer
    pub use crate::app::{
        App, AuthStatus, Backend, Composer, Effect, HostCommand, HostPlatform, Notice, Screen,
        Session, Tab, WalletConnector,
    };
}
