//! Network URL constants for the TerminalX SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://secret-ocean-19070-7d15bdda8dde.herokuapp.com/api";

/// Environment variable consulted by `TerminalxClientBuilder::from_env`.
pub const API_URL_ENV: &str = "TERMINALX_API_URL";

/// Base URL of the embedded chart provider.
pub const CHART_EMBED_URL: &str = "https://dexscreener.com/ton";

/// Local asset shown when upstream has no image for a token.
pub const PLACEHOLDER_ICON: &str = "/images/missing.png";

/// Marker value upstream uses for "no image".
pub(crate) const UPSTREAM_MISSING_IMAGE: &str = "missing.png";

/// Symbol of the chain's base currency; native prices are quoted in it.
pub const NATIVE_SYMBOL: &str = "TON";
