//! External collaborators: the host messaging platform and the wallet connector.

use crate::error::SdkError;

/// Header color applied on mount.
pub const HEADER_COLOR: &str = "#0a0a0a";

/// Imperative commands for the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    SetHeaderColor(&'static str),
    /// Take the full viewport.
    Expand,
    /// Signal that the app finished loading.
    Ready,
    ShowBackButton,
    HideBackButton,
}

/// Host platform SDK (back button, header theming, lifecycle, clipboard).
pub trait HostPlatform {
    fn apply(&self, command: &HostCommand);

    fn write_clipboard(&self, text: &str) -> Result<(), SdkError>;
}

/// Wallet-connect library. Connection events are fed to the app by the host;
/// this side only covers the explicit disconnect action.
#[allow(async_fn_in_trait)]
pub trait WalletConnector {
    async fn disconnect(&self) -> Result<(), SdkError>;
}
