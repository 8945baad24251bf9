//! Connected-wallet dropdown in the header.

use super::timer::{CopyFeedback, WALLET_COPY_RESET_MS};
use crate::shared::fmt::shorten_address;

#[derive(Debug)]
pub struct WalletDropdown {
    address: String,
    expanded: bool,
    copy: CopyFeedback,
}

impl WalletDropdown {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            expanded: false,
            copy: CopyFeedback::new(WALLET_COPY_RESET_MS),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// `EQB3...TiUt`
    pub fn short_address(&self) -> String {
        shorten_address(&self.address, 4, 4)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Start the copy acknowledgement and return the text for the clipboard.
    pub fn copy(&mut self, now_ms: u64) -> String {
        self.copy.copied_at(now_ms);
        self.address.clone()
    }

    pub fn is_copied(&self) -> bool {
        self.copy.is_copied()
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.copy.tick(now_ms)
    }

    pub fn teardown(&mut self) {
        self.copy.teardown();
        self.expanded = false;
    }
}
