//! One-time mnemonic reveal after signup.
//!
//! The phrase is held only while the modal is open. Closing it, by any path,
//! drops the phrase for good.

use super::gesture::SwipeDismiss;
use crate::auth::CreatedUserWallet;
use std::fmt;

pub const ACKNOWLEDGEMENT_LABEL: &str =
    "I understand that if I lose this mnemonic phrase, I'll lose access to my assets";

pub const MNEMONIC_COPIED_TEXT: &str = "Mnemonic phrase copied to clipboard!";

pub struct SignupModal {
    address: String,
    mnemonic: Option<String>,
    acknowledged: bool,
    swipe: SwipeDismiss,
}

impl fmt::Debug for SignupModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupModal")
            .field("address", &self.address)
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .field("acknowledged", &self.acknowledged)
            .finish()
    }
}

impl SignupModal {
    /// Open the modal, taking ownership of the one-shot phrase.
    pub fn open(created: CreatedUserWallet) -> Self {
        Self {
            address: created.wallet.address,
            mnemonic: Some(created.mnemonic.reveal()),
            acknowledged: false,
            swipe: SwipeDismiss::default(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// The phrase, while the modal is open.
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.mnemonic.is_some()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn set_acknowledged(&mut self, checked: bool) {
        self.acknowledged = checked;
    }

    /// The OK button stays disabled until the checkbox is ticked.
    pub fn can_confirm(&self) -> bool {
        self.is_open() && self.acknowledged
    }

    /// OK button. Ignored until acknowledged.
    pub fn confirm(&mut self) -> bool {
        if !self.can_confirm() {
            return false;
        }
        self.close();
        true
    }

    /// Close button or backdrop tap.
    pub fn close(&mut self) {
        self.mnemonic = None;
        self.swipe.touch_end();
    }

    pub fn touch_start(&mut self, y: f32) {
        self.swipe.touch_start(y);
    }

    /// Returns `true` when the drag closed the modal.
    pub fn touch_move(&mut self, y: f32) -> bool {
        if self.is_open() && self.swipe.touch_move(y) {
            self.close();
            return true;
        }
        false
    }

    pub fn touch_end(&mut self) {
        self.swipe.touch_end();
    }
}
