//! View-state containers — app-owned, SDK-provided update logic.
//!
//! Each component here holds the local state a screen reads to render
//! (pagination, input values, copy acknowledgements, gestures) and exposes
//! update methods. Rendering itself stays in the host UI.
//!
//! Nothing in this module performs I/O. Time is passed in as millisecond
//! timestamps so timers are deterministic.

pub mod chart;
pub mod detail;
pub mod gesture;
pub mod history_tabs;
pub mod order_form;
pub mod pagination;
pub mod pair_list;
pub mod positions;
pub mod price_change;
pub mod signup_modal;
pub mod timer;
pub mod volume;
pub mod wallet_dropdown;

/// Generic three-way load state for a fetched value.
///
/// There is no "stale" variant: entering `Failed` drops whatever was shown.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Settle from a fetch result, rendering errors as their user message.
    pub fn settle(result: Result<T, crate::error::SdkError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.user_message()),
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
