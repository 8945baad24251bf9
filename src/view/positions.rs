//! Positions tab.

use super::LoadState;
use crate::domain::position::Position;
use crate::shared::fmt::decimal::{price, signed_percent};
use crate::shared::fmt::shorten_address;

pub const NO_POSITIONS_TEXT: &str = "You currently have no open positions.";
pub const CONNECT_TO_VIEW_TEXT: &str = "Connect your wallet to see your positions.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    pub pair: String,
    pub tokens: String,
    pub entry_price: String,
    /// `-` while the position is open.
    pub exit_price: String,
    pub status: &'static str,
    pub pnl: Option<String>,
}

impl From<&Position> for PositionRow {
    fn from(p: &Position) -> Self {
        let exit_price = if p.is_open() {
            "-".to_string()
        } else {
            p.exit_price.as_ref().map(price).unwrap_or_else(|| "-".into())
        };
        Self {
            pair: shorten_address(p.pair_address.as_str(), 4, 4),
            tokens: format!("{}/{}", p.base_token, p.quote_token),
            entry_price: price(&p.entry_price),
            exit_price,
            status: p.status().as_str(),
            pnl: p.realized_pnl_percent().as_ref().map(signed_percent),
        }
    }
}

/// What the positions tab shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PositionsView {
    /// No wallet connected; nothing is fetched.
    #[default]
    Disconnected,
    Loaded(LoadState<Vec<Position>>),
}

impl PositionsView {
    pub fn loading() -> Self {
        PositionsView::Loaded(LoadState::Loading)
    }

    pub fn rows(&self) -> Vec<PositionRow> {
        match self {
            PositionsView::Loaded(LoadState::Ready(positions)) => {
                positions.iter().map(PositionRow::from).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Placeholder text when there are no rows to show.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            PositionsView::Disconnected => Some(CONNECT_TO_VIEW_TEXT),
            PositionsView::Loaded(LoadState::Loading) => Some("Loading..."),
            PositionsView::Loaded(LoadState::Failed(message)) => Some(message.as_str()),
            PositionsView::Loaded(LoadState::Ready(positions)) if positions.is_empty() => {
                Some(NO_POSITIONS_TEXT)
            }
            PositionsView::Loaded(LoadState::Ready(_)) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::PairAddress;
    use rust_decimal::Decimal;

    fn position(exit: Option<Decimal>) -> Position {
        Position {
            id: Some("1".into()),
            pair_address: PairAddress::from("EQB3ncyBUTjZUA5EnFKR5_EnOMI9V1tTEAAPaiU71gc4TiUt"),
            base_token: "DOGS".into(),
            quote_token: "TON".into(),
            entry_price: Decimal::from(2),
            entry_price_native: Decimal::ONE,
            exit_price: exit,
            exit_price_native: None,
            opened_at: None,
            closed_at: None,
        }
    }

    #[test]
    fn test_empty_positions_placeholder() {
        let view = PositionsView::Loaded(LoadState::Ready(vec![]));
        assert_eq!(view.placeholder(), Some(NO_POSITIONS_TEXT));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_open_and_closed_rows() {
        let view = PositionsView::Loaded(LoadState::Ready(vec![
            position(None),
            position(Some(Decimal::from(3))),
        ]));
        let rows = view.rows();
        assert_eq!(rows[0].status, "Open");
        assert_eq!(rows[0].exit_price, "-");
        assert_eq!(rows[0].pnl, None);
        assert_eq!(rows[0].pair, "EQB3...TiUt");
        assert_eq!(rows[1].status, "Closed");
        assert_eq!(rows[1].pnl.as_deref(), Some("+50.00%"));
        assert_eq!(view.placeholder(), None);
    }

    #[test]
    fn test_disconnected_placeholder() {
        assert_eq!(
            PositionsView::Disconnected.placeholder(),
            Some(CONNECT_TO_VIEW_TEXT)
        );
    }
}
