//! Position domain — a user's recorded entry into (and optionally exit from) a pair.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::PairAddress;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a position has been exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionStatus {
    Open,
    Closed,
}

impl PositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionStatus::Open => "Open",
            PositionStatus::Closed => "Closed",
        }
    }
}

/// A trade record for the positions tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: Option<String>,
    pub pair_address: PairAddress,
    pub base_token: String,
    pub quote_token: String,
    pub entry_price: Decimal,
    pub entry_price_native: Decimal,
    /// `None` while the position is open.
    pub exit_price: Option<Decimal>,
    pub exit_price_native: Option<Decimal>,
    pub opened_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Position {
    /// A missing or zero exit price means the position is still open.
    pub fn status(&self) -> PositionStatus {
        match self.exit_price {
            Some(price) if !price.is_zero() => PositionStatus::Closed,
            _ => PositionStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == PositionStatus::Open
    }

    /// Realized PnL in percent for closed positions, measured in fiat price.
    ///
    /// `None` for open positions, for records without an entry price, and
    /// when the result falls outside the `Decimal` range.
    pub fn realized_pnl_percent(&self) -> Option<Decimal> {
        if self.is_open() || self.entry_price.is_zero() {
            return None;
        }
        let exit = self.exit_price?;
        exit.checked_sub(self.entry_price)?
            .checked_mul(Decimal::ONE_HUNDRED)?
            .checked_div(self.entry_price)
    }
}
