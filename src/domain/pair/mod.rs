//! Pair domain — trending rows, pair detail, time buckets.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{PairAddress, TimeRange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Pair ────────────────────────────────────────────────────────────────────

/// Base token of a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// One row of the trending / search list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    /// Upstream row id (e.g. `"ton_EQB3..."`).
    pub id: String,
    pub chain_id: String,
    /// Pool / pair address; the selection key for the detail view.
    pub address: PairAddress,
    pub icon: String,
    pub name: String,
    pub symbol: String,
    /// `None` when upstream has neither market cap nor FDV.
    pub market_cap: Option<Decimal>,
    /// 24h volume in USD.
    pub volume: Decimal,
    pub base_token: BaseToken,
}

// ─── Time buckets ────────────────────────────────────────────────────────────

/// Buy/sell transaction counts for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Txns {
    pub buys: u64,
    pub sells: u64,
}

impl Txns {
    pub fn total(&self) -> u64 {
        self.buys.saturating_add(self.sells)
    }
}

/// Activity within one observation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub txns: Txns,
    pub volume: Decimal,
    pub price_change: Decimal,
}

impl TimeBucket {
    /// Fraction of `count` in the window's transactions, `0` for an empty window.
    fn share(&self, count: u64) -> Decimal {
        match self.txns.total() {
            0 => Decimal::ZERO,
            total => Decimal::from(count)
                .checked_div(Decimal::from(total))
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// Split the window volume by transaction share: `(buy_volume, sell_volume)`.
    ///
    /// A window without transactions splits as `(0, 0)`. A side whose volume
    /// falls outside the `Decimal` range reads as `0`.
    pub fn volume_split(&self) -> (Decimal, Decimal) {
        let part = |count| {
            self.volume
                .checked_mul(self.share(count))
                .unwrap_or(Decimal::ZERO)
        };
        (part(self.txns.buys), part(self.txns.sells))
    }

    /// Buy share of transactions in percent, `0` for an empty window.
    pub fn buy_share_percent(&self) -> Decimal {
        self.share(self.txns.buys) * Decimal::ONE_HUNDRED
    }

    /// Sell share of transactions in percent, `0` for an empty window.
    pub fn sell_share_percent(&self) -> Decimal {
        self.share(self.txns.sells) * Decimal::ONE_HUNDRED
    }
}

/// All four windows. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeBuckets {
    pub m5: TimeBucket,
    pub h1: TimeBucket,
    pub h6: TimeBucket,
    pub h24: TimeBucket,
}

impl TimeBuckets {
    pub fn get(&self, range: TimeRange) -> &TimeBucket {
        match range {
            TimeRange::Minute5 => &self.m5,
            TimeRange::Hour1 => &self.h1,
            TimeRange::Hour6 => &self.h6,
            TimeRange::Hour24 => &self.h24,
        }
    }

    pub(crate) fn get_mut(&mut self, range: TimeRange) -> &mut TimeBucket {
        match range {
            TimeRange::Minute5 => &mut self.m5,
            TimeRange::Hour1 => &mut self.h1,
            TimeRange::Hour6 => &mut self.h6,
            TimeRange::Hour24 => &mut self.h24,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeRange, &TimeBucket)> {
        TimeRange::ALL.into_iter().map(move |range| (range, self.get(range)))
    }
}

impl std::ops::Index<TimeRange> for TimeBuckets {
    type Output = TimeBucket;

    fn index(&self, range: TimeRange) -> &TimeBucket {
        self.get(range)
    }
}

// ─── PairDetail ──────────────────────────────────────────────────────────────

/// Detail view model for a single pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairDetail {
    pub name: String,
    pub token_address: String,
    pub symbol: String,
    pub icon: String,
    /// Price in USD.
    pub price: Decimal,
    /// Price in the chain's base currency.
    pub price_native: Decimal,
    pub change_24h: Decimal,
    pub market_cap: Decimal,
    /// Liquidity base, used as a total-supply proxy.
    pub supply: Decimal,
    pub pool_address: PairAddress,
    pub buckets: TimeBuckets,
}
