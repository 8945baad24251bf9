//! Buy/sell volume split for one time window.

use crate::domain::pair::TimeBucket;
use crate::shared::fmt::decimal::{fixed, usd_whole};

/// Render-ready volume bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeIndicator {
    pub buy_volume: String,
    pub total_volume: String,
    pub sell_volume: String,
    /// Bar widths in percent, two decimals. Both `0.00` for an empty window.
    pub buy_width: String,
    pub sell_width: String,
}

impl From<&TimeBucket> for VolumeIndicator {
    fn from(bucket: &TimeBucket) -> Self {
        let (buy, sell) = bucket.volume_split();
        Self {
            buy_volume: usd_whole(&buy),
            total_volume: format!("Volume: {}", usd_whole(&bucket.volume)),
            sell_volume: usd_whole(&sell),
            buy_width: fixed(&bucket.buy_share_percent(), 2),
            sell_width: fixed(&bucket.sell_share_percent(), 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pair::Txns;
    use rust_decimal::Decimal;

    #[test]
    fn test_split_by_txn_share() {
        let bucket = TimeBucket {
            txns: Txns { buys: 3, sells: 1 },
            volume: Decimal::from(1_234_000),
            price_change: Decimal::ZERO,
        };
        let v = VolumeIndicator::from(&bucket);
        assert_eq!(v.buy_volume, "$925,500");
        assert_eq!(v.sell_volume, "$308,500");
        assert_eq!(v.total_volume, "Volume: $1,234,000");
        assert_eq!(v.buy_width, "75.00");
        assert_eq!(v.sell_width, "25.00");
    }

    #[test]
    fn test_empty_window_renders_zero_split() {
        let bucket = TimeBucket {
            txns: Txns::default(),
            volume: Decimal::from(500),
            price_change: Decimal::ZERO,
        };
        let v = VolumeIndicator::from(&bucket);
        assert_eq!(v.buy_volume, "$0");
        assert_eq!(v.sell_volume, "$0");
        assert_eq!(v.buy_width, "0.00");
        assert_eq!(v.sell_width, "0.00");
    }
}
