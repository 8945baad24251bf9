//! Time-range tabs showing per-window price change.

use crate::domain::pair::TimeBuckets;
use crate::shared::fmt::decimal::signed_percent;
use crate::shared::TimeRange;

/// One rendered tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceChangeTab {
    pub range: TimeRange,
    /// `5m`, `1h`, `6h`, `24h`.
    pub label: &'static str,
    /// `+1.23%` / `-0.50%`.
    pub change: String,
    pub is_positive: bool,
    pub is_selected: bool,
}

/// Selected window for the price-change tabs and the volume indicator below them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceChangeTabs {
    selected: TimeRange,
}

impl PriceChangeTabs {
    pub fn selected(&self) -> TimeRange {
        self.selected
    }

    pub fn select(&mut self, range: TimeRange) {
        self.selected = range;
    }

    pub fn tabs(&self, buckets: &TimeBuckets) -> Vec<PriceChangeTab> {
        buckets
            .iter()
            .map(|(range, bucket)| PriceChangeTab {
                range,
                label: range.label(),
                change: signed_percent(&bucket.price_change),
                is_positive: bucket.price_change.is_sign_positive() && !bucket.price_change.is_zero(),
                is_selected: range == self.selected,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_tabs_default_to_24h() {
        let tabs = PriceChangeTabs::default().tabs(&TimeBuckets::default());
        let labels: Vec<_> = tabs.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["5m", "1h", "6h", "24h"]);
        assert!(tabs[3].is_selected);
        assert!(tabs[..3].iter().all(|t| !t.is_selected));
    }

    #[test]
    fn test_tab_change_formatting() {
        let mut buckets = TimeBuckets::default();
        buckets.m5.price_change = Decimal::new(123, 2);
        buckets.h1.price_change = Decimal::new(-5, 1);

        let mut state = PriceChangeTabs::default();
        state.select(TimeRange::Hour1);
        let tabs = state.tabs(&buckets);

        assert_eq!(tabs[0].change, "+1.23%");
        assert!(tabs[0].is_positive);
        assert_eq!(tabs[1].change, "-0.50%");
        assert!(!tabs[1].is_positive);
        assert!(tabs[1].is_selected);
        assert_eq!(tabs[2].change, "0.00%");
        assert!(!tabs[2].is_positive);
    }
}
