//! Pair detail screen.
//!
//! Owns the load state of one pair plus everything the screen keeps locally:
//! selected time window, copy acknowledgement, buy/sell modals, history tabs.
//! A new selection gets a new `DetailView`; the old one is torn down.

use super::chart::chart_embed_url;
use super::history_tabs::HistoryTabs;
use super::order_form::{OrderForm, OrderPreview};
use super::price_change::{PriceChangeTab, PriceChangeTabs};
use super::timer::{CopyFeedback, DETAIL_COPY_RESET_MS};
use super::volume::VolumeIndicator;
use super::LoadState;
use crate::domain::pair::PairDetail;
use crate::error::SdkError;
use crate::network::NATIVE_SYMBOL;
use crate::shared::fmt::decimal::{price, signed_percent, usd_whole};
use crate::shared::{PairAddress, Side, TimeRange};
use rust_decimal::Decimal;

/// Header line of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailHeader {
    pub name: String,
    pub icon: String,
    /// Native price, e.g. `0.0123 TON`.
    pub price: String,
    pub change_24h: String,
    pub change_positive: bool,
    pub market_cap: String,
}

#[derive(Debug)]
pub struct DetailView {
    address: PairAddress,
    state: LoadState<PairDetail>,
    tabs: PriceChangeTabs,
    copy: CopyFeedback,
    buy: OrderForm,
    sell: OrderForm,
    history: HistoryTabs,
}

impl DetailView {
    pub fn new(address: PairAddress) -> Self {
        Self {
            address,
            state: LoadState::Loading,
            tabs: PriceChangeTabs::default(),
            copy: CopyFeedback::new(DETAIL_COPY_RESET_MS),
            buy: OrderForm::new(Side::Buy),
            sell: OrderForm::new(Side::Sell),
            history: HistoryTabs::default(),
        }
    }

    pub fn address(&self) -> &PairAddress {
        &self.address
    }

    pub fn state(&self) -> &LoadState<PairDetail> {
        &self.state
    }

    /// Loaded data. `None` while loading and after a failure.
    pub fn detail(&self) -> Option<&PairDetail> {
        self.state.ready()
    }

    pub fn apply(&mut self, result: Result<PairDetail, SdkError>) {
        self.state = LoadState::settle(result);
        if !matches!(self.state, LoadState::Ready(_)) {
            self.buy.close();
            self.sell.close();
        }
    }

    pub fn header(&self) -> Option<DetailHeader> {
        let d = self.detail()?;
        Some(DetailHeader {
            name: d.name.clone(),
            icon: d.icon.clone(),
            price: format!("{} {}", price(&d.price_native), NATIVE_SYMBOL),
            change_24h: signed_percent(&d.change_24h),
            change_positive: d.change_24h > Decimal::ZERO,
            market_cap: usd_whole(&d.market_cap),
        })
    }

    pub fn chart_url(&self) -> Option<String> {
        self.detail().map(|d| chart_embed_url(&d.pool_address))
    }

    // ── Time window ──────────────────────────────────────────────────────

    pub fn selected_range(&self) -> TimeRange {
        self.tabs.selected()
    }

    pub fn select_range(&mut self, range: TimeRange) {
        self.tabs.select(range);
    }

    pub fn price_tabs(&self) -> Vec<PriceChangeTab> {
        self.detail()
            .map(|d| self.tabs.tabs(&d.buckets))
            .unwrap_or_default()
    }

    /// Volume split for the selected window.
    pub fn volume(&self) -> Option<VolumeIndicator> {
        self.detail()
            .map(|d| VolumeIndicator::from(&d.buckets[self.tabs.selected()]))
    }

    // ── Copy ─────────────────────────────────────────────────────────────

    /// Returns the token address for the clipboard, or `None` before data arrived.
    pub fn copy_token_address(&mut self, now_ms: u64) -> Option<String> {
        let address = self.detail()?.token_address.clone();
        self.copy.copied_at(now_ms);
        Some(address)
    }

    pub fn is_copied(&self) -> bool {
        self.copy.is_copied()
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.copy.tick(now_ms)
    }

    // ── Order modals ─────────────────────────────────────────────────────

    pub fn form(&self, side: Side) -> &OrderForm {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    pub fn form_mut(&mut self, side: Side) -> &mut OrderForm {
        match side {
            Side::Buy => &mut self.buy,
            Side::Sell => &mut self.sell,
        }
    }

    /// Open one modal; the other one closes. Only once data is loaded.
    pub fn open_form(&mut self, side: Side) -> bool {
        if self.detail().is_none() {
            return false;
        }
        self.form_mut(side.opposite()).close();
        self.form_mut(side).open();
        true
    }

    pub fn set_wallet(&mut self, connected: bool, balance: Option<Decimal>) {
        self.buy.set_wallet(connected, balance);
        self.sell.set_wallet(connected, balance);
    }

    pub fn preview(&self, side: Side) -> Option<OrderPreview> {
        let d = self.detail()?;
        Some(self.form(side).preview(&d.price_native, &d.symbol, NATIVE_SYMBOL))
    }

    pub fn history(&self) -> &HistoryTabs {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryTabs {
        &mut self.history
    }

    /// Cancel timers and close modals. The view must not change afterwards.
    pub fn teardown(&mut self) {
        self.copy.teardown();
        self.buy.close();
        self.sell.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pair::{TimeBucket, TimeBuckets, Txns};
    use crate::error::HttpError;

    fn detail() -> PairDetail {
        let mut buckets = TimeBuckets::default();
        buckets.h24 = TimeBucket {
            txns: Txns { buys: 1, sells: 1 },
            volume: Decimal::from(1000),
            price_change: Decimal::new(512, 2),
        };
        PairDetail {
            name: "DOGS / TON".into(),
            token_address: "EQtoken".into(),
            symbol: "DOGS".into(),
            icon: "https://img/dogs.png".into(),
            price: Decimal::new(12, 1),
            price_native: Decimal::new(5, 1),
            change_24h: Decimal::new(512, 2),
            market_cap: Decimal::from(1_234_567),
            supply: Decimal::from(1_000_000),
            pool_address: PairAddress::from("EQpool"),
            buckets,
        }
    }

    fn loaded() -> DetailView {
        let mut view = DetailView::new(PairAddress::from("EQpool"));
        view.apply(Ok(detail()));
        view
    }

    #[test]
    fn test_loading_then_ready() {
        let mut view = DetailView::new(PairAddress::from("EQpool"));
        assert!(view.state().is_loading());
        assert!(view.header().is_none());
        view.apply(Ok(detail()));
        let header = view.header().unwrap();
        assert_eq!(header.price, "0.5 TON");
        assert_eq!(header.change_24h, "+5.12%");
        assert!(header.change_positive);
        assert_eq!(header.market_cap, "$1,234,567");
    }

    #[test]
    fn test_server_error_shows_message_and_no_data() {
        let mut view = DetailView::new(PairAddress::from("X"));
        view.apply(Err(HttpError::ServerError {
            status: 500,
            body: "Internal Server Error".into(),
        }
        .into()));
        assert!(view.state().error().is_some());
        assert!(view.detail().is_none());
        assert!(view.header().is_none());
        assert!(view.chart_url().is_none());
        assert!(view.price_tabs().is_empty());
        assert!(view.volume().is_none());
        assert!(!view.open_form(Side::Buy));
    }

    #[test]
    fn test_volume_follows_selected_range() {
        let mut view = loaded();
        assert_eq!(view.volume().unwrap().buy_volume, "$500");
        view.select_range(TimeRange::Minute5);
        assert_eq!(view.volume().unwrap().buy_volume, "$0");
    }

    #[test]
    fn test_copy_resets_after_two_seconds() {
        let mut view = loaded();
        assert_eq!(view.copy_token_address(0).as_deref(), Some("EQtoken"));
        assert!(view.is_copied());
        assert!(!view.tick(1_999));
        assert!(view.tick(2_000));
        assert!(!view.is_copied());
    }

    #[test]
    fn test_teardown_cancels_copy_timer() {
        let mut view = loaded();
        view.copy_token_address(0);
        view.teardown();
        assert!(!view.tick(2_000));
    }

    #[test]
    fn test_only_one_modal_open() {
        let mut view = loaded();
        assert!(view.open_form(Side::Buy));
        assert!(view.open_form(Side::Sell));
        assert!(!view.form(Side::Buy).is_open());
        assert!(view.form(Side::Sell).is_open());
    }

    #[test]
    fn test_chart_url_uses_pool_address() {
        assert_eq!(
            loaded().chart_url().unwrap(),
            "https://dexscreener.com/ton/EQpool?embed=1&theme=dark&trades=0&info=0"
        );
    }

    #[test]
    fn test_preview_uses_native_price() {
        let mut view = loaded();
        view.set_wallet(true, Some(Decimal::from(10)));
        view.form_mut(Side::Buy).set_amount("1");
        let preview = view.preview(Side::Buy).unwrap();
        assert_eq!(preview.entry_price, "0.5 TON");
        assert_eq!(preview.position_size, "2.00 DOGS");
    }
}
