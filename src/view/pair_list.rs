//! Trending / search results table with client-side pagination.

use super::pagination::Paginator;
use super::LoadState;
use crate::domain::pair::Pair;
use crate::shared::fmt::decimal::usd_millions;
use crate::shared::PairAddress;

/// Rows per page of the pair list.
pub const PAIR_LIST_PAGE_SIZE: usize = 12;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRow {
    pub address: PairAddress,
    pub icon: String,
    pub symbol: String,
    /// `$1.5M` or `N/A`.
    pub market_cap: String,
    pub volume: String,
}

impl From<&Pair> for PairRow {
    fn from(pair: &Pair) -> Self {
        Self {
            address: pair.address.clone(),
            icon: pair.icon.clone(),
            symbol: pair.symbol.clone(),
            market_cap: usd_millions(pair.market_cap.as_ref()),
            volume: usd_millions(Some(&pair.volume)),
        }
    }
}

/// Pair list state: the fetched sequence plus the page cursor over it.
#[derive(Debug, Clone)]
pub struct PairListView {
    state: LoadState<Vec<Pair>>,
    paginator: Paginator,
}

impl Default for PairListView {
    fn default() -> Self {
        Self::new()
    }
}

impl PairListView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            paginator: Paginator::new(0, PAIR_LIST_PAGE_SIZE),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Pair>> {
        &self.state
    }

    pub fn pairs(&self) -> &[Pair] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Replace the list and return to page 1.
    pub fn set_pairs(&mut self, pairs: Vec<Pair>) {
        self.paginator.reset(pairs.len());
        self.state = LoadState::Ready(pairs);
    }

    pub fn set_loading(&mut self) {
        self.paginator.reset(0);
        self.state = LoadState::Loading;
    }

    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.paginator.reset(0);
        self.state = LoadState::Failed(message.into());
    }

    /// Rows of the current page.
    pub fn rows(&self) -> Vec<PairRow> {
        self.paginator
            .slice(self.pairs())
            .iter()
            .map(PairRow::from)
            .collect()
    }

    /// Address of the `index`-th row on the current page. No network call.
    pub fn select(&self, index: usize) -> Option<PairAddress> {
        self.paginator
            .slice(self.pairs())
            .get(index)
            .map(|pair| pair.address.clone())
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev()
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next()
    }

    pub fn goto_page(&mut self, page: usize) -> bool {
        self.paginator.goto(page)
    }
}
