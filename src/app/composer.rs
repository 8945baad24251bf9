//! Page composer — the single owner of screen, session and fetch bookkeeping.
//!
//! `Composer` is a pure state machine. User actions and external events come
//! in as method calls and return the [`Effect`]s to run; results of those
//! effects come back through the `apply_*` methods together with the
//! [`Ticket`] they were issued with. A result whose ticket is no longer current
//! is dropped, so out-of-order responses never overwrite newer state.

use super::host::{HostCommand, HEADER_COLOR};
use super::session::{AuthStatus, Session};
use crate::auth::{CreatedUserWallet, SignInProof};
use crate::domain::pair::{Pair, PairDetail};
use crate::domain::position::Position;
use crate::error::SdkError;
use crate::shared::{PairAddress, RequestTracker, Ticket};
use crate::view::detail::DetailView;
use crate::view::pair_list::PairListView;
use crate::view::positions::PositionsView;
use crate::view::signup_modal::{SignupModal, MNEMONIC_COPIED_TEXT};
use crate::view::wallet_dropdown::WalletDropdown;
use crate::view::LoadState;
use rust_decimal::Decimal;

/// Work the driver must perform on behalf of the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Host(HostCommand),
    FetchTrending,
    SearchPairs(Ticket<String>),
    FetchDetail(Ticket<PairAddress>),
    /// Keyed by the connected address.
    FetchPositions(Ticket<String>),
    CheckIdentity(Ticket<String>),
    SignUp(Ticket<String>, SignInProof),
    LogIn(Ticket<String>, SignInProof),
    DisconnectWallet,
    WriteClipboard(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Pairs,
    Positions,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Pairs => "Pairs",
            Tab::Positions => "My positions",
        }
    }
}

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    PairsList,
    PairDetail,
    PositionsList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Blocking message the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Header search field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    open: bool,
    term: String,
    /// Term whose results the list currently shows.
    applied: Option<String>,
}

impl SearchBar {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn applied(&self) -> Option<&str> {
        self.applied.as_deref()
    }
}

#[derive(Debug)]
pub struct Composer {
    mounted: bool,
    session: Session,
    tab: Tab,
    balance: Option<Decimal>,

    trending: LoadState<Vec<Pair>>,
    pair_list: PairListView,
    search: SearchBar,
    detail: Option<DetailView>,
    positions: PositionsView,
    wallet: Option<WalletDropdown>,
    signup_modal: Option<SignupModal>,
    notice: Option<Notice>,

    detail_req: RequestTracker<PairAddress>,
    search_req: RequestTracker<String>,
    positions_req: RequestTracker<String>,
    identity_req: RequestTracker<String>,
    auth_req: RequestTracker<String>,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            mounted: false,
            session: Session::Disconnected,
            tab: Tab::Pairs,
            balance: None,
            trending: LoadState::Loading,
            pair_list: PairListView::new(),
            search: SearchBar::default(),
            detail: None,
            positions: PositionsView::Disconnected,
            wallet: None,
            signup_modal: None,
            notice: None,
            detail_req: RequestTracker::new(),
            search_req: RequestTracker::new(),
            positions_req: RequestTracker::new(),
            identity_req: RequestTracker::new(),
            auth_req: RequestTracker::new(),
        }
    }

    // ── Read access ──────────────────────────────────────────────────────

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn screen(&self) -> Screen {
        match (self.tab, &self.detail) {
            (Tab::Positions, _) => Screen::PositionsList,
            (Tab::Pairs, Some(_)) => Screen::PairDetail,
            (Tab::Pairs, None) => Screen::PairsList,
        }
    }

    pub fn pair_list(&self) -> &PairListView {
        &self.pair_list
    }

    /// Page navigation only; the list contents belong to the composer.
    pub fn pair_list_mut(&mut self) -> &mut PairListView {
        &mut self.pair_list
    }

    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    pub fn selected_pair(&self) -> Option<&PairAddress> {
        self.detail.as_ref().map(DetailView::address)
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        self.detail.as_mut()
    }

    pub fn positions(&self) -> &PositionsView {
        &self.positions
    }

    pub fn wallet(&self) -> Option<&WalletDropdown> {
        self.wallet.as_ref()
    }

    pub fn wallet_mut(&mut self) -> Option<&mut WalletDropdown> {
        self.wallet.as_mut()
    }

    /// The signup modal while it is open.
    pub fn signup_modal(&self) -> Option<&SignupModal> {
        self.signup_modal.as_ref().filter(|m| m.is_open())
    }

    pub fn signup_modal_mut(&mut self) -> Option<&mut SignupModal> {
        self.signup_modal.as_mut().filter(|m| m.is_open())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Host setup and the one trending fetch. Mounting twice does nothing.
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        self.pair_list.set_loading();
        vec![
            Effect::Host(HostCommand::SetHeaderColor(HEADER_COLOR)),
            Effect::Host(HostCommand::Expand),
            Effect::Host(HostCommand::Ready),
            Effect::FetchTrending,
        ]
    }

    /// Advance component timers.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(detail) = self.detail.as_mut() {
            detail.tick(now_ms);
        }
        if let Some(wallet) = self.wallet.as_mut() {
            wallet.tick(now_ms);
        }
    }

    // ── Pair list & search ───────────────────────────────────────────────

    pub fn apply_trending(&mut self, result: Result<Vec<Pair>, SdkError>) {
        self.trending = LoadState::settle(result);
        if self.search.applied.is_none() {
            self.show_trending();
        }
    }

    fn show_trending(&mut self) {
        match &self.trending {
            LoadState::Ready(pairs) => self.pair_list.set_pairs(pairs.clone()),
            LoadState::Failed(message) => self.pair_list.set_failed(message.clone()),
            LoadState::Loading => self.pair_list.set_loading(),
        }
    }

    pub fn toggle_search(&mut self) {
        if self.search.open {
            self.close_search();
        } else {
            self.search.open = true;
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.term = term.into();
    }

    /// Enter in the search field. A blank term restores the cached trending
    /// list without a request.
    pub fn submit_search(&mut self) -> Vec<Effect> {
        let term = self.search.term.trim().to_string();
        if term.is_empty() {
            self.search_req.invalidate();
            self.search.applied = None;
            self.show_trending();
            return Vec::new();
        }

        self.search.applied = Some(term.clone());
        self.pair_list.set_loading();
        vec![Effect::SearchPairs(self.search_req.issue(term))]
    }

    pub fn apply_search(&mut self, ticket: &Ticket<String>, result: Result<Vec<Pair>, SdkError>) -> bool {
        if !self.search_req.complete(ticket) {
            return false;
        }
        match result {
            Ok(pairs) => self.pair_list.set_pairs(pairs),
            Err(e) => self.pair_list.set_failed(e.user_message()),
        }
        true
    }

    /// Close the search field, drop any in-flight search and show trending again.
    pub fn close_search(&mut self) {
        self.search = SearchBar::default();
        self.search_req.invalidate();
        self.show_trending();
    }

    // ── Selection ────────────────────────────────────────────────────────

    /// Open the detail screen for `address`.
    pub fn select_pair(&mut self, address: PairAddress) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.tab != Tab::Pairs {
            return effects;
        }
        if let Some(mut previous) = self.detail.take() {
            previous.teardown();
        } else {
            effects.push(Effect::Host(HostCommand::ShowBackButton));
        }

        let mut view = DetailView::new(address.clone());
        view.set_wallet(self.session.is_connected(), self.balance);
        self.detail = Some(view);
        effects.push(Effect::FetchDetail(self.detail_req.issue(address)));
        effects
    }

    /// Select the `index`-th row of the visible page.
    pub fn select_row(&mut self, index: usize) -> Vec<Effect> {
        match self.pair_list.select(index) {
            Some(address) => self.select_pair(address),
            None => Vec::new(),
        }
    }

    pub fn back(&mut self) -> Vec<Effect> {
        match self.detail.take() {
            Some(mut view) => {
                view.teardown();
                self.detail_req.invalidate();
                vec![Effect::Host(HostCommand::HideBackButton)]
            }
            None => Vec::new(),
        }
    }

    pub fn apply_detail(&mut self, ticket: &Ticket<PairAddress>, result: Result<PairDetail, SdkError>) -> bool {
        if !self.detail_req.complete(ticket) {
            return false;
        }
        match self.detail.as_mut() {
            Some(view) if view.address() == ticket.key() => {
                view.apply(result);
                true
            }
            _ => false,
        }
    }

    pub fn copy_token_address(&mut self, now_ms: u64) -> Vec<Effect> {
        self.detail
            .as_mut()
            .and_then(|view| view.copy_token_address(now_ms))
            .map(|text| vec![Effect::WriteClipboard(text)])
            .unwrap_or_default()
    }

    // ── Tabs & positions ─────────────────────────────────────────────────

    /// Switching tabs clears the selection. Entering the positions tab always
    /// refetches; leaving it drops any in-flight positions request.
    pub fn set_tab(&mut self, tab: Tab) -> Vec<Effect> {
        if tab == self.tab {
            return Vec::new();
        }
        let mut effects = self.back();
        if self.tab == Tab::Positions {
            self.positions_req.invalidate();
        }
        self.tab = tab;
        if tab == Tab::Positions {
            effects.extend(self.fetch_positions());
        }
        effects
    }

    fn fetch_positions(&mut self) -> Vec<Effect> {
        match self.session.address() {
            Some(address) => {
                let ticket = self.positions_req.issue(address.to_string());
                self.positions = PositionsView::loading();
                vec![Effect::FetchPositions(ticket)]
            }
            None => {
                self.positions = PositionsView::Disconnected;
                Vec::new()
            }
        }
    }

    pub fn apply_positions(&mut self, ticket: &Ticket<String>, result: Result<Vec<Position>, SdkError>) -> bool {
        if !self.positions_req.complete(ticket) || self.session.address() != Some(ticket.key().as_str()) {
            return false;
        }
        self.positions = PositionsView::Loaded(LoadState::settle(result));
        true
    }

    // ── Wallet & auth ────────────────────────────────────────────────────

    /// The wallet connector reported an account.
    pub fn wallet_connected(&mut self, address: impl Into<String>) -> Vec<Effect> {
        let address = address.into();
        if self.session.address() == Some(address.as_str()) {
            return Vec::new();
        }
        if self.session.is_connected() {
            self.reset_session();
        }

        self.session = Session::connected(address.clone());
        self.wallet = Some(WalletDropdown::new(address.clone()));
        if let Some(view) = self.detail.as_mut() {
            view.set_wallet(true, self.balance);
        }

        let mut effects = vec![Effect::CheckIdentity(self.identity_req.issue(address))];
        if self.tab == Tab::Positions {
            effects.extend(self.fetch_positions());
        }
        effects
    }

    /// Wallet balance in the native currency, used for quick-fill.
    pub fn set_balance(&mut self, balance: Option<Decimal>) {
        self.balance = balance;
        let connected = self.session.is_connected();
        if let Some(view) = self.detail.as_mut() {
            view.set_wallet(connected, balance);
        }
    }

    pub fn apply_identity(&mut self, ticket: &Ticket<String>, exists: bool) -> bool {
        if !self.identity_req.complete(ticket) {
            return false;
        }
        if exists {
            self.session.authenticate(ticket.key());
        }
        true
    }

    /// Signed proof from the wallet. An unauthenticated account signs up;
    /// an authenticated one has nothing to do.
    pub fn submit_proof(&mut self, proof: SignInProof) -> Vec<Effect> {
        match &self.session {
            Session::Connected {
                address,
                auth: AuthStatus::Unauthenticated,
            } if *address == proof.address => {
                let ticket = self.auth_req.issue(address.clone());
                vec![Effect::SignUp(ticket, proof)]
            }
            _ => Vec::new(),
        }
    }

    /// Explicit login with a signed proof.
    pub fn log_in(&mut self, proof: SignInProof) -> Vec<Effect> {
        match &self.session {
            Session::Connected { address, .. } if *address == proof.address => {
                let ticket = self.auth_req.issue(address.clone());
                vec![Effect::LogIn(ticket, proof)]
            }
            _ => Vec::new(),
        }
    }

    pub fn apply_sign_up(&mut self, ticket: &Ticket<String>, result: Result<CreatedUserWallet, SdkError>) -> bool {
        if !self.auth_req.complete(ticket) {
            return false;
        }
        match result {
            Ok(created) => {
                self.session.authenticate(ticket.key());
                self.signup_modal = Some(SignupModal::open(created));
            }
            Err(e) => self.notice = Some(Notice::error(format!("Signup failed: {e}"))),
        }
        true
    }

    pub fn apply_log_in(&mut self, ticket: &Ticket<String>, result: Result<(), SdkError>) -> bool {
        if !self.auth_req.complete(ticket) {
            return false;
        }
        match result {
            Ok(()) => {
                self.session.authenticate(ticket.key());
            }
            Err(e) => self.notice = Some(Notice::error(format!("Login failed: {e}"))),
        }
        true
    }

    pub fn copy_wallet_address(&mut self, now_ms: u64) -> Vec<Effect> {
        self.wallet
            .as_mut()
            .map(|wallet| vec![Effect::WriteClipboard(wallet.copy(now_ms))])
            .unwrap_or_default()
    }

    pub fn copy_mnemonic(&mut self) -> Vec<Effect> {
        let Some(phrase) = self.signup_modal().and_then(SignupModal::mnemonic) else {
            return Vec::new();
        };
        let effect = Effect::WriteClipboard(phrase.to_string());
        self.notice = Some(Notice::info(MNEMONIC_COPIED_TEXT));
        vec![effect]
    }

    /// Logout button.
    pub fn disconnect(&mut self) -> Vec<Effect> {
        if !self.session.is_connected() {
            return Vec::new();
        }
        self.reset_session();
        vec![Effect::DisconnectWallet]
    }

    /// The wallet connector reported the account gone.
    pub fn wallet_disconnected(&mut self) {
        if self.session.is_connected() {
            self.reset_session();
        }
    }

    /// Disconnect failures are logged; the app stays usable either way.
    pub fn apply_disconnect(&mut self, result: Result<(), SdkError>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "Wallet disconnect failed");
        }
    }

    fn reset_session(&mut self) {
        self.session = Session::Disconnected;
        self.balance = None;
        if let Some(mut wallet) = self.wallet.take() {
            wallet.teardown();
        }
        if let Some(view) = self.detail.as_mut() {
            view.set_wallet(false, None);
        }
        self.identity_req.invalidate();
        self.auth_req.invalidate();
        self.positions_req.invalidate();
        self.positions = PositionsView::Disconnected;
    }
}
