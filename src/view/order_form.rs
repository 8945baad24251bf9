//! Buy / sell order forms.
//!
//! Everything here is a client-side preview. Submitting an order belongs to
//! the wallet connector and is not performed by this crate.

use super::gesture::SwipeDismiss;
use crate::shared::fmt::decimal::{fixed, price};
use crate::shared::Side;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Quick-fill buttons, in percent of the wallet balance.
pub const QUICK_FILL_PERCENTS: [u32; 4] = [25, 50, 75, 100];

/// Shown in place of every balance / preview value while no wallet is connected.
pub const DISCONNECTED_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Market => "Market",
            OrderType::Limit => "Limit",
        }
    }
}

/// What a limit order's trigger value refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitKind {
    #[default]
    MarketCap,
    Price,
}

impl LimitKind {
    pub fn label(&self) -> &'static str {
        match self {
            LimitKind::MarketCap => "MC is",
            LimitKind::Price => "Price",
        }
    }
}

/// Label/value lines under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPreview {
    pub entry_price: String,
    pub position_size: String,
    pub slippage: String,
}

/// `^\d*\.?\d*$`
fn is_amount_input(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit() || c == '.')
        && input.chars().filter(|&c| c == '.').count() <= 1
}

fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim_end_matches('.');
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    let normalized = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// State of one order modal.
#[derive(Debug, Clone)]
pub struct OrderForm {
    side: Side,
    open: bool,
    connected: bool,
    balance: Option<Decimal>,
    amount: String,
    active_percent: Option<u32>,
    order_type: OrderType,
    limit_kind: LimitKind,
    limit_value: String,
    swipe: SwipeDismiss,
}

impl OrderForm {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            open: false,
            connected: false,
            balance: None,
            amount: String::new(),
            active_percent: None,
            order_type: OrderType::default(),
            limit_kind: LimitKind::default(),
            limit_value: String::new(),
            swipe: SwipeDismiss::default(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Fixed slippage shown in the preview.
    pub fn slippage(&self) -> &'static str {
        match self.side {
            Side::Buy => "2%",
            Side::Sell => "10%",
        }
    }

    // ── Modal ────────────────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.swipe.touch_end();
    }

    pub fn touch_start(&mut self, y: f32) {
        self.swipe.touch_start(y);
    }

    /// Returns `true` when the drag closed the modal.
    pub fn touch_move(&mut self, y: f32) -> bool {
        if self.open && self.swipe.touch_move(y) {
            self.close();
            return true;
        }
        false
    }

    pub fn touch_end(&mut self) {
        self.swipe.touch_end();
    }

    // ── Wallet ───────────────────────────────────────────────────────────

    /// Update wallet connection. Disconnecting clears the inputs.
    pub fn set_wallet(&mut self, connected: bool, balance: Option<Decimal>) {
        self.connected = connected;
        self.balance = if connected { balance } else { None };
        if !connected {
            self.amount.clear();
            self.active_percent = None;
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn balance_text(&self) -> String {
        match (self.connected, self.balance) {
            (true, Some(balance)) => {
                let dp = match self.side {
                    Side::Buy => 4,
                    Side::Sell => 2,
                };
                fixed(&balance, dp)
            }
            _ => DISCONNECTED_PLACEHOLDER.to_string(),
        }
    }

    // ── Inputs ───────────────────────────────────────────────────────────

    pub fn amount_input(&self) -> &str {
        &self.amount
    }

    pub fn amount(&self) -> Decimal {
        parse_amount(&self.amount)
    }

    /// Accepts digits with at most one decimal point. Rejected input, or any
    /// input while disconnected, leaves the field unchanged.
    pub fn set_amount(&mut self, input: &str) -> bool {
        if !self.connected || !is_amount_input(input) {
            return false;
        }
        self.amount = input.to_string();
        self.active_percent = None;
        true
    }

    pub fn quick_fill_enabled(&self) -> bool {
        self.connected
    }

    pub fn active_percent(&self) -> Option<u32> {
        self.active_percent
    }

    /// Fill `balance * percent / 100`, rounded to four decimals. A product
    /// outside the `Decimal` range leaves the field unchanged.
    pub fn quick_fill(&mut self, percent: u32) -> bool {
        if !self.quick_fill_enabled() {
            return false;
        }
        let Some(balance) = self.balance else {
            return false;
        };
        let Some(scaled) = balance.checked_mul(Decimal::from(percent)) else {
            return false;
        };
        let amount = (scaled / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        self.amount = amount.to_string();
        self.active_percent = Some(percent);
        true
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn set_order_type(&mut self, order_type: OrderType) -> bool {
        if !self.connected {
            return false;
        }
        self.order_type = order_type;
        true
    }

    /// Whether the limit trigger row is visible.
    pub fn shows_limit(&self) -> bool {
        self.order_type == OrderType::Limit
    }

    pub fn limit_kind(&self) -> LimitKind {
        self.limit_kind
    }

    pub fn set_limit_kind(&mut self, kind: LimitKind) {
        self.limit_kind = kind;
    }

    pub fn limit_value(&self) -> &str {
        &self.limit_value
    }

    /// Digits only.
    pub fn set_limit_value(&mut self, input: &str) -> bool {
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        self.limit_value = input.to_string();
        true
    }

    // ── Preview ──────────────────────────────────────────────────────────

    /// Preview lines for `pair_price` (quote per base).
    ///
    /// Position size is `amount / pair_price` to two decimals, `0.00` when the
    /// price is not positive or the quotient overflows.
    pub fn preview(&self, pair_price: &Decimal, base_symbol: &str, quote_symbol: &str) -> OrderPreview {
        if !self.connected {
            return OrderPreview {
                entry_price: DISCONNECTED_PLACEHOLDER.to_string(),
                position_size: DISCONNECTED_PLACEHOLDER.to_string(),
                slippage: DISCONNECTED_PLACEHOLDER.to_string(),
            };
        }

        let size = Some(*pair_price)
            .filter(|p| *p > Decimal::ZERO)
            .and_then(|p| self.amount().checked_div(p))
            .map(|size| fixed(&size, 2))
            .unwrap_or_else(|| "0.00".to_string());

        OrderPreview {
            entry_price: format!("{} {}", price(pair_price), quote_symbol),
            position_size: format!("{size} {base_symbol}"),
            slippage: self.slippage().to_string(),
        }
    }

    /// Label of the primary button.
    pub fn action_label(&self) -> &'static str {
        match (self.connected, self.side) {
            (false, _) => "Connect Wallet",
            (true, Side::Buy) => "BUY",
            (true, Side::Sell) => "SELL",
        }
    }
}
