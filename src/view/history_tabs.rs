//! "My Orders" / "History" tabs under the detail screen.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HistoryTab {
    #[default]
    MyOrders,
    History,
}

impl HistoryTab {
    pub const ALL: [HistoryTab; 2] = [HistoryTab::MyOrders, HistoryTab::History];

    pub fn label(&self) -> &'static str {
        match self {
            HistoryTab::MyOrders => "My Orders",
            HistoryTab::History => "History",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            HistoryTab::MyOrders => "Currently you have no orders",
            HistoryTab::History => "No Data",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryTabs {
    selected: HistoryTab,
}

impl HistoryTabs {
    pub fn selected(&self) -> HistoryTab {
        self.selected
    }

    pub fn select(&mut self, tab: HistoryTab) {
        self.selected = tab;
    }

    /// Body text of the selected tab. Order history is not tracked yet, so
    /// every tab shows its empty state.
    pub fn body(&self) -> &'static str {
        self.selected.empty_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_my_orders() {
        let tabs = HistoryTabs::default();
        assert_eq!(tabs.selected(), HistoryTab::MyOrders);
        assert_eq!(tabs.body(), "Currently you have no orders");
    }

    #[test]
    fn test_history_tab_empty_text() {
        let mut tabs = HistoryTabs::default();
        tabs.select(HistoryTab::History);
        assert_eq!(tabs.body(), "No Data");
        assert_eq!(HistoryTab::History.label(), "History");
    }
}
