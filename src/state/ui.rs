//! Top-level navigation state.
//!
//! DESIGN
//! ======
//! The app has five fixed screens and no deep links, so navigation is a
//! single enum in context rather than a router.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Screens reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Expenses,
    NewExpense,
    Categories,
    Receipts,
}

impl Page {
    /// Navigation bar order.
    pub const ALL: [Page; 5] = [Page::Dashboard, Page::Expenses, Page::NewExpense, Page::Categories, Page::Receipts];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::NewExpense => "New Expense",
            Self::Categories => "Categories",
            Self::Receipts => "Receipts",
        }
    }
}

/// UI chrome state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub page: Page,
}

impl UiState {
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }
}
