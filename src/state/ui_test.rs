use super::*;

#[test]
fn ui_state_default_page_is_dashboard() {
    assert_eq!(UiState::default().page, Page::Dashboard);
    assert_eq!(Page::default(), Page::Dashboard);
}

#[test]
fn navigate_switches_page() {
    let mut state = UiState::default();
    state.navigate(Page::Receipts);
    assert_eq!(state.page, Page::Receipts);
}

#[test]
fn page_all_lists_every_screen_once_in_nav_order() {
    let titles: Vec<_> = Page::ALL.iter().map(|p| p.title()).collect();
    assert_eq!(titles, vec!["Dashboard", "Expenses", "New Expense", "Categories", "Receipts"]);
}
