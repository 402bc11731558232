use super::*;

fn expense(id: i64) -> Expense {
    Expense {
        id,
        user_id: 1,
        user_name: None,
        category_id: None,
        category_name: None,
        amount: 10.0,
        currency: "USD".to_owned(),
        date: "2026-01-25".to_owned(),
        description: None,
        receipt_mongo_id: None,
        tags: Vec::new(),
        created_at: "2026-01-25T10:00:00".to_owned(),
        updated_at: "2026-01-25T10:00:00".to_owned(),
    }
}

fn page_of(items: Vec<Expense>, number: u32, total_pages: u32, total_elements: u64) -> Page<Expense> {
    let empty = items.is_empty();
    Page {
        content: items,
        total_elements,
        total_pages,
        size: 10,
        number,
        first: number == 0,
        last: number + 1 >= total_pages,
        empty,
    }
}

// =============================================================
// FilterForm
// =============================================================

#[test]
fn filter_form_keeps_only_non_empty_entries() {
    let form = FilterForm {
        from_date: "2026-01-01".to_owned(),
        q: "  lunch ".to_owned(),
        currency: " ".to_owned(),
        ..FilterForm::default()
    };
    let filters = form.to_filters();
    assert_eq!(filters.from_date.as_deref(), Some("2026-01-01"));
    assert_eq!(filters.q.as_deref(), Some("lunch"));
    assert_eq!(filters.currency, None);
    assert_eq!(filters.to_date, None);
}

#[test]
fn filter_form_parses_numbers_and_drops_garbage() {
    let form = FilterForm {
        category_id: "3".to_owned(),
        min_amount: "10.5".to_owned(),
        max_amount: "lots".to_owned(),
        ..FilterForm::default()
    };
    let filters = form.to_filters();
    assert_eq!(filters.category_id, Some(3));
    assert_eq!(filters.min_amount, Some(10.5));
    assert_eq!(filters.max_amount, None);

    let bad_category = FilterForm { category_id: "x".to_owned(), ..FilterForm::default() };
    assert_eq!(bad_category.to_filters().category_id, None);
}

#[test]
fn filter_form_get_and_set_by_field() {
    let mut form = FilterForm::default();
    form.set(FilterField::MaxAmount, "99".to_owned());
    form.set(FilterField::Tag, "work".to_owned());
    assert_eq!(form.get(FilterField::MaxAmount), "99");
    assert_eq!(form.max_amount, "99");
    assert_eq!(form.get(FilterField::Tag), "work");
    assert_eq!(form.get(FilterField::Q), "");
}

#[test]
fn empty_form_yields_empty_filters() {
    assert!(FilterForm::default().to_filters().is_empty());
}

// =============================================================
// Filters and paging
// =============================================================

#[test]
fn default_state_starts_on_first_page() {
    let state = ExpenseListState::default();
    assert_eq!(state.page, 0);
    assert_eq!(state.size, DEFAULT_PAGE_SIZE);
    assert!(state.items.is_empty());
}

#[test]
fn unsupported_initial_page_size_falls_back() {
    assert_eq!(ExpenseListState::with_page_size(7).size, DEFAULT_PAGE_SIZE);
    assert_eq!(ExpenseListState::with_page_size(50).size, 50);
}

#[test]
fn apply_filters_copies_form_and_resets_page() {
    let mut state = ExpenseListState { page: 3, ..ExpenseListState::default() };
    state.form.tag = "travel".to_owned();
    state.apply_filters();
    assert_eq!(state.filters.tag.as_deref(), Some("travel"));
    assert_eq!(state.page, 0);
}

#[test]
fn editing_form_does_not_change_applied_filters() {
    let mut state = ExpenseListState::default();
    state.form.q = "coffee".to_owned();
    assert!(state.query().filters.is_empty());
}

#[test]
fn clear_filters_resets_form_filters_and_page() {
    let mut state = ExpenseListState::default();
    state.form.q = "coffee".to_owned();
    state.apply_filters();
    state.page = 2;
    state.clear_filters();
    assert_eq!(state.form, FilterForm::default());
    assert!(state.filters.is_empty());
    assert_eq!(state.page, 0);
}

#[test]
fn set_page_size_accepts_only_known_sizes() {
    let mut state = ExpenseListState { page: 4, ..ExpenseListState::default() };
    assert!(!state.set_page_size(15));
    assert_eq!(state.page, 4);
    assert!(state.set_page_size(50));
    assert_eq!(state.size, 50);
    assert_eq!(state.page, 0);
    assert!(!state.set_page_size(50));
}

#[test]
fn next_and_prev_are_clamped() {
    let mut state = ExpenseListState::default();
    state.finish_load(page_of(vec![expense(1)], 0, 3, 25));
    assert!(!state.prev_page());
    assert!(state.next_page());
    assert!(state.next_page());
    assert_eq!(state.page, 2);
    assert!(!state.can_next());
    assert!(!state.next_page());
    assert_eq!(state.page, 2);
    assert!(state.prev_page());
    assert_eq!(state.page, 1);
}

#[test]
fn next_page_is_blocked_with_no_pages() {
    let mut state = ExpenseListState::default();
    assert!(!state.can_next());
    assert!(!state.next_page());
}

#[test]
fn query_uses_applied_filters_page_and_sort() {
    let mut state = ExpenseListState::with_page_size(20);
    state.form.currency = "EUR".to_owned();
    state.apply_filters();
    state.page = 1;
    let query = state.query();
    assert_eq!(query.page, 1);
    assert_eq!(query.size, 20);
    assert_eq!(query.sort, "date,desc");
    assert_eq!(query.filters.currency.as_deref(), Some("EUR"));
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn load_lifecycle_updates_fields() {
    let mut state = ExpenseListState::default();
    state.fail_load("boom");
    state.begin_load();
    assert!(state.loading);
    assert_eq!(state.error, None);

    state.finish_load(page_of(vec![expense(1), expense(2)], 0, 1, 2));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total_elements, 2);

    state.begin_load();
    state.fail_load(LOAD_EXPENSES_FAILED);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load expenses"));
    assert_eq!(state.items.len(), 2);
}

// =============================================================
// Range label / pagination visibility
// =============================================================

#[test]
fn range_label_covers_middle_and_last_pages() {
    let mut state = ExpenseListState::default();
    state.finish_load(page_of((1..=10).map(expense).collect(), 1, 3, 25));
    state.page = 1;
    assert_eq!(state.range_label(), "Showing 11 - 20 of 25 expenses");

    state.finish_load(page_of((1..=5).map(expense).collect(), 2, 3, 25));
    state.page = 2;
    assert_eq!(state.range_label(), "Showing 21 - 25 of 25 expenses");
}

#[test]
fn range_label_with_no_items_starts_at_zero() {
    let mut state = ExpenseListState::default();
    state.finish_load(page_of(Vec::new(), 0, 0, 0));
    assert_eq!(state.range_label(), "Showing 0 - 0 of 0 expenses");
}

#[test]
fn pagination_shown_only_for_multiple_pages() {
    let mut state = ExpenseListState::default();
    state.finish_load(page_of(vec![expense(1)], 0, 1, 1));
    assert!(!state.show_pagination());
    state.finish_load(page_of(vec![expense(1)], 0, 2, 11));
    assert!(state.show_pagination());
}
