use super::*;
use time::macros::date;

fn valid_input() -> ExpenseFormInput {
    ExpenseFormInput {
        amount: "45.50".to_owned(),
        currency: "USD".to_owned(),
        date: "2026-01-25".to_owned(),
        category_id: "1".to_owned(),
        description: "Lunch at restaurant".to_owned(),
        tags: "restaurant, lunch".to_owned(),
        receipt: None,
    }
}

fn errors_of(input: &ExpenseFormInput) -> Vec<FieldError> {
    validate_expense_form(input).unwrap_err()
}

// =============================================================
// Blank form
// =============================================================

#[test]
fn blank_form_defaults_to_usd_and_given_day() {
    let input = ExpenseFormInput::blank(date!(2026 - 01 - 05));
    assert_eq!(input.currency, "USD");
    assert_eq!(input.date, "2026-01-05");
    assert!(input.amount.is_empty());
}

#[test]
fn blank_form_fails_only_on_amount() {
    let errs = errors_of(&ExpenseFormInput::blank(date!(2026 - 01 - 05)));
    assert_eq!(errs, vec![FieldError { field: "amount", message: MSG_AMOUNT_REQUIRED }]);
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn valid_form_produces_draft() {
    let draft = validate_expense_form(&valid_input()).unwrap();
    assert_eq!(draft.amount, 45.5);
    assert_eq!(draft.currency, "USD");
    assert_eq!(draft.date, "2026-01-25");
    assert_eq!(draft.category_id, Some(1));
    assert_eq!(draft.description.as_deref(), Some("Lunch at restaurant"));
    assert_eq!(draft.tags, Some(vec!["restaurant".to_owned(), "lunch".to_owned()]));
}

#[test]
fn empty_optionals_become_absent() {
    let input = ExpenseFormInput {
        category_id: String::new(),
        description: String::new(),
        tags: " , ,".to_owned(),
        ..valid_input()
    };
    let draft = validate_expense_form(&input).unwrap();
    assert_eq!(draft.category_id, None);
    assert_eq!(draft.description, None);
    assert_eq!(draft.tags, None);
}

#[test]
fn draft_into_create_attaches_receipt() {
    let dto = validate_expense_form(&valid_input()).unwrap().into_create(Some("r-1".to_owned()));
    assert_eq!(dto.receipt_mongo_id.as_deref(), Some("r-1"));
    assert_eq!(dto.category_id, Some(1));
}

#[test]
fn lowercase_currency_is_normalized() {
    let input = ExpenseFormInput { currency: "eur".to_owned(), ..valid_input() };
    assert_eq!(validate_expense_form(&input).unwrap().currency, "EUR");
}

// =============================================================
// Amount
// =============================================================

#[test]
fn amount_zero_and_negative_are_rejected() {
    for raw in ["0", "-10", "0.001"] {
        let input = ExpenseFormInput { amount: raw.to_owned(), ..valid_input() };
        assert_eq!(error_for(&errors_of(&input), "amount"), Some(MSG_AMOUNT_TOO_SMALL), "amount {raw}");
    }
}

#[test]
fn amount_bounds_are_inclusive() {
    let min = ExpenseFormInput { amount: "0.01".to_owned(), ..valid_input() };
    assert!(validate_expense_form(&min).is_ok());
    let max = ExpenseFormInput { amount: "999999999.99".to_owned(), ..valid_input() };
    assert!(validate_expense_form(&max).is_ok());
}

#[test]
fn amount_too_large_is_rejected() {
    let input = ExpenseFormInput { amount: "1000000000".to_owned(), ..valid_input() };
    assert_eq!(error_for(&errors_of(&input), "amount"), Some(MSG_AMOUNT_TOO_LARGE));
}

#[test]
fn amount_non_numeric_is_rejected() {
    for raw in ["abc", "NaN", "inf"] {
        let input = ExpenseFormInput { amount: raw.to_owned(), ..valid_input() };
        assert_eq!(error_for(&errors_of(&input), "amount"), Some(MSG_AMOUNT_NOT_NUMBER), "amount {raw}");
    }
}

// =============================================================
// Currency / date / category
// =============================================================

#[test]
fn currency_missing_or_unsupported_is_required() {
    for raw in ["", "XYZ"] {
        let input = ExpenseFormInput { currency: raw.to_owned(), ..valid_input() };
        assert_eq!(error_for(&errors_of(&input), "currency"), Some(MSG_CURRENCY_REQUIRED));
    }
}

#[test]
fn date_missing_or_invalid() {
    let missing = ExpenseFormInput { date: String::new(), ..valid_input() };
    assert_eq!(error_for(&errors_of(&missing), "date"), Some(MSG_DATE_REQUIRED));
    let invalid = ExpenseFormInput { date: "2026-02-30".to_owned(), ..valid_input() };
    assert_eq!(error_for(&errors_of(&invalid), "date"), Some(MSG_DATE_INVALID));
    let datetime = ExpenseFormInput { date: "2026-01-25T10:00".to_owned(), ..valid_input() };
    assert_eq!(error_for(&errors_of(&datetime), "date"), Some(MSG_DATE_INVALID));
}

#[test]
fn non_numeric_category_is_treated_as_none() {
    let input = ExpenseFormInput { category_id: "abc".to_owned(), ..valid_input() };
    assert_eq!(validate_expense_form(&input).unwrap().category_id, None);
}

// =============================================================
// Description / receipt / ordering
// =============================================================

#[test]
fn description_limit_counts_characters() {
    let ok = ExpenseFormInput { description: "é".repeat(1000), ..valid_input() };
    assert!(validate_expense_form(&ok).is_ok());
    let long = ExpenseFormInput { description: "a".repeat(1001), ..valid_input() };
    assert_eq!(error_for(&errors_of(&long), "description"), Some(MSG_DESCRIPTION_TOO_LONG));
}

#[test]
fn unsupported_receipt_type_is_rejected() {
    let input = ExpenseFormInput { receipt: Some(SelectedFile::new("notes.txt", "text/plain", 10)), ..valid_input() };
    assert_eq!(error_for(&errors_of(&input), "receipt"), Some(MSG_RECEIPT_UNSUPPORTED));
}

#[test]
fn errors_are_reported_in_field_order() {
    let input = ExpenseFormInput {
        amount: String::new(),
        currency: String::new(),
        date: String::new(),
        description: "x".repeat(1001),
        ..valid_input()
    };
    let fields: Vec<_> = errors_of(&input).iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["amount", "currency", "date", "description"]);
}

// =============================================================
// parse_tags
// =============================================================

#[test]
fn parse_tags_trims_and_drops_empties() {
    assert_eq!(parse_tags(" business, travel ,,food "), vec!["business", "travel", "food"]);
    assert!(parse_tags("").is_empty());
}

// =============================================================
// Category / receipt / login
// =============================================================

#[test]
fn category_name_is_trimmed_and_required() {
    assert_eq!(validate_category_name("  Groceries "), Ok("Groceries".to_owned()));
    assert_eq!(validate_category_name("   "), Err(MSG_CATEGORY_NAME_REQUIRED));
}

#[test]
fn receipt_selection_requires_supported_file() {
    assert_eq!(validate_receipt_selection(None), Err(MSG_RECEIPT_REQUIRED));
    let pdf = SelectedFile::new("a.pdf", "application/pdf", 100);
    assert_eq!(validate_receipt_selection(Some(&pdf)), Ok(&pdf));
    let zip = SelectedFile::new("a.zip", "application/zip", 100);
    assert_eq!(validate_receipt_selection(Some(&zip)), Err(MSG_RECEIPT_UNSUPPORTED));
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(
        validate_login(" demo@example.com ", "secret"),
        Ok(LoginRequest { email: "demo@example.com".to_owned(), password: "secret".to_owned() })
    );
    assert_eq!(validate_login("", "secret"), Err(MSG_LOGIN_REQUIRED));
    assert_eq!(validate_login("demo@example.com", "  "), Err(MSG_LOGIN_REQUIRED));
}
