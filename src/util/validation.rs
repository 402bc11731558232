//! Client-side form validation for expenses, categories, receipts, and login.
//!
//! DESIGN
//! ======
//! Forms keep raw input strings; validation turns them into typed drafts or a
//! list of field errors in field order, so a view can render every message at
//! once and tests need no DOM.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use super::dates;
use super::file::{SelectedFile, is_supported_receipt};
use super::format::{DEFAULT_CURRENCY, is_supported_currency};
use crate::net::types::{ExpenseCreate, LoginRequest};

pub const MIN_AMOUNT: f64 = 0.01;
pub const MAX_AMOUNT: f64 = 999_999_999.99;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

pub const MSG_AMOUNT_REQUIRED: &str = "Amount is required";
pub const MSG_AMOUNT_NOT_NUMBER: &str = "Amount must be a number";
pub const MSG_AMOUNT_TOO_SMALL: &str = "Amount must be greater than 0";
pub const MSG_AMOUNT_TOO_LARGE: &str = "Amount is too large";
pub const MSG_CURRENCY_REQUIRED: &str = "Currency is required";
pub const MSG_DATE_REQUIRED: &str = "Date is required";
pub const MSG_DATE_INVALID: &str = "Date must be a valid date";
pub const MSG_DESCRIPTION_TOO_LONG: &str = "Description cannot exceed 1000 characters";
pub const MSG_CATEGORY_NAME_REQUIRED: &str = "Category name is required";
pub const MSG_RECEIPT_REQUIRED: &str = "Please select a file";
pub const MSG_RECEIPT_UNSUPPORTED: &str = "Only images and PDF files are supported";
pub const MSG_LOGIN_REQUIRED: &str = "Email and password are required";

/// A rejected form field and the message to show beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// First message recorded for `field`, if any.
pub fn error_for(errors: &[FieldError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Raw expense form input, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseFormInput {
    pub amount: String,
    pub currency: String,
    pub date: String,
    /// Selected category id, or empty for none.
    pub category_id: String,
    pub description: String,
    /// Comma-separated tags.
    pub tags: String,
    pub receipt: Option<SelectedFile>,
}

impl ExpenseFormInput {
    /// Blank form dated `today`.
    pub fn blank(today: time::Date) -> Self {
        Self {
            amount: String::new(),
            currency: DEFAULT_CURRENCY.to_owned(),
            date: dates::to_iso(today),
            category_id: String::new(),
            description: String::new(),
            tags: String::new(),
            receipt: None,
        }
    }
}

impl Default for ExpenseFormInput {
    fn default() -> Self {
        Self::blank(dates::today())
    }
}

/// A validated expense, ready to become a create payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub currency: String,
    pub date: String,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ExpenseDraft {
    /// Build the `POST /expenses` payload, attaching an uploaded receipt id.
    pub fn into_create(self, receipt_id: Option<String>) -> ExpenseCreate {
        ExpenseCreate {
            category_id: self.category_id,
            amount: self.amount,
            currency: self.currency,
            date: self.date,
            description: self.description,
            receipt_mongo_id: receipt_id,
            tags: self.tags,
        }
    }
}

/// Split a comma-separated tag string, trimming and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

fn validate_amount(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MSG_AMOUNT_REQUIRED);
    }
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(MSG_AMOUNT_NOT_NUMBER)?;
    if value < MIN_AMOUNT {
        return Err(MSG_AMOUNT_TOO_SMALL);
    }
    if value > MAX_AMOUNT {
        return Err(MSG_AMOUNT_TOO_LARGE);
    }
    Ok(value)
}

fn validate_date(raw: &str) -> Result<String, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MSG_DATE_REQUIRED);
    }
    if raw.len() != 10 {
        return Err(MSG_DATE_INVALID);
    }
    dates::parse_iso_date(raw).map(dates::to_iso).ok_or(MSG_DATE_INVALID)
}

/// Validate the expense form, collecting every failing field in form order.
///
/// # Errors
///
/// Returns all [`FieldError`]s when any field is invalid.
pub fn validate_expense_form(input: &ExpenseFormInput) -> Result<ExpenseDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let amount = validate_amount(&input.amount)
        .map_err(|m| errors.push(FieldError::new("amount", m)))
        .ok();

    let currency = input.currency.trim().to_ascii_uppercase();
    if currency.is_empty() || !is_supported_currency(&currency) {
        errors.push(FieldError::new("currency", MSG_CURRENCY_REQUIRED));
    }

    let date = validate_date(&input.date)
        .map_err(|m| errors.push(FieldError::new("date", m)))
        .ok();

    let category_id = input.category_id.trim().parse::<i64>().ok();

    if input.description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(FieldError::new("description", MSG_DESCRIPTION_TOO_LONG));
    }
    let description = Some(input.description.clone()).filter(|d| !d.trim().is_empty());

    let tags = Some(parse_tags(&input.tags)).filter(|t| !t.is_empty());

    if let Some(file) = &input.receipt {
        if !is_supported_receipt(&file.mime_type) {
            errors.push(FieldError::new("receipt", MSG_RECEIPT_UNSUPPORTED));
        }
    }

    match (amount, date) {
        (Some(amount), Some(date)) if errors.is_empty() => Ok(ExpenseDraft {
            amount,
            currency,
            date,
            category_id,
            description,
            tags,
        }),
        _ => Err(errors),
    }
}

/// Trimmed category name, or the required-field message.
///
/// # Errors
///
/// Returns a message when the name is blank.
pub fn validate_category_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(MSG_CATEGORY_NAME_REQUIRED);
    }
    Ok(name.to_owned())
}

/// Check that a receipt file is chosen and is an image or PDF.
///
/// # Errors
///
/// Returns a message when nothing is selected or the type is unsupported.
pub fn validate_receipt_selection(file: Option<&SelectedFile>) -> Result<&SelectedFile, &'static str> {
    let file = file.ok_or(MSG_RECEIPT_REQUIRED)?;
    if !is_supported_receipt(&file.mime_type) {
        return Err(MSG_RECEIPT_UNSUPPORTED);
    }
    Ok(file)
}

/// Build a login request from raw credentials.
///
/// # Errors
///
/// Returns a message when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MSG_LOGIN_REQUIRED);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}
