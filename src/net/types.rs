//! Wire DTOs for the expense REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON resources field-for-field (camelCase
//! on the wire). The client never owns their lifecycle; they are re-fetchable
//! view state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A user-defined label for grouping expenses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A single spending record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub amount: f64,
    pub currency: String,
    /// Calendar date, `yyyy-MM-dd`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of the linked receipt document, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_mongo_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `POST /expenses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub amount: f64,
    pub currency: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_mongo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Payload for `PUT /expenses/{id}`; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_mongo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Metadata for an uploaded receipt file (image or PDF).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<i64>,
    pub file_name: String,
    pub mime_type: String,
    pub file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Upload time; the receipts service names it `uploadedAt`.
    #[serde(default, alias = "uploadedAt", deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// One page of a paginated collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    /// Zero-based page index.
    pub number: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// Server-side filters for expense listing and totals.
///
/// Every field is optional; only set fields are sent as query parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseFilters {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub category_id: Option<i64>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Free-text search over description, tags, and category.
    pub q: Option<String>,
    pub currency: Option<String>,
    pub tag: Option<String>,
}

impl ExpenseFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A complete list request: filters plus paging and sort.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseQuery {
    pub filters: ExpenseFilters,
    pub page: u32,
    pub size: u32,
    pub sort: String,
}

/// Sort applied to every expense listing: newest first.
pub const DEFAULT_EXPENSE_SORT: &str = "date,desc";

impl ExpenseQuery {
    pub fn new(filters: ExpenseFilters, page: u32, size: u32) -> Self {
        Self { filters, page, size, sort: DEFAULT_EXPENSE_SORT.to_owned() }
    }
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationError>>,
}

/// A single field-level rejection reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}
