//! REST endpoint helpers for the expense backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Each endpoint is a plain async function taking the session token. Path and
//! query construction lives in small pure helpers so it can be unit-tested
//! without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

#[cfg(any(test, feature = "hydrate"))]
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::types::{
    Category, Expense, ExpenseCreate, ExpenseFilters, ExpenseQuery, ExpenseUpdate, LoginRequest, LoginResponse, Page,
    Receipt,
};
use crate::util::file::SelectedFile;

/// Page size used when the dashboard walks every page of its window.
pub const DASHBOARD_PAGE_SIZE: u32 = 100;

/// Characters left unescaped in query values (RFC 3986 unreserved set).
#[cfg(any(test, feature = "hydrate"))]
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[cfg(any(test, feature = "hydrate"))]
fn build_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Filter parameters in wire order; `q` is only accepted by the list endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn filter_params(filters: &ExpenseFilters, include_q: bool) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.is_empty()).cloned();
    if let Some(v) = non_empty(&filters.from_date) {
        params.push(("fromDate", v));
    }
    if let Some(v) = non_empty(&filters.to_date) {
        params.push(("toDate", v));
    }
    if let Some(v) = filters.category_id {
        params.push(("categoryId", v.to_string()));
    }
    if let Some(v) = filters.min_amount {
        params.push(("minAmount", v.to_string()));
    }
    if let Some(v) = filters.max_amount {
        params.push(("maxAmount", v.to_string()));
    }
    if include_q {
        if let Some(v) = non_empty(&filters.q) {
            params.push(("q", v));
        }
    }
    if let Some(v) = non_empty(&filters.currency) {
        params.push(("currency", v));
    }
    if let Some(v) = non_empty(&filters.tag) {
        params.push(("tag", v));
    }
    params
}

#[cfg(any(test, feature = "hydrate"))]
fn expenses_list_path(query: &ExpenseQuery) -> String {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("size", query.size.to_string()),
        ("sort", query.sort.clone()),
    ];
    params.extend(filter_params(&query.filters, true));
    format!("/expenses?{}", build_query(&params))
}

#[cfg(any(test, feature = "hydrate"))]
fn expenses_total_path(filters: &ExpenseFilters) -> String {
    let params = filter_params(filters, false);
    if params.is_empty() {
        "/expenses/total".to_owned()
    } else {
        format!("/expenses/total?{}", build_query(&params))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn total_by_category_path(category_id: i64, from_date: Option<&str>, to_date: Option<&str>) -> String {
    let mut params = vec![("categoryId", category_id.to_string())];
    if let Some(v) = from_date.filter(|s| !s.is_empty()) {
        params.push(("fromDate", v.to_owned()));
    }
    if let Some(v) = to_date.filter(|s| !s.is_empty()) {
        params.push(("toDate", v.to_owned()));
    }
    format!("/expenses/total-by-category?{}", build_query(&params))
}

#[cfg(any(test, feature = "hydrate"))]
fn category_search_path(query: &str) -> String {
    format!("/categories/search?{}", build_query(&[("q", query.to_owned())]))
}

#[cfg(any(test, feature = "hydrate"))]
fn receipt_link_path(receipt_id: &str, expense_id: i64) -> String {
    format!("/receipts/{}/link/{expense_id}", utf8_percent_encode(receipt_id, QUERY_VALUE))
}

#[cfg(any(test, feature = "hydrate"))]
fn receipt_path(receipt_id: &str, suffix: &str) -> String {
    format!("/receipts/{}{suffix}", utf8_percent_encode(receipt_id, QUERY_VALUE))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================
// Browser transport
// =============================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_value};
    use crate::config::ClientConfig;

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    fn url(path: &str) -> String {
        ClientConfig::get().url(path)
    }

    pub(super) fn get(path: &str, token: &str) -> RequestBuilder {
        Request::get(&url(path)).header("Authorization", &bearer_value(token))
    }

    pub(super) fn post(path: &str, token: &str) -> RequestBuilder {
        Request::post(&url(path)).header("Authorization", &bearer_value(token))
    }

    pub(super) fn put(path: &str, token: &str) -> RequestBuilder {
        Request::put(&url(path)).header("Authorization", &bearer_value(token))
    }

    pub(super) fn patch(path: &str, token: &str) -> RequestBuilder {
        Request::patch(&url(path)).header("Authorization", &bearer_value(token))
    }

    pub(super) fn delete(path: &str, token: &str) -> RequestBuilder {
        Request::delete(&url(path)).header("Authorization", &bearer_value(token))
    }

    pub(super) fn anonymous_post(path: &str) -> RequestBuilder {
        Request::post(&url(path))
    }

    pub(super) fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
        builder.json(body).map_err(network)
    }

    pub(super) fn bare(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(network)
    }

    /// Send and fail on non-2xx, returning the raw response.
    pub(super) async fn send(req: Request) -> Result<Response, ApiError> {
        let resp = req.send().await.map_err(network)?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &text);
        leptos::logging::warn!("api error: {} {} -> {err}", resp.url(), status);
        Err(err)
    }

    pub(super) async fn send_json<T: DeserializeOwned>(req: Request) -> Result<T, ApiError> {
        let resp = send(req).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send_empty(req: Request) -> Result<(), ApiError> {
        send(req).await.map(|_| ())
    }
}

// =============================================================
// Auth
// =============================================================

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or credentials are rejected.
pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::with_json(transport::anonymous_post("/auth/login"), credentials)?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Expenses
// =============================================================

/// Fetch one page of expenses via `GET /expenses`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_expenses(token: &str, query: &ExpenseQuery) -> Result<Page<Expense>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get(&expenses_list_path(query), token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single expense via `GET /expenses/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn get_expense(token: &str, id: i64) -> Result<Expense, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get(&format!("/expenses/{id}"), token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Create an expense via `POST /expenses`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the payload.
pub async fn create_expense(token: &str, dto: &ExpenseCreate) -> Result<Expense, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::with_json(transport::post("/expenses", token), dto)?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, dto);
        Err(ApiError::Unavailable)
    }
}

/// Update an expense via `PUT /expenses/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the payload.
pub async fn update_expense(token: &str, id: i64, dto: &ExpenseUpdate) -> Result<Expense, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::with_json(transport::put(&format!("/expenses/{id}"), token), dto)?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, dto);
        Err(ApiError::Unavailable)
    }
}

/// Delete an expense via `DELETE /expenses/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_expense(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::delete(&format!("/expenses/{id}"), token))?;
        transport::send_empty(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Sum of expense amounts matching `filters`, via `GET /expenses/total`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn total_expenses(token: &str, filters: &ExpenseFilters) -> Result<f64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get(&expenses_total_path(filters), token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filters);
        Err(ApiError::Unavailable)
    }
}

/// Sum of one category's expenses, via `GET /expenses/total-by-category`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn total_by_category(
    token: &str,
    category_id: i64,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<f64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = total_by_category_path(category_id, from_date, to_date);
        let req = transport::bare(transport::get(&path, token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, category_id, from_date, to_date);
        Err(ApiError::Unavailable)
    }
}

/// Walk pages from 0 until one reports `last` (or comes back empty),
/// concatenating their contents in order.
///
/// # Errors
///
/// Propagates the first page fetch error.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut all = Vec::new();
    let mut page = 0;
    loop {
        let batch = fetch_page(page).await?;
        let done = batch.last || batch.content.is_empty();
        all.extend(batch.content);
        if done {
            return Ok(all);
        }
        page += 1;
    }
}

/// Fetch every expense matching `filters`, newest first.
///
/// # Errors
///
/// Returns the first page fetch error.
pub async fn fetch_all_expenses(token: &str, filters: &ExpenseFilters, page_size: u32) -> Result<Vec<Expense>, ApiError> {
    collect_pages(|page| {
        let query = ExpenseQuery::new(filters.clone(), page, page_size);
        async move { list_expenses(token, &query).await }
    })
    .await
}

// =============================================================
// Categories
// =============================================================

/// List the user's categories via `GET /categories`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_categories(token: &str) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get("/categories", token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Search categories by name via `GET /categories/search`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn search_categories(token: &str, query: &str) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get(&category_search_path(query), token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct CategoryBody<'a> {
    name: &'a str,
}

/// Create a category via `POST /categories`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the name is rejected.
pub async fn create_category(token: &str, name: &str) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::with_json(transport::post("/categories", token), &CategoryBody { name })?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, name);
        Err(ApiError::Unavailable)
    }
}

/// Rename a category via `PUT /categories/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the name is rejected.
pub async fn update_category(token: &str, id: i64, name: &str) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::with_json(transport::put(&format!("/categories/{id}"), token), &CategoryBody { name })?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, name);
        Err(ApiError::Unavailable)
    }
}

/// Delete a category via `DELETE /categories/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_category(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::delete(&format!("/categories/{id}"), token))?;
        transport::send_empty(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Receipts
// =============================================================

/// Upload a receipt file as multipart form data via `POST /receipts`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the file handle is missing, the form cannot be
/// built, or the upload fails.
pub async fn upload_receipt(token: &str, file: &SelectedFile, notes: Option<&str>) -> Result<Receipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let handle = file.handle.as_ref().ok_or(ApiError::Unavailable)?;
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", handle, &file.name)
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
        if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
            form.append_with_str("notes", notes)
                .map_err(|_| ApiError::Network("could not attach notes".to_owned()))?;
        }
        let req = transport::post("/receipts", token)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, file, notes);
        Err(ApiError::Unavailable)
    }
}

/// Fetch receipt metadata via `GET /receipts/{id}/metadata`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn receipt_metadata(token: &str, id: &str) -> Result<Receipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get(&receipt_path(id, "/metadata"), token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Replace a receipt's notes via `PATCH /receipts/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_receipt_notes(token: &str, id: &str, notes: &str) -> Result<Receipt, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "notes": notes });
        let req = transport::with_json(transport::patch(&receipt_path(id, ""), token), &body)?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, notes);
        Err(ApiError::Unavailable)
    }
}

/// Delete a receipt via `DELETE /receipts/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete_receipt(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::delete(&receipt_path(id, ""), token))?;
        transport::send_empty(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Attach a receipt to an expense via `POST /receipts/{id}/link/{expenseId}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn link_receipt(token: &str, receipt_id: &str, expense_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::post(&receipt_link_path(receipt_id, expense_id), token))?;
        transport::send_empty(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, receipt_id, expense_id);
        Err(ApiError::Unavailable)
    }
}

/// Detach a receipt from its expense via `POST /receipts/{id}/unlink`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn unlink_receipt(token: &str, receipt_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::post(&receipt_path(receipt_id, "/unlink"), token))?;
        transport::send_empty(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, receipt_id);
        Err(ApiError::Unavailable)
    }
}

/// Receipts not yet linked to any expense, via `GET /receipts/unassigned`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn list_unassigned_receipts(token: &str) -> Result<Vec<Receipt>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get("/receipts/unassigned", token))?;
        transport::send_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch receipt bytes via `GET /receipts/{id}` and wrap them in an object
/// URL suitable for `<img src>` / `<iframe src>` previews.
///
/// The caller owns the URL and must release it with [`revoke_object_url`].
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the blob cannot be created.
pub async fn receipt_object_url(token: &str, id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::bare(transport::get(&receipt_path(id, ""), token))?;
        let resp = transport::send(req).await?;
        let mime = resp.headers().get("content-type").unwrap_or_default();
        let bytes = resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| ApiError::Decode("could not build blob".to_owned()))?;
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| ApiError::Decode("could not create object URL".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Release an object URL created by [`receipt_object_url`].
pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
