//! Error type for REST calls and the text shown to users for it.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as inline banners or `alert` dialogs; there is no retry.
//! `user_message` picks the most specific text the backend offered and falls
//! back to a caller-supplied message otherwise.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorResponse;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The session is missing or expired.
    #[error("unauthorized")]
    Unauthorized,
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ErrorResponse> },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Browser-only endpoint invoked outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body text.
    pub fn from_status(status: u16, body_text: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let body = serde_json::from_str::<ErrorResponse>(body_text).ok();
        Self::Status { status, body }
    }

    /// Backend-provided message, if non-empty.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body: Some(body), .. } if !body.message.trim().is_empty() => Some(body.message.as_str()),
            _ => None,
        }
    }

    /// Banner text: the server message when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if matches!(self, Self::Unauthorized) {
            return "Your session has expired. Please sign in again.".to_owned();
        }
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// Like [`user_message`](Self::user_message) but prefers a joined list of
    /// field validation errors, as the expense form does.
    pub fn form_message(&self, fallback: &str) -> String {
        if let Self::Status { body: Some(body), .. } = self {
            if let Some(errors) = body.validation_errors.as_ref().filter(|e| !e.is_empty()) {
                let joined = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                return format!("Validation failed: {joined}");
            }
        }
        self.user_message(fallback)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
