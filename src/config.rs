//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled:
//!
//! - `EXPENSE_API_BASE_URL`: REST base URL (default `http://localhost:8080/api/v1`)
//! - `EXPENSE_UI_LOG_LEVEL`: console log level (default `info`)
//! - `EXPENSE_UI_PAGE_SIZE`: initial expense list page size (default 10)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered by the expense list "Rows per page" selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Console log verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("error") => Self::Error,
            Some("warn") => Self::Warn,
            Some("debug") => Self::Debug,
            Some("trace") => Self::Trace,
            _ => Self::Info,
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: LogLevel,
    pub default_page_size: u32,
}

impl ClientConfig {
    /// Build config from raw optional values, applying defaults for anything
    /// missing or malformed.
    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>, page_size: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let default_page_size = page_size
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| PAGE_SIZE_OPTIONS.contains(n))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { api_base_url, log_level: LogLevel::parse(log_level), default_page_size }
    }

    /// Config baked in at build time.
    pub fn get() -> &'static Self {
        static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            Self::from_values(
                option_env!("EXPENSE_API_BASE_URL"),
                option_env!("EXPENSE_UI_LOG_LEVEL"),
                option_env!("EXPENSE_UI_PAGE_SIZE"),
            )
        })
    }

    /// Join an endpoint path onto the API base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}
