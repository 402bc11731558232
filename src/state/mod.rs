//! Client-side state containers shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one page's view state as a plain struct. `app` wraps them
//! in `RwSignal`s; the structs themselves stay free of reactive types so their
//! transitions are unit-testable.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod expenses;
pub mod receipts;
pub mod ui;
