//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, receipt, chart, and paging surfaces shared by
//! pages, reading auth and navigation from Leptos context.

pub mod charts;
pub mod expense_form;
pub mod nav_bar;
pub mod pager;
pub mod receipt_gallery;
pub mod receipt_modal;
pub mod receipt_upload;
