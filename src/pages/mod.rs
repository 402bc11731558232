//! Page modules for the top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen's state signal and the fetches that fill it,
//! and delegates rendering details to `components`.

pub mod categories;
pub mod dashboard;
pub mod expenses;
pub mod login;
pub mod new_expense;
pub mod receipts;
