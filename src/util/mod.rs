//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure logic (dates, money, files, form checks) so
//! pages stay thin and the rules are testable without a browser.

pub mod dates;
pub mod file;
pub mod format;
pub mod validation;
