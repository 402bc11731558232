//! Networking modules for the expense REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one async function per endpoint, `error` classifies failures
//! into banner text, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
