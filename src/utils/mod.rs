//! Utility functions for slug generation and URL policy checks.
//!
//! - [`slug`] - Phrase normalization and slug candidate generation
//! - [`url_policy`] - Target URL validation and the extension denylist
//! - [`db_error`] - Database error classification helpers

pub mod db_error;
pub mod slug;
pub mod url_policy;
