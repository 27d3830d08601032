//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. [`Link`] is the
//! sole persistent entity; [`NewLink`] is its creation input.

pub mod link;

pub use link::{Link, NewLink};
