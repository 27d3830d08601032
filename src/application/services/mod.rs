//! Application services orchestrating domain operations.

pub mod link_service;

pub use link_service::{LinkService, Resolution};
