//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names on
//! the wire (`longUrl`).

pub mod health;
pub mod resolve;
pub mod shorten;
