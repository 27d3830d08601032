//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL, optionally seeded with a phrase.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The target URL to shorten (must be a valid HTTP/HTTPS URL).
    ///
    /// Defaults to empty when absent so a missing field flows through URL
    /// validation and reports `invalid_format` like any other bad input.
    #[serde(default)]
    pub long_url: String,

    /// Optional human-readable phrase folded into the slug.
    #[serde(default)]
    pub phrase: String,
}

/// Response carrying the newly created slug.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub slug: String,
}
