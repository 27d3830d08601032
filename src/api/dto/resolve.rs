//! DTOs for the slug resolution endpoint.

use serde::Serialize;

/// Response for a resolved slug.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub long_url: String,
    /// True when the answer came from the cache fast path.
    pub cached: bool,
}
