//! Target URL validation policy.
//!
//! Rejects malformed target URLs and URLs pointing at denylisted file types
//! before any state is touched. Pure functions of the input and the denylist.

use url::Url;

/// File extensions that may not be shortened.
///
/// Covers executables, installers, scripts, and archive formats commonly used
/// to distribute malware.
pub const DEFAULT_BLOCKED_EXTENSIONS: &[&str] = &[
    ".exe", ".msi", ".bat", ".cmd", ".com", ".scr", ".pif", ".dll", ".sh", ".ps1", ".vbs", ".js",
    ".jar", ".apk", ".dmg", ".iso", ".zip", ".rar", ".7z", ".gz",
];

/// Why a target URL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Not an absolute `http`/`https` URL (including unparseable input).
    InvalidFormat,
    /// The URL path ends with a denylisted file extension.
    BlockedExtension,
}

impl RejectReason {
    /// Machine-readable reason code, as reported to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::BlockedExtension => "blocked_extension",
        }
    }
}

/// Validates a target URL against format rules and the extension denylist.
///
/// Format is checked first: the input must parse as an absolute URL with an
/// `http` or `https` scheme. Unparseable input reports `InvalidFormat`. The
/// extension check runs second, against the lower-cased URL path.
pub fn validate_target_url(target_url: &str, blocked: &[String]) -> Result<(), RejectReason> {
    let url = Url::parse(target_url).map_err(|_| RejectReason::InvalidFormat)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(RejectReason::InvalidFormat),
    }

    let path = url.path().to_ascii_lowercase();
    if blocked.iter().any(|ext| path.ends_with(ext.as_str())) {
        return Err(RejectReason::BlockedExtension);
    }

    Ok(())
}

/// The compiled-in denylist as owned strings, for injection at composition time.
pub fn default_blocked_extensions() -> Vec<String> {
    DEFAULT_BLOCKED_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
