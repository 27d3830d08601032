//! Slug normalization and candidate generation.
//!
//! A slug candidate is built from an optional human-readable phrase plus a
//! short random suffix. The phrase is reduced to the `[a-z0-9-]` alphabet;
//! the suffix provides the entropy that makes collisions rare.

/// Maximum byte length of the normalized phrase part of a slug.
pub const MAX_PHRASE_BYTES: usize = 60;

/// Number of random characters appended to every candidate.
pub const SUFFIX_LEN: usize = 6;

/// URL-safe alphabet for the random suffix (64 symbols, 6 bits per char).
const SUFFIX_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Normalizes a phrase into a safe slug prefix.
///
/// Lower-cases the input, collapses every maximal run of characters outside
/// `[a-z0-9-]` into a single `-`, strips leading/trailing hyphens, and
/// truncates to [`MAX_PHRASE_BYTES`]. Empty or all-invalid input normalizes
/// to the empty string.
///
/// The result is a fixed point: `normalize_phrase(normalize_phrase(p))`
/// always equals `normalize_phrase(p)`.
pub fn normalize_phrase(phrase: &str) -> String {
    let lowered = phrase.to_lowercase();

    let mut collapsed = String::with_capacity(lowered.len());
    let mut in_run = false;
    for ch in lowered.chars() {
        if matches!(ch, 'a'..='z' | '0'..='9' | '-') {
            collapsed.push(ch);
            in_run = false;
        } else if !in_run {
            collapsed.push('-');
            in_run = true;
        }
    }

    // Trim before truncating so the budget is spent on real content; trim
    // again afterwards so truncation can never leave a dangling hyphen.
    let mut out = collapsed.trim_start_matches('-').to_string();
    out.truncate(MAX_PHRASE_BYTES);
    let out = out.trim_end_matches('-');

    out.to_string()
}

/// Generates a fresh slug candidate for a normalized phrase.
///
/// Produces `"<normalized>-<suffix>"` when the phrase is non-empty, otherwise
/// just the suffix. Each call draws new randomness, so repeated calls with
/// the same phrase yield distinct candidates (36 bits of entropy per suffix).
pub fn generate_candidate(normalized_phrase: &str) -> String {
    let suffix = random_suffix();

    if normalized_phrase.is_empty() {
        suffix
    } else {
        format!("{normalized_phrase}-{suffix}")
    }
}

/// Draws [`SUFFIX_LEN`] characters uniformly from [`SUFFIX_ALPHABET`].
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn random_suffix() -> String {
    let mut buf = [0u8; SUFFIX_LEN];

    getrandom::fill(&mut buf).expect("Failed to generate random bytes");

    // 64-symbol alphabet, so masking to 6 bits keeps the draw uniform.
    buf.iter()
        .map(|b| SUFFIX_ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_phrase("HeLLo"), "hello");
    }

    #[test]
    fn test_normalize_collapses_invalid_runs() {
        assert_eq!(normalize_phrase("My Cool Link!!"), "my-cool-link");
        assert_eq!(normalize_phrase("a   b"), "a-b");
        assert_eq!(normalize_phrase("a?!#b"), "a-b");
    }

    #[test]
    fn test_normalize_keeps_existing_hyphens() {
        assert_eq!(normalize_phrase("a--b"), "a--b");
    }

    #[test]
    fn test_normalize_strips_edge_hyphens() {
        assert_eq!(normalize_phrase("--hello--"), "hello");
        assert_eq!(normalize_phrase("!!hello!!"), "hello");
    }

    #[test]
    fn test_normalize_empty_and_all_invalid() {
        assert_eq!(normalize_phrase(""), "");
        assert_eq!(normalize_phrase("!@#$%^&*"), "");
        assert_eq!(normalize_phrase("   "), "");
    }

    #[test]
    fn test_normalize_truncates_to_budget() {
        let long = "a".repeat(200);
        let normalized = normalize_phrase(&long);
        assert_eq!(normalized.len(), MAX_PHRASE_BYTES);
    }

    #[test]
    fn test_normalize_no_dangling_hyphen_after_truncation() {
        // 59 valid bytes followed by a separator lands the hyphen exactly on
        // the truncation boundary.
        let tricky = format!("{} {}", "a".repeat(59), "b".repeat(30));
        let normalized = normalize_phrase(&tricky);
        assert!(!normalized.ends_with('-'));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "My Cool Link!!",
            "--hello--",
            "ALL CAPS AND SPACES",
            "ünïcödé phrase",
            "",
            "already-normal",
            &"ab ".repeat(60),
        ];

        for input in inputs {
            let once = normalize_phrase(input);
            assert_eq!(normalize_phrase(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_candidate_with_phrase() {
        let candidate = generate_candidate("my-cool-link");
        assert!(candidate.starts_with("my-cool-link-"));
        assert_eq!(candidate.len(), "my-cool-link-".len() + SUFFIX_LEN);
    }

    #[test]
    fn test_candidate_without_phrase() {
        let candidate = generate_candidate("");
        assert_eq!(candidate.len(), SUFFIX_LEN);
    }

    #[test]
    fn test_candidate_suffix_is_url_safe() {
        let candidate = generate_candidate("");
        assert!(
            candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_candidates_are_unique() {
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            seen.insert(generate_candidate("phrase"));
        }

        assert_eq!(seen.len(), 1000);
    }
}
