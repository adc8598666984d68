//! Input validation for registration and filter arguments.
//!
//! Provides the email shape check, O(1) status/category lookup sets, and
//! synonym maps so casual CLI input still resolves. Three-tier resolution
//! for statuses: exact match → synonym lookup → error with suggestion.

use crate::model::Status;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// `local@domain.tld` shape, the pattern the original registration form
/// enforced. Intentionally loose; uniqueness is the real constraint.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

// ── Valid value sets (O(1) lookups) ──────────────────────────

/// Categories used by the demo dataset. The category set is open; these
/// only drive suggestions for near-misses, never rejection.
pub static KNOWN_CATEGORIES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    ["infrastructure", "safety", "environment", "utilities"]
        .into_iter()
        .collect()
});

// ── Synonym maps (casual input recovery) ─────────────────────

pub static STATUS_SYNONYMS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("new", "reported"),
        ("open", "reported"),
        ("filed", "reported"),
        ("waiting", "pending"),
        ("wip", "in-progress"),
        ("working", "in-progress"),
        ("active", "in-progress"),
        ("done", "resolved"),
        ("fixed", "resolved"),
        ("closed", "resolved"),
    ]
    .into_iter()
    .collect()
});

/// Check an email address against the `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Normalize a status string via exact match or synonym lookup.
///
/// Returns the canonical [`Status`], or an error with the original input
/// and an optional suggestion.
pub fn normalize_status(input: &str) -> Result<Status, (String, Option<String>)> {
    let lower = input.trim().to_lowercase();

    // Tier 1: exact match
    if let Some(status) = Status::parse(&lower) {
        return Ok(status);
    }

    // Tier 2: synonym lookup
    if let Some(&canonical) = STATUS_SYNONYMS.get(lower.as_str()) {
        return Ok(Status::parse(canonical).expect("synonyms map to canonical statuses"));
    }

    // Tier 3: find closest suggestion
    let valid: HashSet<&str> = ["reported", "pending", "in-progress", "resolved"]
        .into_iter()
        .collect();
    let suggestion = find_closest_match(&lower, &valid, &STATUS_SYNONYMS);
    Err((input.to_string(), suggestion))
}

/// Normalize a category: lowercase and trim.
///
/// Categories are an open set, so any non-empty value passes through;
/// the second element is a suggestion when the input is a near-miss of
/// a known category (e.g. "infrastucture").
#[must_use]
pub fn normalize_category(input: &str) -> (String, Option<String>) {
    let lower = input.trim().to_lowercase();
    if KNOWN_CATEGORIES.contains(lower.as_str()) {
        return (lower, None);
    }

    let empty: HashMap<&str, &str> = HashMap::new();
    let suggestion =
        find_closest_match(&lower, &KNOWN_CATEGORIES, &empty).filter(|s| *s != lower);
    (lower, suggestion)
}

/// Find the closest matching value across valid set and synonyms.
fn find_closest_match(
    input: &str,
    valid: &HashSet<&str>,
    synonyms: &HashMap<&str, &str>,
) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;

    for &v in valid.iter().chain(synonyms.keys()) {
        let dist = levenshtein_distance(input, v);
        if dist <= 3 && best.is_none_or(|(_, d)| dist < d) {
            // For synonyms, show what it maps to
            if let Some(&canonical) = synonyms.get(v) {
                best = Some((canonical, dist));
            } else {
                best = Some((v, dist));
            }
        }
    }

    best.map(|(v, _)| v.to_string())
}

// ── Levenshtein distance ─────────────────────────────────────

/// Compute the Levenshtein edit distance between two strings.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Single-row optimization (O(min(m,n)) space)
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@city.gov"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("@missing.local"));
    }

    #[test]
    fn test_normalize_status() {
        assert_eq!(normalize_status("reported"), Ok(Status::Reported));
        assert_eq!(normalize_status("IN-PROGRESS"), Ok(Status::InProgress));
        assert_eq!(normalize_status("done"), Ok(Status::Resolved));
        assert_eq!(normalize_status("wip"), Ok(Status::InProgress));
        assert_eq!(normalize_status("new"), Ok(Status::Reported));
        assert!(normalize_status("nonsense").is_err());
    }

    #[test]
    fn test_normalize_status_suggestion() {
        let err = normalize_status("reprted").unwrap_err();
        assert_eq!(err.1, Some("reported".to_string()));
    }

    #[test]
    fn test_normalize_category_open_set() {
        assert_eq!(
            normalize_category("Safety"),
            ("safety".to_string(), None)
        );
        // Unknown but plausible categories pass through untouched
        let (value, _) = normalize_category("noise");
        assert_eq!(value, "noise");
        // Near-miss of a known category gets a suggestion
        let (_, suggestion) = normalize_category("infrastucture");
        assert_eq!(suggestion, Some("infrastructure".to_string()));
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }
}
