//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

pub mod error;

/// Last `/`-delimited segment of a URI or path
///
/// Returns the input unchanged when it contains no `/`, and an empty string
/// when it ends with one.
pub fn last_segment(uri: &str) -> &str {
    match uri.rfind('/') {
        Some(idx) => &uri[idx + 1..],
        None => uri,
    }
}

/// `Some` only for non-empty strings
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Truncate text to a maximum number of characters
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("http://dbpedia.org/resource/France"), "France");
        assert_eq!(last_segment("France"), "France");
        assert_eq!(last_segment("http://dbpedia.org/resource/"), "");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("a")), Some("a"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("very long text here", 10), "very lo...");
        assert_eq!(truncate_text("Zürich ist schön", 9), "Zürich...");
    }
}
