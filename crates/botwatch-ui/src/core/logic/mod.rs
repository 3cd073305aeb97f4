//! Pure UI helpers extracted from components for non-wasm testing.

/// Build an API path with URL-encoded query parameters.
#[must_use]
pub fn build_path(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Split a comma separated input into trimmed, non-empty items.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse a strictly positive integer input (threshold fields).
#[must_use]
pub fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Normalise a search query: trimmed and lowercased, `None` when blank.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive containment against an already normalised query.
#[must_use]
pub fn contains_query(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_builder_encodes_values() {
        assert_eq!(build_path("/api/system-metrics", &[]), "/api/system-metrics");
        assert_eq!(
            build_path(
                "/api/top-downloaders",
                &[("period", "today".into()), ("limit", 100.to_string())]
            ),
            "/api/top-downloaders?period=today&limit=100"
        );
        assert_eq!(
            build_path("/api/x", &[("q", "a b&c".into())]),
            "/api/x?q=a%20b%26c"
        );
    }

    #[test]
    fn lists_are_parsed_and_cleaned() {
        assert_eq!(parse_list(" a, ,b ,, c "), vec!["a", "b", "c"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn positive_numbers_only() {
        assert_eq!(parse_positive(" 12 "), Some(12));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_positive("abc"), None);
    }

    #[test]
    fn queries_normalise_and_match() {
        assert_eq!(normalize_query("  YouTube "), Some("youtube".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert!(contains_query("music.YOUTUBE.com", "youtube"));
    }
}
