//! Slash-safe joining of URL parts.

/// Joins an ordered list of URL parts with single `/` separators.
///
/// The first part is the base: it keeps everything except trailing slashes.
/// Every later part is stripped of leading and trailing slashes before
/// joining; parts that strip down to nothing are dropped. The result never
/// contains a doubled separator at a join point, regardless of how the
/// individual parts were delimited.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     join_url_parts(&["https://app.dev.com/", "/api/", "v1"]),
///     "https://app.dev.com/api/v1"
/// );
/// ```
pub fn join_url_parts(parts: &[&str]) -> String {
    let Some((first, rest)) = parts.split_first() else {
        return String::new();
    };

    let mut joined = first.trim_end_matches('/').to_string();

    let tail: Vec<&str> = rest
        .iter()
        .map(|part| part.trim_matches('/'))
        .filter(|part| !part.is_empty())
        .collect();

    if !tail.is_empty() {
        joined.push('/');
        joined.push_str(&tail.join("/"));
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_part() {
        assert_eq!(join_url_parts(&["https://example.com"]), "https://example.com");
    }

    #[test]
    fn test_join_strips_trailing_slash_from_base() {
        assert_eq!(join_url_parts(&["https://example.com/"]), "https://example.com");
        assert_eq!(join_url_parts(&["https://example.com//"]), "https://example.com");
    }

    #[test]
    fn test_join_two_parts_with_single_separator() {
        assert_eq!(
            join_url_parts(&["https://example.com", "api"]),
            "https://example.com/api"
        );
    }

    #[test]
    fn test_join_no_double_slashes_from_delimited_parts() {
        assert_eq!(
            join_url_parts(&["https://example.com/", "/api/", "/v1/"]),
            "https://example.com/api/v1"
        );
    }

    #[test]
    fn test_join_preserves_interior_slashes() {
        assert_eq!(
            join_url_parts(&["https://example.com", "api/v1", "users"]),
            "https://example.com/api/v1/users"
        );
    }

    #[test]
    fn test_join_drops_parts_that_strip_to_nothing() {
        assert_eq!(
            join_url_parts(&["https://example.com", "/", "api"]),
            "https://example.com/api"
        );
    }

    #[test]
    fn test_join_empty_input() {
        assert_eq!(join_url_parts(&[]), "");
    }
}
