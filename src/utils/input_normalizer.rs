//! Normalization of raw shortcut input lines.

/// Normalizes a raw input line before tokenization.
///
/// # Normalization Rules
///
/// 1. **Outer whitespace**: trimmed
/// 2. **Inner whitespace**: any run collapses to a single space
/// 3. **Legacy marker**: one leading `@` is stripped (older clients prefixed
///    shortcut lines with `@`; the marker carries no meaning today)
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_input("  dev   api "), "dev api");
/// assert_eq!(normalize_input("@dev api"), "dev api");
/// ```
pub fn normalize_input(input: &str) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.strip_prefix('@') {
        Some(rest) => rest.trim_start().to_string(),
        None => collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_outer_whitespace() {
        assert_eq!(normalize_input("  dev  "), "dev");
        assert_eq!(normalize_input("\tdev\n"), "dev");
    }

    #[test]
    fn test_normalize_collapses_inner_whitespace() {
        assert_eq!(normalize_input("dev   api"), "dev api");
        assert_eq!(normalize_input("dev \t api  session"), "dev api session");
    }

    #[test]
    fn test_normalize_strips_single_legacy_marker() {
        assert_eq!(normalize_input("@dev api"), "dev api");
        assert_eq!(normalize_input("@dev"), "dev");
    }

    #[test]
    fn test_normalize_strips_only_one_marker() {
        assert_eq!(normalize_input("@@dev"), "@dev");
    }

    #[test]
    fn test_normalize_marker_only_becomes_empty() {
        assert_eq!(normalize_input("@"), "");
        assert_eq!(normalize_input("  @  "), "");
    }

    #[test]
    fn test_normalize_keeps_interior_markers() {
        assert_eq!(normalize_input("dev @api"), "dev @api");
    }

    #[test]
    fn test_normalize_empty_and_blank_input() {
        assert_eq!(normalize_input(""), "");
        assert_eq!(normalize_input("   "), "");
    }

    #[test]
    fn test_normalize_is_stable_on_normalized_input() {
        let normalized = normalize_input("  dev   api ");
        assert_eq!(normalize_input(&normalized), normalized);
    }
}
