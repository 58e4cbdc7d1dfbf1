//! Route matching.

/// Whether a navigation entry should be highlighted for the current path.
///
/// True on exact match, or when `current_path` continues `entry_path` with a
/// path separator. This keeps a section entry highlighted while any of its
/// sub-routes is shown, without letting `/venta` match `/ventas`.
///
/// Entries must be registered without trailing separators; no other
/// normalization is performed.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
        || (current_path.len() > entry_path.len()
            && current_path.starts_with(entry_path)
            && current_path.as_bytes()[entry_path.len()] == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/inventory", "/inventory"));
    }

    #[test]
    fn test_sub_route_match() {
        assert!(is_active("/inventory/items", "/inventory"));
        assert!(is_active("/inventory/items/42", "/inventory"));
    }

    #[test]
    fn test_string_prefix_without_separator_does_not_match() {
        assert!(!is_active("/ventas", "/venta"));
        assert!(!is_active("/inventory2", "/inventory"));
    }

    #[test]
    fn test_unrelated_paths_do_not_match() {
        assert!(!is_active("/sales", "/inventory"));
        assert!(!is_active("/inventory", "/inventory/items"));
    }
}
