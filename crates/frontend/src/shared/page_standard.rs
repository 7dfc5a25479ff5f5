//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_project--list"`) and `data-page-category` with one of the
//! constants below.

/// List of records: table with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Static catalog of cards (reports, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_project--list"));
        assert!(!is_valid_page_id("a001_project"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
