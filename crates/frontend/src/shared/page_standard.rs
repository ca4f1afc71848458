//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_product--list"`) and a `data-page-category` with one of the
//! constants below. The entity part matches the `domain/` or `dashboards/`
//! directory that renders the page.

/// Table of records with its dialogs
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only summary
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(is_valid_page_id("d001_overview--dashboard"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--"));
    }
}
