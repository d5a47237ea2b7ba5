const PAGE_SUFFIX: &str = ".html";
const INDEX_PAGE: &str = "index.html";
const SITE_ROOT: &str = "/";

/// Decides whether a navigation link points at the current page.
///
/// Both arguments are URL pathnames (already resolved against the document
/// base). A link is active when:
/// * the paths are equal, or
/// * the current path is the site root and the link ends in `index.html`, or
/// * both paths are page files (`.html`) and equal.
#[must_use]
pub fn is_active_link(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
        || (current_path == SITE_ROOT && link_path.ends_with(INDEX_PAGE))
        || (current_path.ends_with(PAGE_SUFFIX)
            && link_path.ends_with(PAGE_SUFFIX)
            && current_path == link_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active_link("/tours.html", "/tours.html"));
        assert!(is_active_link("/blog/", "/blog/"));
        assert!(!is_active_link("/tours.html", "/about.html"));
    }

    #[test]
    fn test_root_matches_index() {
        assert!(is_active_link("/", "/index.html"));
        assert!(is_active_link("/", "/site/index.html"));
        assert!(!is_active_link("/", "/about.html"));
        assert!(!is_active_link("/about.html", "/index.html"));
    }
}
