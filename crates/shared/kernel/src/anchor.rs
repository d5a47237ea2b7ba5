/// Where a same-page anchor click should scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// Bare `#`: the top of the page.
    Top,
    /// `#section`: the element matching this selector, if any.
    Selector(&'a str),
}

impl<'a> AnchorTarget<'a> {
    /// Classifies an `href`. Anything that does not start with `#` is not a
    /// same-page anchor and yields `None`.
    #[must_use]
    pub fn parse(href: &'a str) -> Option<Self> {
        match href {
            "#" => Some(Self::Top),
            h if h.starts_with('#') => Some(Self::Selector(h)),
            _ => None,
        }
    }
}

/// Scroll destination for a target at `element_top` below a fixed header of
/// `header_height` pixels.
#[must_use]
pub fn scroll_destination(element_top: f64, header_height: f64) -> f64 {
    element_top - header_height
}

/// Vertical position a click on `href` should scroll to, or `None` when the
/// click must do nothing.
///
/// `locate` maps a selector to the document top of its element and returns
/// `None` for a missing element or a selector the document rejects.
pub fn anchor_destination<F>(href: &str, header_height: f64, locate: F) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    match AnchorTarget::parse(href)? {
        AnchorTarget::Top => Some(0.0),
        AnchorTarget::Selector(selector) => {
            locate(selector).map(|top| scroll_destination(top, header_height))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(AnchorTarget::parse("#"), Some(AnchorTarget::Top));
        assert_eq!(AnchorTarget::parse("#tours"), Some(AnchorTarget::Selector("#tours")));
        assert_eq!(AnchorTarget::parse("/contact.html#form"), None);
        assert_eq!(AnchorTarget::parse(""), None);
    }

    #[test]
    fn test_destination_clears_header() {
        assert!((scroll_destination(1200.0, 80.0) - 1120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_destination_lookup() {
        assert_eq!(anchor_destination("#", 80.0, |_| Some(500.0)), Some(0.0));
        assert_eq!(anchor_destination("#tours", 80.0, |_| Some(500.0)), Some(420.0));
        assert_eq!(anchor_destination("/about.html", 80.0, |_| Some(500.0)), None);
    }
}
