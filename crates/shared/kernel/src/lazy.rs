/// Deferred image source, handed over the first time the image intersects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazySource {
    deferred: Option<String>,
}

impl LazySource {
    #[must_use]
    pub fn new(deferred: impl Into<String>) -> Self {
        Self { deferred: Some(deferred.into()) }
    }

    /// Feeds an intersection notification. Returns the real source exactly
    /// once, on the first intersecting notification.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<String> {
        if is_intersecting { self.deferred.take() } else { None }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.deferred.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hands_over_once() {
        let mut img = LazySource::new("/img/angkor.webp");
        assert_eq!(img.on_intersection(false), None);
        assert_eq!(img.on_intersection(true).as_deref(), Some("/img/angkor.webp"));
        assert!(img.is_loaded());

        assert_eq!(img.on_intersection(false), None);
        assert_eq!(img.on_intersection(true), None);
    }
}
