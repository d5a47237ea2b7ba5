/// A bounding client rect, relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// `true` when the rect lies entirely inside the viewport.
    #[must_use]
    pub fn is_within(&self, viewport: Viewport) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom <= viewport.height
            && self.right <= viewport.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 720.0 };

    #[test]
    fn test_fully_inside() {
        let rect = Rect { top: 0.0, left: 0.0, bottom: 720.0, right: 1280.0 };
        assert!(rect.is_within(VIEWPORT));
    }

    #[test]
    fn test_partially_outside() {
        assert!(!Rect { top: -1.0, left: 0.0, bottom: 100.0, right: 100.0 }.is_within(VIEWPORT));
        assert!(!Rect { top: 600.0, left: 0.0, bottom: 721.0, right: 100.0 }.is_within(VIEWPORT));
        assert!(!Rect { top: 0.0, left: 1200.0, bottom: 100.0, right: 1300.0 }.is_within(VIEWPORT));
    }
}
