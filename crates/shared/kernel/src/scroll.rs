//! Scroll-position driven effects: header elevation, reveal-on-scroll and the
//! scroll-to-top control.

use wayfarer_domain::config::ScrollConfig;
use wayfarer_domain::constants::{SHADOW_RAISED, SHADOW_RESTING};

/// Header shadow level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderElevation {
    Resting,
    Raised,
}

impl HeaderElevation {
    /// Raised strictly above `threshold`; no hysteresis.
    #[must_use]
    pub fn at(offset: f64, threshold: f64) -> Self {
        if offset > threshold { Self::Raised } else { Self::Resting }
    }

    #[must_use]
    pub const fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => SHADOW_RESTING,
            Self::Raised => SHADOW_RAISED,
        }
    }
}

/// Whether the scroll-to-top control should be visible at `offset`.
#[must_use]
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks which reveal-tagged elements have been revealed.
///
/// Revealing is one-way: once an index is marked it stays marked regardless of
/// later positions.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    offset: f64,
}

impl RevealTracker {
    /// Creates a tracker for `count` elements that must clear `offset` pixels
    /// above the viewport bottom.
    #[must_use]
    pub fn new(count: usize, offset: f64) -> Self {
        Self { revealed: vec![false; count], offset }
    }

    /// Evaluates element top edges (relative to the viewport top) and returns
    /// the indices that became revealed during this call.
    ///
    /// `tops` yields `(index, top)` pairs; indices outside the tracked range
    /// are ignored.
    pub fn evaluate<I>(&mut self, viewport_height: f64, tops: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let reveal_line = viewport_height - self.offset;
        let mut newly = Vec::new();

        for (index, top) in tops {
            let Some(slot) = self.revealed.get_mut(index) else { continue };
            if !*slot && top < reveal_line {
                *slot = true;
                newly.push(index);
            }
        }

        newly
    }

    /// Indices still waiting to be revealed.
    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed.iter().enumerate().filter(|(_, r)| !**r).map(|(i, _)| i)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

/// What changed after a scroll event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollUpdate {
    /// New header elevation, only when it differs from the previous one.
    pub elevation: Option<HeaderElevation>,
    /// Reveal indices that flipped during this event.
    pub revealed: Vec<usize>,
}

/// Per-page state of the scroll effects controller.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    header_threshold: f64,
    elevation: Option<HeaderElevation>,
    reveal: RevealTracker,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(config: &ScrollConfig, reveal_count: usize) -> Self {
        Self {
            header_threshold: config.header_shadow_threshold,
            elevation: None,
            reveal: RevealTracker::new(reveal_count, config.reveal_offset),
        }
    }

    /// Applies a scroll position. The header elevation is reported on the
    /// first call and afterwards only when it flips.
    pub fn on_scroll<I>(&mut self, offset: f64, viewport_height: f64, tops: I) -> ScrollUpdate
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let next = HeaderElevation::at(offset, self.header_threshold);
        let elevation = (self.elevation != Some(next)).then_some(next);
        self.elevation = Some(next);

        ScrollUpdate { elevation, revealed: self.reveal.evaluate(viewport_height, tops) }
    }

    /// Runs only the reveal check, used once at start-up before any scroll.
    pub fn reveal_only<I>(&mut self, viewport_height: f64, tops: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        self.reveal.evaluate(viewport_height, tops)
    }

    #[must_use]
    pub const fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold_is_strict() {
        assert_eq!(HeaderElevation::at(0.0, 50.0), HeaderElevation::Resting);
        assert_eq!(HeaderElevation::at(50.0, 50.0), HeaderElevation::Resting);
        assert_eq!(HeaderElevation::at(50.5, 50.0), HeaderElevation::Raised);
    }

    #[test]
    fn test_shadow_strings() {
        assert_eq!(HeaderElevation::Raised.box_shadow(), "0 4px 12px rgba(0, 0, 0, 0.15)");
        assert_eq!(HeaderElevation::Resting.box_shadow(), "0 2px 4px rgba(0, 0, 0, 0.08)");
    }

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }

    #[test]
    fn test_reveal_line_uses_offset() {
        let mut tracker = RevealTracker::new(3, 100.0);
        // viewport 800 -> reveal line at 700
        let newly = tracker.evaluate(800.0, [(0, 699.0), (1, 700.0), (2, 1200.0)]);
        assert_eq!(newly, vec![0]);
        assert_eq!(tracker.pending().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_reveal_is_reported_once() {
        let mut tracker = RevealTracker::new(1, 100.0);
        assert_eq!(tracker.evaluate(800.0, [(0, 10.0)]), vec![0]);
        assert!(tracker.evaluate(800.0, [(0, 10.0)]).is_empty());
        assert!(tracker.evaluate(800.0, [(0, 5000.0)]).is_empty());
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.pending().count(), 0);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut tracker = RevealTracker::new(1, 100.0);
        assert!(tracker.evaluate(800.0, [(4, 0.0)]).is_empty());
        assert!(!tracker.is_revealed(4));
    }

    #[test]
    fn test_elevation_reported_on_change_only() {
        let mut effects = ScrollEffects::new(&ScrollConfig::default(), 0);
        let first = effects.on_scroll(0.0, 800.0, std::iter::empty());
        assert_eq!(first.elevation, Some(HeaderElevation::Resting));

        assert_eq!(effects.on_scroll(20.0, 800.0, std::iter::empty()).elevation, None);
        assert_eq!(effects.on_scroll(80.0, 800.0, std::iter::empty()).elevation, Some(HeaderElevation::Raised));
        assert_eq!(effects.on_scroll(90.0, 800.0, std::iter::empty()).elevation, None);
        assert_eq!(effects.on_scroll(10.0, 800.0, std::iter::empty()).elevation, Some(HeaderElevation::Resting));
    }
}
