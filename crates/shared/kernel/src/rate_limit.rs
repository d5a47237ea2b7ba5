//! Rate limiting primitives for event handlers.
//!
//! Both types only track bookkeeping. The caller owns the clock (a
//! millisecond timestamp) and the timers, which keeps them usable from the
//! browser event loop and testable on the host.

/// Identifies one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce.
///
/// Every call to [`Debouncer::schedule`] supersedes the previous ticket and its
/// payload; only the most recent ticket may fire, and only once. The payload is
/// whatever the deferred call needs, such as the arguments of the last call.
#[derive(Debug, Clone)]
pub struct Debouncer<T = ()> {
    wait_ms: u32,
    generation: u64,
    latest: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(wait_ms: u32) -> Self {
        Self { wait_ms, generation: 0, latest: None }
    }

    #[must_use]
    pub const fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Registers a call and returns the ticket the new timer must present.
    pub fn schedule(&mut self, payload: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.latest = Some(payload);
        Ticket(self.generation)
    }

    /// Called when a timer elapses. Returns the payload of the latest call
    /// when the wrapped function should run now.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation { self.latest.take() } else { None }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Leading-edge throttle: the first call runs, calls inside the cooldown are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct Throttle {
    limit_ms: f64,
    open_at: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms: f64::from(limit_ms), open_at: None }
    }

    /// Returns `true` when a call at `now_ms` may run, and starts the cooldown.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at = Some(now_ms + self.limit_ms);
                true
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_only_latest_fires() {
        let mut debounce = Debouncer::new(200);
        let first = debounce.schedule(());
        let second = debounce.schedule(());

        assert_eq!(debounce.fire(first), None);
        assert_eq!(debounce.fire(second), Some(()));
        assert_eq!(debounce.fire(second), None, "a ticket fires once");
    }

    #[test]
    fn test_debounce_restarts_after_fire() {
        let mut debounce = Debouncer::new(50);
        let t = debounce.schedule(());
        assert!(debounce.fire(t).is_some());
        let stale = t;
        let t = debounce.schedule(());
        assert!(debounce.fire(stale).is_none());
        assert!(debounce.fire(t).is_some());
    }

    #[test]
    fn test_debounce_forwards_every_argument_of_last_call() {
        let mut debounce = Debouncer::new(250);
        debounce.schedule(vec!["resize", "800"]);
        let last = debounce.schedule(vec!["resize", "1024", "768"]);

        assert_eq!(debounce.wait_ms(), 250);
        assert_eq!(debounce.fire(last), Some(vec!["resize", "1024", "768"]));
    }

    #[test]
    fn test_throttle_drops_calls_in_cooldown() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_acquire(0.0));
        assert!(!throttle.try_acquire(10.0));
        assert!(!throttle.try_acquire(99.9));
        assert!(throttle.try_acquire(100.0));
        assert!(!throttle.try_acquire(150.0));
    }
}
