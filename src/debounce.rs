//! Trailing-edge debouncing for bursty events.
//!
//! Resize events arrive in rapid bursts while the user drags a window edge.
//! The debouncer holds the latest value in an explicit pending slot; each new
//! trigger cancels the previous schedule and restarts the window, so only the
//! final value of a burst is delivered once the burst settles.
//!
//! The caller supplies the current time to `trigger` and `poll`, which keeps
//! the behavior deterministic under test.

use std::time::{Duration, Instant};

/// Default settle window for resize handling.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

/// Coalesces a burst of values into the last one, delivered after a quiet
/// period of `window`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given settle window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedules `value` for delivery `window` after `now`, replacing any
    /// previously pending value.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// Returns the pending value if its deadline has passed, clearing the slot.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Discards any pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns true if a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time remaining until the pending deadline, if any.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_delivers_after_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(millis(250));

        debouncer.trigger(500, start);
        assert_eq!(debouncer.poll(start), None);
        assert_eq!(debouncer.poll(start + millis(249)), None);
        assert_eq!(debouncer.poll(start + millis(250)), Some(500));
        // Slot is cleared after delivery
        assert_eq!(debouncer.poll(start + millis(300)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_coalesces_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(millis(250));

        debouncer.trigger(100, start);
        debouncer.trigger(200, start + millis(100));
        debouncer.trigger(300, start + millis(200));

        // First trigger's deadline has passed but was superseded
        assert_eq!(debouncer.poll(start + millis(260)), None);
        assert_eq!(debouncer.poll(start + millis(450)), Some(300));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(millis(250));

        debouncer.trigger(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + millis(500)), None);
    }

    #[test]
    fn test_time_until_ready() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(millis(250));

        assert_eq!(debouncer.time_until_ready(start), None);
        debouncer.trigger(1, start);
        assert_eq!(debouncer.time_until_ready(start + millis(100)), Some(millis(150)));
        assert_eq!(debouncer.time_until_ready(start + millis(400)), Some(millis(0)));
    }
}
