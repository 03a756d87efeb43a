// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce driven by caller-supplied timestamps.
//!
//! Timestamps are `Duration`s since any fixed origin the host chooses (for
//! example, the time the window opened). No clock is read here.

use core::time::Duration;

/// Delay used for window-resize notifications unless configured otherwise.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Holds the latest value until no newer one has arrived for `delay`.
#[derive(Clone, Debug)]
pub struct ResizeDebounce<T> {
    delay: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Default for ResizeDebounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}

impl<T> ResizeDebounce<T> {
    /// Creates an idle debounce with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records `value` at `now`, replacing any pending value and restarting the delay.
    pub fn notify(&mut self, now: Duration, value: T) {
        self.pending = Some((now.saturating_add(self.delay), value));
    }

    /// When the pending value will be released, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Returns `true` while a value is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Drops any pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
