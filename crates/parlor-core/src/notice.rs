#![forbid(unsafe_code)]

//! Cancelable delayed-hide timer for the surface-detection notice.
//!
//! When world tracking reports a new horizontal surface, a notice is shown
//! and auto-hidden after a fixed delay. [`NoticeTimer`] is the explicit
//! scheduled-task handle: re-scheduling replaces any pending deadline
//! (latest-wins, so a fresh detection never races an older hide into
//! flickering the notice off early), and firing with nothing pending is a
//! no-op.
//!
//! All deadlines live on the single event loop; [`PlaneNotice::tick`] is
//! expected to be called from it.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default delay before the notice auto-hides.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_secs(3);

// ---------------------------------------------------------------------------
// NoticeTimer
// ---------------------------------------------------------------------------

/// A single-deadline, cancelable timer handle.
#[derive(Debug, Clone)]
pub struct NoticeTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl NoticeTimer {
    /// Create a timer with the given delay and no pending deadline.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or re-schedule) the deadline at `now + delay`.
    ///
    /// A pending deadline is replaced; the latest schedule wins.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Report (once) whether the pending deadline has elapsed.
    ///
    /// Returns `false` with nothing pending.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

// ---------------------------------------------------------------------------
// PlaneNotice
// ---------------------------------------------------------------------------

/// Visibility state machine for the "surface detected" notice.
#[derive(Debug, Clone)]
pub struct PlaneNotice {
    timer: NoticeTimer,
    visible: bool,
}

impl PlaneNotice {
    /// Create a hidden notice with [`DEFAULT_HIDE_DELAY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_HIDE_DELAY)
    }

    /// Create a hidden notice with a custom hide delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            timer: NoticeTimer::new(delay),
            visible: false,
        }
    }

    /// A surface was detected: show the notice and (re)schedule the hide.
    pub fn plane_detected(&mut self, now: Instant) {
        self.visible = true;
        self.timer.schedule(now);
        debug!("surface notice shown");
    }

    /// Drive the hide deadline from the event loop.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.fire_due(now) {
            self.visible = false;
            debug!("surface notice hidden");
        }
    }

    /// Whether the notice is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for PlaneNotice {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
