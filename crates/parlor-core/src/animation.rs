#![forbid(unsafe_code)]

//! Pausable, scrubbable property animations.
//!
//! [`PropertyAnimation`] is the handle type the panel controller tracks per
//! animated property. It exposes the fraction-complete model of a platform
//! property animator: the fraction is readable at any time, writable while
//! the animation is paused (scrubbing), and the animation can resume from
//! wherever the scrub left it.
//!
//! # Invariants
//!
//! 1. `progress()` is always in [0.0, 1.0]; `Idle` reports 0.0.
//! 2. `tick()` advances elapsed time only in `Playing` state.
//! 3. `set_progress()` clamps its input to [0.0, 1.0] and never changes the
//!    playback state.
//! 4. Once `Finished`, further ticks and scrubs are no-ops.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns to avoid division by zero.
//! - Non-finite scrub input: ignored (callers may feed raw drag math).

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// An easing function mapping linear progress to eased output, both in [0,1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-in-out, the default curve for the card transition.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

// ---------------------------------------------------------------------------
// Playback state
// ---------------------------------------------------------------------------

/// Playback state of a property animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not yet started.
    Idle,
    /// Actively advancing on tick.
    Playing,
    /// Paused; progress can be scrubbed and playback resumed.
    Paused,
    /// Reached fraction 1.0.
    Finished,
}

// ---------------------------------------------------------------------------
// PropertyAnimation
// ---------------------------------------------------------------------------

/// A single animated property with a queryable/settable fraction-complete.
#[derive(Debug, Clone)]
pub struct PropertyAnimation {
    duration: Duration,
    easing: EasingFn,
    elapsed: Duration,
    state: PlaybackState,
}

impl PropertyAnimation {
    /// Create an idle animation with the given nominal duration.
    ///
    /// A zero duration is clamped to 1ns.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let duration = if duration.is_zero() {
            Duration::from_nanos(1)
        } else {
            duration
        };
        Self {
            duration,
            easing: linear,
            elapsed: Duration::ZERO,
            state: PlaybackState::Idle,
        }
    }

    /// Set the easing function (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Begin playback from the start.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = PlaybackState::Playing;
    }

    /// Advance by `delta` if playing. Returns `true` once complete.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.state == PlaybackState::Playing {
            self.elapsed = (self.elapsed + delta).min(self.duration);
            if self.elapsed >= self.duration {
                self.state = PlaybackState::Finished;
            }
        }
        self.is_complete()
    }

    /// Pause a playing animation. No-op in any other state.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Resume a paused animation from its current fraction.
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
        }
    }

    /// Linear fraction-complete in [0.0, 1.0].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.state == PlaybackState::Idle {
            return 0.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Scrub the fraction-complete. Clamps to [0.0, 1.0].
    ///
    /// Ignored while `Idle` (nothing to scrub) or `Finished`, and for
    /// non-finite input.
    pub fn set_progress(&mut self, fraction: f32) {
        if !fraction.is_finite() {
            return;
        }
        match self.state {
            PlaybackState::Playing | PlaybackState::Paused => {
                self.elapsed = self.duration.mul_f32(fraction.clamp(0.0, 1.0));
            }
            PlaybackState::Idle | PlaybackState::Finished => {}
        }
    }

    /// Eased output value for the current fraction.
    #[must_use]
    pub fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    /// Whether the animation has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Current playback state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
