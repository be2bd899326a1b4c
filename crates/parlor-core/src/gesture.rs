#![forbid(unsafe_code)]

//! Touch recognition: transforms raw touch sequences into panel gestures.
//!
//! [`TouchRecognizer`] is a stateful processor that converts raw
//! [`TouchEvent`] sequences on the card handle into [`PanelEvent`]s, and
//! detects stationary long presses for the object-selection path.
//!
//! # State Machine
//!
//! - **Tap/drag discrimination**: a touch that moves past the drag threshold
//!   before lifting becomes `DragBegan` / `DragChanged` / `DragEnded`; a
//!   touch that lifts without moving that far becomes `TapEnded`.
//! - **Long press**: a touch held stationary beyond the threshold is reported
//!   via [`check_long_press`](TouchRecognizer::check_long_press); the
//!   recognizer re-arms when the finger lifts.
//!
//! # Invariants
//!
//! 1. Drag and tap never both emit for the same down → up interaction.
//! 2. `DragBegan` always precedes the first `DragChanged`.
//! 3. A touch that fired a long press emits neither tap nor drag on lift.
//! 4. After `reset()` the recognizer returns to idle.
//!
//! # Failure Modes
//!
//! - Moves or ups with no prior down are ignored (stray events tolerated).

use std::time::{Duration, Instant};

use crate::event::{PanelEvent, ScreenPoint};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for touch recognition.
#[derive(Debug, Clone)]
pub struct TouchConfig {
    /// Minimum manhattan travel (points) before a drag starts (default: 8.0).
    pub drag_threshold: f32,
    /// Duration before a stationary touch triggers long press (default: 500ms).
    pub long_press_threshold: Duration,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 8.0,
            long_press_threshold: Duration::from_millis(500),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// A raw touch sample from the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down(ScreenPoint),
    Moved(ScreenPoint),
    Up(ScreenPoint),
}

// ---------------------------------------------------------------------------
// TouchRecognizer
// ---------------------------------------------------------------------------

/// Tracks an ongoing or potential drag on the card handle.
#[derive(Debug, Clone)]
struct TouchTracker {
    start: ScreenPoint,
    down_at: Instant,
    dragging: bool,
}

/// Stateful recognizer that turns raw touches into [`PanelEvent`]s.
///
/// Call [`process`](TouchRecognizer::process) for each incoming touch and
/// [`check_long_press`](TouchRecognizer::check_long_press) periodically
/// (e.g. on tick) to detect long presses.
#[derive(Debug)]
pub struct TouchRecognizer {
    config: TouchConfig,
    touch: Option<TouchTracker>,
    long_press_fired: bool,
}

impl TouchRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        Self {
            config,
            touch: None,
            long_press_fired: false,
        }
    }

    /// Process a raw touch, returning any panel gestures produced.
    pub fn process(&mut self, event: &TouchEvent, now: Instant) -> Vec<PanelEvent> {
        let mut out = Vec::with_capacity(2);
        match *event {
            TouchEvent::Down(point) => {
                self.touch = Some(TouchTracker {
                    start: point,
                    down_at: now,
                    dragging: false,
                });
                self.long_press_fired = false;
            }
            TouchEvent::Moved(point) => {
                let Some(ref mut touch) = self.touch else {
                    return out;
                };
                if !touch.dragging
                    && touch.start.manhattan_distance(point) >= self.config.drag_threshold
                {
                    touch.dragging = true;
                    out.push(PanelEvent::DragBegan);
                }
                if touch.dragging {
                    out.push(PanelEvent::DragChanged {
                        translation: point.y - touch.start.y,
                    });
                }
            }
            TouchEvent::Up(_) => {
                let Some(touch) = self.touch.take() else {
                    return out;
                };
                if touch.dragging {
                    out.push(PanelEvent::DragEnded);
                } else if !self.long_press_fired {
                    out.push(PanelEvent::TapEnded);
                }
                self.long_press_fired = false;
            }
        }
        out
    }

    /// Check for a long press. Call periodically (e.g. on tick).
    ///
    /// Returns the press location once per touch when it has been held
    /// stationary beyond the configured threshold.
    pub fn check_long_press(&mut self, now: Instant) -> Option<ScreenPoint> {
        if self.long_press_fired {
            return None;
        }
        let touch = self.touch.as_ref()?;
        if touch.dragging {
            return None;
        }
        if now.duration_since(touch.down_at) >= self.config.long_press_threshold {
            self.long_press_fired = true;
            return Some(touch.start);
        }
        None
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.touch.as_ref().is_some_and(|t| t.dragging)
    }

    /// Reset all touch state to idle.
    pub fn reset(&mut self) {
        self.touch = None;
        self.long_press_fired = false;
    }
}

impl Default for TouchRecognizer {
    fn default() -> Self {
        Self::new(TouchConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_600: Duration = Duration::from_millis(600);

    fn down(x: f32, y: f32) -> TouchEvent {
        TouchEvent::Down(ScreenPoint::new(x, y))
    }

    fn moved(x: f32, y: f32) -> TouchEvent {
        TouchEvent::Moved(ScreenPoint::new(x, y))
    }

    fn up(x: f32, y: f32) -> TouchEvent {
        TouchEvent::Up(ScreenPoint::new(x, y))
    }

    #[test]
    fn lift_without_travel_is_a_tap() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        assert!(tr.process(&down(10.0, 700.0), t).is_empty());
        let events = tr.process(&up(11.0, 701.0), t + MS_50);
        assert_eq!(events, vec![PanelEvent::TapEnded]);
    }

    #[test]
    fn travel_past_threshold_becomes_a_drag() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        tr.process(&down(10.0, 700.0), t);
        let events = tr.process(&moved(10.0, 680.0), t + MS_50);
        assert_eq!(
            events,
            vec![
                PanelEvent::DragBegan,
                PanelEvent::DragChanged { translation: -20.0 },
            ]
        );
        assert!(tr.is_dragging());
        let events = tr.process(&up(10.0, 680.0), t + MS_50 + MS_50);
        assert_eq!(events, vec![PanelEvent::DragEnded]);
        assert!(!tr.is_dragging());
    }

    #[test]
    fn drag_suppresses_tap() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        tr.process(&down(0.0, 0.0), t);
        tr.process(&moved(20.0, 0.0), t);
        let events = tr.process(&up(20.0, 0.0), t + MS_50);
        assert_eq!(events, vec![PanelEvent::DragEnded]);
    }

    #[test]
    fn stray_move_and_up_are_ignored() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        assert!(tr.process(&moved(5.0, 5.0), t).is_empty());
        assert!(tr.process(&up(5.0, 5.0), t).is_empty());
    }

    #[test]
    fn long_press_fires_once_and_suppresses_tap() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        tr.process(&down(3.0, 4.0), t);
        assert_eq!(tr.check_long_press(t + MS_50), None);
        assert_eq!(tr.check_long_press(t + MS_600), Some(ScreenPoint::new(3.0, 4.0)));
        assert_eq!(tr.check_long_press(t + MS_600 + MS_50), None);
        assert!(tr.process(&up(3.0, 4.0), t + MS_600 + MS_50).is_empty());
    }

    #[test]
    fn dragging_cancels_long_press() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        tr.process(&down(0.0, 0.0), t);
        tr.process(&moved(30.0, 0.0), t);
        assert_eq!(tr.check_long_press(t + MS_600), None);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut tr = TouchRecognizer::default();
        let t = Instant::now();
        tr.process(&down(0.0, 0.0), t);
        tr.process(&moved(30.0, 0.0), t);
        tr.reset();
        assert!(!tr.is_dragging());
        assert!(tr.process(&up(30.0, 0.0), t).is_empty());
    }
}
