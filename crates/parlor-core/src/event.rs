#![forbid(unsafe_code)]

//! Canonical gesture events consumed by the interaction dispatchers.
//!
//! Platform gesture callbacks are flattened into two plain enums: panel
//! gestures drive the bottom card, manipulation gestures drive the placed
//! objects. Each enum is consumed by a single dispatch function, so the
//! routing logic is data-driven rather than callback-driven.

// ---------------------------------------------------------------------------
// ScreenPoint
// ---------------------------------------------------------------------------

/// A 2D touch location in screen points (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point, in screen points.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(f32, f32)> for ScreenPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Panel gestures
// ---------------------------------------------------------------------------

/// Gestures recognized on the bottom card's handle area.
///
/// `DragChanged` carries the signed vertical translation since the drag
/// began, in screen points; negative values mean the finger moved upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    /// Tap completed on the handle; toggles the card.
    TapEnded,
    /// A drag on the handle crossed the recognition threshold.
    DragBegan,
    /// Finger moved during a recognized drag.
    DragChanged { translation: f32 },
    /// Finger lifted, ending a recognized drag.
    DragEnded,
}

// ---------------------------------------------------------------------------
// Manipulation gestures
// ---------------------------------------------------------------------------

/// Gestures recognized over the AR viewport, routed to the scene dispatcher.
///
/// `PinchChanged` reports the platform's cumulative scale for the callback
/// tick (the recognizer's scale is reset to 1 after every report, so the
/// value is applied as an incremental factor). `PanChanged` is single-touch
/// only; multi-touch pans are filtered before this layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManipulationEvent {
    Tap(ScreenPoint),
    PinchChanged { scale: f32 },
    RotateChanged { delta: f32 },
    PanChanged { point: ScreenPoint },
    LongPressBegan(ScreenPoint),
    LongPressEnded,
    DeleteRequested,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = ScreenPoint::new(3.0, 4.0);
        let b = ScreenPoint::new(-1.0, 10.0);
        assert_eq!(a.manhattan_distance(b), b.manhattan_distance(a));
        assert_eq!(a.manhattan_distance(b), 10.0);
    }

    #[test]
    fn point_from_tuple() {
        let p: ScreenPoint = (1.5, 2.5).into();
        assert_eq!(p, ScreenPoint::new(1.5, 2.5));
    }
}
