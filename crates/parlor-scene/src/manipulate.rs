#![forbid(unsafe_code)]

//! Object-manipulation dispatch: one gesture, one scene-graph call.
//!
//! [`ObjectManipulator`] owns the selection reference and routes each
//! [`ManipulationEvent`] to a single host call, gated by whether an object is
//! currently selected.
//!
//! # Invariants
//!
//! 1. At most one node is selected at a time; selecting a new node first
//!    reverses the previous node's feedback.
//! 2. A tap never places a node unless the picker has a current item and the
//!    surface hit-test succeeds.
//! 3. Pinch, rotate, pan, and delete are no-ops without a selection.
//!
//! # Failure Modes
//!
//! - Missing surface, missing picker item, missing selection: silent skip.
//! - Missing asset: [`PlacementError::AssetNotFound`] propagated to the
//!   caller for recovery (never a process abort).

use glam::Vec3;
use tracing::debug;

use parlor_core::event::{ManipulationEvent, ScreenPoint};

use crate::catalog::Picker;
use crate::host::{NodeId, PlacementError, SceneGraph, WorldTracker};

/// Fixed damping applied to raw rotation deltas; the raw gesture is too
/// sensitive to forward unscaled.
pub const ROTATION_DAMPING: f32 = 0.15;

/// Vertical lift applied to pan placement so the model does not z-fight the
/// detected surface.
pub const SURFACE_LIFT: f32 = 0.05;

// ---------------------------------------------------------------------------
// ObjectManipulator
// ---------------------------------------------------------------------------

/// Routes manipulation gestures to the host scene graph.
#[derive(Debug, Default)]
pub struct ObjectManipulator {
    selected: Option<NodeId>,
}

impl ObjectManipulator {
    /// Create a dispatcher with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// The currently selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Route one gesture to the scene graph.
    ///
    /// # Errors
    /// [`PlacementError::AssetNotFound`] when a tap placement names a missing
    /// asset; every other failure branch skips silently.
    pub fn dispatch<S, T>(
        &mut self,
        event: &ManipulationEvent,
        scene: &mut S,
        tracker: &T,
        picker: &Picker,
    ) -> Result<(), PlacementError>
    where
        S: SceneGraph + ?Sized,
        T: WorldTracker + ?Sized,
    {
        match *event {
            ManipulationEvent::Tap(point) => self.on_tap(point, scene, tracker, picker)?,
            ManipulationEvent::PinchChanged { scale } => {
                // The platform reports cumulative scale per callback and is
                // reset to 1 after each, so the factor applies as-is.
                if let Some(node) = self.selected {
                    scene.scale_by(node, scale);
                }
            }
            ManipulationEvent::RotateChanged { delta } => {
                if let Some(node) = self.selected {
                    scene.rotate_y_by(node, delta * ROTATION_DAMPING);
                }
            }
            ManipulationEvent::PanChanged { point } => {
                if let Some(node) = self.selected
                    && let Some(hit) = tracker.hit_test_surface(point)
                {
                    scene.set_position(node, hit.world_position + Vec3::Y * SURFACE_LIFT);
                }
            }
            ManipulationEvent::LongPressBegan(point) => self.on_long_press(point, scene, tracker),
            ManipulationEvent::LongPressEnded => {
                // The recognizer re-arms itself; nothing to route.
            }
            ManipulationEvent::DeleteRequested => {
                if let Some(node) = self.selected.take() {
                    scene.remove(node);
                    debug!(node = node.raw(), "node deleted");
                }
            }
        }
        Ok(())
    }

    fn on_tap<S, T>(
        &mut self,
        point: ScreenPoint,
        scene: &mut S,
        tracker: &T,
        picker: &Picker,
    ) -> Result<(), PlacementError>
    where
        S: SceneGraph + ?Sized,
        T: WorldTracker + ?Sized,
    {
        // Placement is selection-gated: with an object selected, taps are
        // reserved for manipulation, not placement.
        if self.selected.is_some() {
            return Ok(());
        }
        let Some(item) = picker.selected_item() else {
            return Ok(());
        };
        let Some(hit) = tracker.hit_test_surface(point) else {
            return Ok(());
        };
        let node = scene.place(item, hit.world_position)?;
        debug!(item, node = node.raw(), "catalog item placed");
        Ok(())
    }

    fn on_long_press<S, T>(&mut self, point: ScreenPoint, scene: &mut S, tracker: &T)
    where
        S: SceneGraph + ?Sized,
        T: WorldTracker + ?Sized,
    {
        let Some(touched) = tracker.hit_test_node(point) else {
            return;
        };
        match self.selected {
            Some(current) if current == touched => {
                scene.reverse_selection_feedback(current);
                self.selected = None;
                debug!(node = current.raw(), "node deselected");
            }
            Some(current) => {
                scene.reverse_selection_feedback(current);
                scene.play_selection_feedback(touched);
                self.selected = Some(touched);
                debug!(node = touched.raw(), "selection moved");
            }
            None => {
                scene.play_selection_feedback(touched);
                self.selected = Some(touched);
                debug!(node = touched.raw(), "node selected");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
