#![forbid(unsafe_code)]

//! Trait seams for the host platform's AR services.
//!
//! The camera/world-tracking service and the 3-D scene graph are external
//! collaborators. The dispatcher talks to them through these traits so the
//! interaction policy can be exercised against test doubles, and so the one
//! latent defect in the platform path — a missing named asset aborting the
//! process — is surfaced as a recoverable [`PlacementError`] instead.

use glam::Vec3;
use thiserror::Error;

use parlor_core::event::ScreenPoint;

// ---------------------------------------------------------------------------
// Identifiers and hit results
// ---------------------------------------------------------------------------

/// Opaque identifier of a node in the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw host node identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Result of a ray cast from a screen point into the tracked scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// World-space position of the intersection.
    pub world_position: Vec3,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Recoverable failures surfaced by the scene graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The named 3-D asset could not be loaded.
    #[error("asset not found: {name}")]
    AssetNotFound { name: String },
}

// ---------------------------------------------------------------------------
// Host services
// ---------------------------------------------------------------------------

/// The camera/world-tracking service: plane detection and ray hit-testing.
pub trait WorldTracker {
    /// Cast a ray from `point` against detected horizontal surfaces.
    ///
    /// Returns the nearest surface hit, or `None` when no surface lies under
    /// the point.
    fn hit_test_surface(&self, point: ScreenPoint) -> Option<Hit>;

    /// Cast a ray from `point` against placed objects.
    ///
    /// Returns the nearest placed node, or `None` when the ray misses.
    fn hit_test_node(&self, point: ScreenPoint) -> Option<NodeId>;
}

/// The host 3-D scene graph and its built-in node actions.
pub trait SceneGraph {
    /// Load the named asset into a new node at `position` under the root.
    ///
    /// # Errors
    /// [`PlacementError::AssetNotFound`] when the named model is missing.
    fn place(&mut self, asset: &str, position: Vec3) -> Result<NodeId, PlacementError>;

    /// Detach and discard a node.
    fn remove(&mut self, node: NodeId);

    /// Snap a node to a world-space position.
    fn set_position(&mut self, node: NodeId, position: Vec3);

    /// Multiply a node's scale by `factor`.
    fn scale_by(&mut self, node: NodeId, factor: f32);

    /// Rotate a node about its vertical axis by `radians`.
    fn rotate_y_by(&mut self, node: NodeId, radians: f32);

    /// Play the bounce/lift feedback marking a node as selected.
    fn play_selection_feedback(&mut self, node: NodeId);

    /// Reverse the selection feedback, returning the node to rest.
    fn reverse_selection_feedback(&mut self, node: NodeId);

    /// Number of placed nodes under the root.
    fn node_count(&self) -> usize;
}
