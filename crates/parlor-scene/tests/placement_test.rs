//! End-to-end placement and selection scenarios, driven the way the
//! application loop drives them: picker selection, then gesture dispatch
//! against host test doubles.

use std::collections::BTreeMap;

use glam::Vec3;

use parlor_core::event::{ManipulationEvent, ScreenPoint};
use parlor_scene::catalog::{Catalog, Picker};
use parlor_scene::host::{Hit, NodeId, PlacementError, SceneGraph, WorldTracker};
use parlor_scene::manipulate::ObjectManipulator;

// ---------------------------------------------------------------------------
// Host doubles
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct RecordingScene {
    next_id: u64,
    nodes: BTreeMap<NodeId, (String, Vec3)>,
}

impl SceneGraph for RecordingScene {
    fn place(&mut self, asset: &str, position: Vec3) -> Result<NodeId, PlacementError> {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, (asset.to_string(), position));
        Ok(id)
    }

    fn remove(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.1 = position;
        }
    }

    fn scale_by(&mut self, _node: NodeId, _factor: f32) {}

    fn rotate_y_by(&mut self, _node: NodeId, _radians: f32) {}

    fn play_selection_feedback(&mut self, _node: NodeId) {}

    fn reverse_selection_feedback(&mut self, _node: NodeId) {}

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// A tracker with one detected surface region: points with `y < horizon`
/// miss, everything else hits the surface at a fixed world position.
#[derive(Debug)]
struct OneSurfaceTracker {
    horizon: f32,
    world_position: Vec3,
}

impl WorldTracker for OneSurfaceTracker {
    fn hit_test_surface(&self, point: ScreenPoint) -> Option<Hit> {
        (point.y >= self.horizon).then_some(Hit {
            world_position: self.world_position,
        })
    }

    fn hit_test_node(&self, _point: ScreenPoint) -> Option<NodeId> {
        None
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn vase_placed_at_surface_hit_then_miss_adds_nothing() {
    let mut scene = RecordingScene::default();
    let tracker = OneSurfaceTracker {
        horizon: 400.0,
        world_position: Vec3::new(1.0, 0.0, 2.0),
    };
    let mut picker = Picker::new(Catalog::new(["cup", "vase"]));
    let mut manip = ObjectManipulator::new();

    picker.select(1);

    // Tap below the horizon hits the surface: one vase at the hit position.
    manip
        .dispatch(
            &ManipulationEvent::Tap(ScreenPoint::new(180.0, 520.0)),
            &mut scene,
            &tracker,
            &picker,
        )
        .unwrap();
    assert_eq!(scene.node_count(), 1);
    let (name, position) = scene.nodes.values().next().unwrap();
    assert_eq!(name, "vase");
    assert_eq!(*position, Vec3::new(1.0, 0.0, 2.0));

    // Tap above the horizon misses: count stays at 1.
    manip
        .dispatch(
            &ManipulationEvent::Tap(ScreenPoint::new(180.0, 120.0)),
            &mut scene,
            &tracker,
            &picker,
        )
        .unwrap();
    assert_eq!(scene.node_count(), 1);
}

#[test]
fn no_picker_selection_never_places() {
    let mut scene = RecordingScene::default();
    let tracker = OneSurfaceTracker {
        horizon: 0.0,
        world_position: Vec3::ZERO,
    };
    let picker = Picker::default();
    let mut manip = ObjectManipulator::new();

    for y in [10.0, 400.0, 800.0] {
        manip
            .dispatch(
                &ManipulationEvent::Tap(ScreenPoint::new(200.0, y)),
                &mut scene,
                &tracker,
                &picker,
            )
            .unwrap();
    }
    assert_eq!(scene.node_count(), 0);
}

#[test]
fn deselecting_the_picker_item_stops_placement() {
    let mut scene = RecordingScene::default();
    let tracker = OneSurfaceTracker {
        horizon: 0.0,
        world_position: Vec3::ZERO,
    };
    let mut picker = Picker::default();
    let mut manip = ObjectManipulator::new();

    picker.select(0);
    manip
        .dispatch(
            &ManipulationEvent::Tap(ScreenPoint::new(10.0, 10.0)),
            &mut scene,
            &tracker,
            &picker,
        )
        .unwrap();
    assert_eq!(scene.node_count(), 1);

    picker.deselect(0);
    manip
        .dispatch(
            &ManipulationEvent::Tap(ScreenPoint::new(10.0, 10.0)),
            &mut scene,
            &tracker,
            &picker,
        )
        .unwrap();
    assert_eq!(scene.node_count(), 1);
}

#[test]
fn each_placement_gets_a_distinct_node() {
    let mut scene = RecordingScene::default();
    let tracker = OneSurfaceTracker {
        horizon: 0.0,
        world_position: Vec3::new(0.0, 0.0, -1.0),
    };
    let mut picker = Picker::default();
    let mut manip = ObjectManipulator::new();

    picker.select(3);
    for _ in 0..3 {
        manip
            .dispatch(
                &ManipulationEvent::Tap(ScreenPoint::new(50.0, 50.0)),
                &mut scene,
                &tracker,
                &picker,
            )
            .unwrap();
    }
    assert_eq!(scene.node_count(), 3);
    assert!(scene.nodes.values().all(|(name, _)| name == "table"));
}
