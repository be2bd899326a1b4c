#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Scene layer: catalog picker, host-service seams, and object manipulation.
//!
//! # Role in Parlor
//! `parlor-scene` routes the manipulation gestures from `parlor-core` to the
//! host platform's AR services. The host owns plane tracking, hit-testing,
//! asset loading, and rendering; this crate owns only the interaction policy:
//! which gesture maps to which scene-graph call, gated by picker and
//! selection state.
//!
//! # Primary responsibilities
//! - **Picker**: the fixed item catalog and its at-most-one selection.
//! - **WorldTracker / SceneGraph**: trait seams for the host AR services.
//! - **ObjectManipulator**: tap-to-place, pinch/rotate/pan forwarding,
//!   long-press selection with the single-selection invariant, and delete.
//!
//! # How it fits in the system
//! The application event loop feeds `ManipulationEvent`s to
//! [`ObjectManipulator::dispatch`] together with its host implementations.
//! Every failure branch is a silent skip except asset lookup, which surfaces
//! a recoverable [`host::PlacementError`].

pub mod catalog;
pub mod host;
pub mod manipulate;

pub use catalog::{Catalog, Picker};
pub use host::{Hit, NodeId, PlacementError, SceneGraph, WorldTracker};
pub use manipulate::ObjectManipulator;
