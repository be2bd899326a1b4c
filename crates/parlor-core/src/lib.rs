#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: gesture events, interruptible animations, and the bottom-sheet panel.
//!
//! # Role in Parlor
//! `parlor-core` is the interaction layer. It owns the normalized gesture
//! event types, the touch recognizer that discriminates taps from drags on
//! the card handle, the pausable/scrubbable property-animation primitive, and
//! the panel transition controller built on top of it.
//!
//! # Primary responsibilities
//! - **Event**: canonical gesture events (tap, pinch, rotate, pan, long press).
//! - **TouchRecognizer**: raw touch sequences → panel gestures.
//! - **PropertyAnimation**: fraction-complete progress with pause/resume/scrub.
//! - **PanelTransitionController**: interruptible collapsed ↔ expanded card.
//! - **NoticeTimer / PlaneNotice**: cancelable delayed-hide for the surface
//!   detection notice.
//!
//! # How it fits in the system
//! The scene layer (`parlor-scene`) consumes `parlor-core` event values and
//! routes them to the 3-D scene graph. Everything here is single-threaded and
//! driven by explicit time parameters, so the whole layer is deterministic
//! under test.

pub mod animation;
pub mod event;
pub mod gesture;
pub mod notice;
pub mod panel;

pub use event::{ManipulationEvent, PanelEvent, ScreenPoint};
pub use panel::{PanelMetrics, PanelState, PanelTransitionController};
