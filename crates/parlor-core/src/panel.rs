#![forbid(unsafe_code)]

//! Interruptible bottom-sheet transition controller.
//!
//! [`PanelTransitionController`] owns the card's resting state and the
//! in-flight [`TransitionSession`]. A transition animates three properties in
//! parallel — vertical offset, corner radius, and backdrop dimming — each as
//! its own [`PropertyAnimation`] handle so an interactive drag can scrub all
//! of them uniformly.
//!
//! # State Machine
//!
//! - `toggle` starts a full (non-interactive) transition toward the opposite
//!   state; duplicate calls while a session is live are absorbed.
//! - `begin_interactive` pauses the running handles and snapshots one
//!   session-level fraction; `update_interactive` scrubs relative to it;
//!   `end_interactive` resumes the handles to run out on their nominal curve.
//! - `tick` drives playing handles; when all complete, the resting state
//!   flips to the session target and the session is cleared.
//!
//! # Invariants
//!
//! 1. The handle set is non-empty iff a transition is running or paused for
//!    interaction; at most one session is live at a time.
//! 2. The interruption fraction is meaningful only while a session exists and
//!    resets to 0 when the session clears.
//! 3. All three handles start, pause, and resume together (lockstep).
//! 4. The effective scrub fraction applied to handles is always in [0, 1].
//!
//! # Failure Modes
//!
//! - `update_interactive` / `end_interactive` with no live session: no-op.
//!   Stray drag events without a matching begin must be tolerated.
//! - Non-finite drag fractions are ignored.

use std::time::Duration;

use tracing::debug;

use crate::animation::{PropertyAnimation, ease_in_out};
use crate::event::PanelEvent;

// ---------------------------------------------------------------------------
// PanelState
// ---------------------------------------------------------------------------

/// Resting position of the draggable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Only the handle strip is visible above the bottom edge.
    Collapsed,
    /// The full card is revealed.
    Expanded,
}

impl PanelState {
    /// The state a toggle transitions toward.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

// ---------------------------------------------------------------------------
// Metrics and frame
// ---------------------------------------------------------------------------

/// Layout constants the animated properties are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMetrics {
    /// Height of the containing view, in points.
    pub container_height: f32,
    /// Card height when expanded.
    pub expanded_height: f32,
    /// Visible handle strip height when collapsed.
    pub handle_height: f32,
    /// Corner radius when expanded (0 when collapsed).
    pub expanded_corner_radius: f32,
    /// Backdrop dim alpha when expanded (0 when collapsed).
    pub expanded_dim_alpha: f32,
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self {
            container_height: 812.0,
            expanded_height: 320.0,
            handle_height: 64.0,
            expanded_corner_radius: 12.0,
            expanded_dim_alpha: 0.45,
        }
    }
}

impl PanelMetrics {
    fn top_for(&self, state: PanelState) -> f32 {
        match state {
            PanelState::Expanded => self.container_height - self.expanded_height,
            PanelState::Collapsed => self.container_height - self.handle_height,
        }
    }

    fn corner_for(&self, state: PanelState) -> f32 {
        match state {
            PanelState::Expanded => self.expanded_corner_radius,
            PanelState::Collapsed => 0.0,
        }
    }

    fn dim_for(&self, state: PanelState) -> f32 {
        match state {
            PanelState::Expanded => self.expanded_dim_alpha,
            PanelState::Collapsed => 0.0,
        }
    }
}

/// The three animated outputs, sampled once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Y offset of the card's top edge from the container's top.
    pub top: f32,
    pub corner_radius: f32,
    pub dim_alpha: f32,
}

// ---------------------------------------------------------------------------
// TransitionSession
// ---------------------------------------------------------------------------

// Handle indices within a session. The handles are created together and stay
// in lockstep; the indices only pick each property's easing for sampling.
const POSITION: usize = 0;
const CORNER: usize = 1;
const DIMMING: usize = 2;

/// Mutable state of an in-flight (possibly interactive) transition.
#[derive(Debug)]
struct TransitionSession {
    target: PanelState,
    animations: Vec<PropertyAnimation>,
    progress_at_interruption: f32,
}

impl TransitionSession {
    fn new(target: PanelState, duration: Duration) -> Self {
        let mut animations = vec![
            PropertyAnimation::new(duration).easing(ease_in_out),
            PropertyAnimation::new(duration),
            PropertyAnimation::new(duration),
        ];
        for anim in &mut animations {
            anim.start();
        }
        Self {
            target,
            animations,
            progress_at_interruption: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// PanelTransitionController
// ---------------------------------------------------------------------------

/// Owns the card's resting state and drives its transitions.
#[derive(Debug)]
pub struct PanelTransitionController {
    metrics: PanelMetrics,
    state: PanelState,
    session: Option<TransitionSession>,
}

impl PanelTransitionController {
    /// Create a controller resting in the collapsed state.
    #[must_use]
    pub fn new(metrics: PanelMetrics) -> Self {
        Self {
            metrics,
            state: PanelState::Collapsed,
            session: None,
        }
    }

    /// Start a full transition toward the opposite state.
    ///
    /// While a session is already live this is absorbed: duplicate taps
    /// during an animation neither retarget it nor spawn extra handles.
    pub fn toggle(&mut self, duration: Duration) {
        if self.session.is_some() {
            return;
        }
        let target = self.state.opposite();
        debug!(to = ?target, "panel transition started");
        self.session = Some(TransitionSession::new(target, duration));
    }

    /// Begin driving the transition interactively (drag began).
    ///
    /// Creates a session via [`toggle`](Self::toggle) if none exists, then
    /// pauses every handle and snapshots the interruption fraction.
    pub fn begin_interactive(&mut self, duration: Duration) {
        if self.session.is_none() {
            self.toggle(duration);
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        for anim in &mut session.animations {
            anim.pause();
        }
        // Handles run in lockstep, so any one's fraction serves as the
        // session-level snapshot.
        session.progress_at_interruption = session
            .animations
            .first()
            .map_or(0.0, PropertyAnimation::progress);
    }

    /// Scrub the in-flight transition (drag changed).
    ///
    /// `raw_fraction` is unclamped drag distance divided by the card travel,
    /// positive in the upward (reveal) direction. Its sign is inverted for a
    /// collapsing transition so drag direction maps consistently regardless
    /// of the current state. No state transition happens here.
    pub fn update_interactive(&mut self, raw_fraction: f32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !raw_fraction.is_finite() {
            return;
        }
        let directed = match session.target {
            PanelState::Expanded => raw_fraction,
            PanelState::Collapsed => -raw_fraction,
        };
        let fraction = (directed + session.progress_at_interruption).clamp(0.0, 1.0);
        for anim in &mut session.animations {
            anim.set_progress(fraction);
        }
    }

    /// Release the interactive drag, letting every handle run to completion
    /// on its nominal curve (drag ended). No-op without a live session.
    pub fn end_interactive(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        for anim in &mut session.animations {
            anim.resume();
        }
    }

    /// Consume one recognized panel gesture.
    ///
    /// Drag translations are converted to reveal fractions against the
    /// card's travel distance (upward drags are positive fractions).
    pub fn handle_event(&mut self, event: &PanelEvent, duration: Duration) {
        match *event {
            PanelEvent::TapEnded => self.toggle(duration),
            PanelEvent::DragBegan => self.begin_interactive(duration),
            PanelEvent::DragChanged { translation } => {
                let travel = self.metrics.expanded_height - self.metrics.handle_height;
                if travel > 0.0 {
                    self.update_interactive(-translation / travel);
                }
            }
            PanelEvent::DragEnded => self.end_interactive(),
        }
    }

    /// Advance the running transition. When all handles complete, the
    /// resting state flips to the session target and the session clears.
    pub fn tick(&mut self, delta: Duration) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let mut all_complete = true;
        for anim in &mut session.animations {
            all_complete &= anim.tick(delta);
        }
        if all_complete {
            self.state = session.target;
            self.session = None;
            debug!(state = ?self.state, "panel transition finished");
        }
    }

    /// Sample the animated properties for rendering.
    #[must_use]
    pub fn frame(&self) -> PanelFrame {
        let Some(session) = self.session.as_ref() else {
            return PanelFrame {
                top: self.metrics.top_for(self.state),
                corner_radius: self.metrics.corner_for(self.state),
                dim_alpha: self.metrics.dim_for(self.state),
            };
        };
        let from = self.state;
        let to = session.target;
        let sample = |index: usize, f: fn(&PanelMetrics, PanelState) -> f32| {
            let t = session.animations[index].value();
            let a = f(&self.metrics, from);
            let b = f(&self.metrics, to);
            a + (b - a) * t
        };
        PanelFrame {
            top: sample(POSITION, PanelMetrics::top_for),
            corner_radius: sample(CORNER, PanelMetrics::corner_for),
            dim_alpha: sample(DIMMING, PanelMetrics::dim_for),
        }
    }

    /// Current resting state (unchanged while a transition is in flight).
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether a transition session is live (running or paused).
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.session.is_some()
    }

    /// Target of the live session, if any.
    #[must_use]
    pub fn target(&self) -> Option<PanelState> {
        self.session.as_ref().map(|s| s.target)
    }

    /// Number of live animation handles (0 when idle).
    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.animations.len())
    }

    /// Fraction-complete of the live session's handles, if any.
    #[must_use]
    pub fn session_progress(&self) -> Option<f32> {
        self.session
            .as_ref()
            .and_then(|s| s.animations.first())
            .map(PropertyAnimation::progress)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
