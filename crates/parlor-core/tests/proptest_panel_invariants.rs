//! Property tests for the panel controller's scrub-clamping and no-op
//! tolerance invariants.

use std::time::Duration;

use proptest::prelude::*;

use parlor_core::panel::{PanelMetrics, PanelState, PanelTransitionController};

const MS_300: Duration = Duration::from_millis(300);

fn controller() -> PanelTransitionController {
    PanelTransitionController::new(PanelMetrics::default())
}

proptest! {
    /// Whatever raw fraction the drag math produces, the fraction applied to
    /// the handles stays in [0, 1].
    #[test]
    fn scrub_fraction_is_always_clamped(
        raw in -100.0f32..100.0,
        start in 0.0f32..0.99,
    ) {
        let mut panel = controller();
        panel.toggle(MS_300);
        panel.tick(MS_300.mul_f32(start));
        panel.begin_interactive(MS_300);
        panel.update_interactive(raw);

        let progress = panel.session_progress().unwrap();
        prop_assert!((0.0..=1.0).contains(&progress), "progress = {progress}");
    }

    /// Arbitrary scrub sequences never panic and never flip the resting
    /// state without the completion path running.
    #[test]
    fn scrub_sequences_only_flip_state_on_completion(
        fractions in proptest::collection::vec(any::<f32>(), 0..16),
    ) {
        let mut panel = controller();
        panel.begin_interactive(MS_300);
        for f in fractions {
            panel.update_interactive(f);
            prop_assert_eq!(panel.state(), PanelState::Collapsed);
        }
        panel.end_interactive();
        panel.tick(MS_300);
        panel.tick(MS_300);
        prop_assert_eq!(panel.state(), PanelState::Expanded);
        prop_assert!(!panel.is_transitioning());
    }

    /// Stray interactive events with no session are no-ops, for any input.
    #[test]
    fn stray_events_are_noops(raw in any::<f32>()) {
        let mut panel = controller();
        panel.update_interactive(raw);
        panel.end_interactive();
        prop_assert_eq!(panel.state(), PanelState::Collapsed);
        prop_assert!(!panel.is_transitioning());
        prop_assert_eq!(panel.handle_count(), 0);
    }
}
