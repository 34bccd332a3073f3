//! Use-Case: Animations-Uhr pro Frame vorrücken und Sprite-Pose ableiten.

use crate::core::{sprite, BezierCurve};
use crate::AppState;

/// Rückt die Uhr um einen Frame vor und berechnet die Sprite-Pose neu.
///
/// Steht das Sprite nach dem Tick auf dem letzten Kurven-Sample, wird die
/// Skalierungs-Zeit auf 0 gesetzt. Im Pausenzustand passiert nichts.
pub fn advance_frame(state: &mut AppState) {
    if state.animation.paused {
        return;
    }

    let params = state.options.sprite_params();
    let previous_index = state.animation.pose.curve_index;

    state.animation.clock.tick(&state.options.clock_steps());

    if sprite::at_curve_end(state.animation.clock.scene_time, params.speed_factor) {
        state.animation.clock.reset_scale();
        if previous_index != BezierCurve::last_index() {
            state.animation.completed_traversals += 1;
            log::debug!(
                "Durchlauf {} abgeschlossen",
                state.animation.completed_traversals
            );
        }
    }

    state.animation.pose = sprite::compose(&state.animation.clock, &state.curve, &params);
}

/// Pausiert die Animation oder setzt sie fort.
pub fn set_paused(state: &mut AppState, paused: bool) {
    if state.animation.paused != paused {
        log::info!(
            "Animation {}",
            if paused { "pausiert" } else { "fortgesetzt" }
        );
    }
    state.animation.paused = paused;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn advance_ticks_clock_and_updates_pose() {
        let mut state = AppState::new();

        advance_frame(&mut state);

        assert_eq!(state.animation.clock.ticks, 1);
        assert_relative_eq!(state.animation.clock.scene_time, 0.00005);
        assert_relative_eq!(state.animation.clock.frame_time, 0.00025);
        assert_eq!(state.animation.pose.curve_index, 0);
    }

    #[test]
    fn paused_advance_is_noop() {
        let mut state = AppState::new();
        set_paused(&mut state, true);

        advance_frame(&mut state);

        assert_eq!(state.animation.clock.ticks, 0);
        assert_relative_eq!(state.animation.clock.scene_time, 0.0);
    }

    #[test]
    fn scale_time_resets_on_last_sample_and_counts_traversal_once() {
        let mut state = AppState::new();
        let mut frames = 0;
        while state.animation.pose.curve_index != BezierCurve::last_index() {
            advance_frame(&mut state);
            frames += 1;
            assert!(frames < 10_000, "letztes Sample wird nie erreicht");
        }

        assert_relative_eq!(state.animation.clock.scale_time, 0.0);
        assert_eq!(state.animation.completed_traversals, 1);

        advance_frame(&mut state);
        if state.animation.pose.curve_index == BezierCurve::last_index() {
            assert_eq!(state.animation.completed_traversals, 1);
        }
    }

    #[test]
    fn pose_follows_current_curve_and_sprite_scale() {
        let mut state = AppState::new();
        advance_frame(&mut state);

        let pose = state.animation.pose;
        assert_eq!(pose.position, state.curve.sample(pose.curve_index));
        let expected_scale = (1.0 / (1.2 * (state.animation.clock.scale_time + 0.25))) as f32;
        assert_relative_eq!(pose.scale_factor, expected_scale);
    }
}
