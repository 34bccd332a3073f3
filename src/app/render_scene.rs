//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        curve: state.curve.clone(),
        curve_revision: state.curve_revision,
        control_points: state.control_points,
        selected_point: state.selection.selected_point,
        sprite: state.animation.pose,
        show_overlay: state.view.show_overlay,
        viewport_size: state.view.viewport_size,
        target_size_px: state.view.target_size_px(),
        style: state.options.overlay_style(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases;
    use crate::app::AppState;
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn build_shares_curve_without_copy() {
        let state = AppState::new();

        let scene = build(&state);

        assert!(Arc::ptr_eq(&scene.curve, &state.curve));
        assert_eq!(scene.curve_revision, state.curve_revision);
    }

    #[test]
    fn build_reflects_selection_and_overlay_flag() {
        let mut state = AppState::new();
        let p2 = state.control_points.get(2).expect("Punkt 2 existiert");
        use_cases::picking::pick_control_point(&mut state, p2, 0.01);
        use_cases::viewport::set_overlay_visible(&mut state, false);

        let scene = build(&state);

        assert_eq!(scene.selected_point, Some(2));
        assert!(!scene.show_overlay);
    }

    #[test]
    fn build_reports_physical_target_size() {
        let mut state = AppState::new();
        use_cases::viewport::resize(&mut state, [400.0, 300.0], 1.5);

        let scene = build(&state);

        assert_eq!(scene.target_size_px, [600, 450]);
        assert!(scene.has_drawable_target());

        use_cases::viewport::resize(&mut state, [0.0, 300.0], 1.0);
        assert!(!build(&state).has_drawable_target());
    }

    #[test]
    fn rebuilt_curve_gets_new_revision() {
        let mut state = AppState::new();
        let before = build(&state);
        use_cases::picking::pick_control_point(&mut state, Vec2::new(-0.45, 0.7), 0.01);
        use_cases::dragging::release(&mut state, Vec2::new(0.0, 0.9));

        let after = build(&state);

        assert!(after.curve_revision > before.curve_revision);
        assert_ne!(after.curve.samples(), before.curve.samples());
    }
}
