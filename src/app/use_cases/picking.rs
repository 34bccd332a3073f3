//! Use-Case: Kontrollpunkt per Klick greifen (Idle → Dragging).

use crate::AppState;
use glam::Vec2;

/// Greift den ersten Kontrollpunkt, dessen Abstand zu `scene_pos` kleiner als
/// `max_distance` ist.
///
/// Eine vorherige Selektion wird immer verworfen; liegt kein Punkt im Radius,
/// bleibt der Zustand Idle.
pub fn pick_control_point(state: &mut AppState, scene_pos: Vec2, max_distance: f32) {
    state.pointer.scene_pos = scene_pos;
    state.selection.selected_point = None;

    if max_distance <= 0.0 {
        return;
    }

    state.selection.selected_point = state.control_points.pick(scene_pos, max_distance);

    match state.selection.selected_point {
        Some(index) => log::debug!(
            "Kontrollpunkt {} gegriffen bei ({:.3}, {:.3})",
            index,
            scene_pos.x,
            scene_pos.y
        ),
        None => log::trace!("Kein Kontrollpunkt bei ({:.3}, {:.3})", scene_pos.x, scene_pos.y),
    }
}
