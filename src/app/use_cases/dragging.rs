//! Use-Case: gegriffenen Kontrollpunkt verschieben und loslassen.

use crate::core::ControlPoints;
use crate::AppState;
use glam::Vec2;

/// Zeigerbewegung. Im Zustand Dragging wird die neue Position in den
/// gegriffenen Punkt geschrieben und die Kurve neu aufgebaut.
///
/// Eine unveränderte Position (Jitter auf demselben Pixel) löst keinen
/// Neuaufbau aus.
pub fn move_pointer(state: &mut AppState, scene_pos: Vec2) {
    let changed = scene_pos != state.pointer.scene_pos;
    state.pointer.scene_pos = scene_pos;

    let Some(index) = state.selection.selected_point else {
        return;
    };
    if !changed {
        return;
    }

    if state.control_points.set(index, scene_pos) {
        state.rebuild_curve();
    }
}

/// Maustaste losgelassen: finale Position schreiben, Selektion lösen,
/// Kurve neu aufbauen.
pub fn release(state: &mut AppState, scene_pos: Vec2) {
    state.pointer.scene_pos = scene_pos;

    let Some(index) = state.selection.selected_point.take() else {
        return;
    };

    state.control_points.set(index, scene_pos);
    state.rebuild_curve();
    log::debug!(
        "Kontrollpunkt {} abgelegt bei ({:.3}, {:.3})",
        index,
        scene_pos.x,
        scene_pos.y
    );
}

/// Stellt die vier Startpunkte wieder her und bricht einen laufenden Drag ab.
pub fn reset_control_points(state: &mut AppState) {
    state.selection.selected_point = None;
    state.control_points = ControlPoints::initial();
    state.rebuild_curve();
    log::info!("Kontrollpunkte zurückgesetzt");
}
