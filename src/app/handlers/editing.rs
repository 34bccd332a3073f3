//! Handler für das Greifen und Verschieben von Kontrollpunkten.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Zeigerbewegung: zieht einen gegriffenen Punkt mit.
pub fn update_pointer(state: &mut AppState, scene_pos: Vec2) {
    use_cases::dragging::move_pointer(state, scene_pos);
}

/// Greift den ersten Kontrollpunkt innerhalb von `max_distance`.
pub fn pick(state: &mut AppState, scene_pos: Vec2, max_distance: f32) {
    use_cases::picking::pick_control_point(state, scene_pos, max_distance);
}

/// Beendet den Drag.
pub fn release(state: &mut AppState, scene_pos: Vec2) {
    use_cases::dragging::release(state, scene_pos);
}

/// Setzt die Kontrollpunkte auf ihre Startwerte zurück.
pub fn reset(state: &mut AppState) {
    use_cases::dragging::reset_control_points(state);
}
