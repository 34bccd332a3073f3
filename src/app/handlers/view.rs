//! Handler für Viewport und Overlay.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert Viewport-Größe und Pixeldichte im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2], pixels_per_point: f32) {
    use_cases::viewport::resize(state, size, pixels_per_point);
}

/// Blendet Kurve, Kontrollpolygon und Punkte ein oder aus.
pub fn set_overlay_visible(state: &mut AppState, visible: bool) {
    use_cases::viewport::set_overlay_visible(state, visible);
}
