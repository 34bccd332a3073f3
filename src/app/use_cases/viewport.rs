//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert Viewport-Größe und Pixeldichte.
///
/// Nicht-endliche oder negative Werte werden auf 0 bzw. 1 geklemmt.
pub fn resize(state: &mut AppState, size: [f32; 2], pixels_per_point: f32) {
    let clamp = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let size = [clamp(size[0]), clamp(size[1])];
    let pixels_per_point = if pixels_per_point.is_finite() && pixels_per_point > 0.0 {
        pixels_per_point
    } else {
        1.0
    };

    if state.view.viewport_size != size || state.view.pixels_per_point != pixels_per_point {
        log::debug!(
            "Viewport: {:.0}x{:.0} Punkte @ {:.2} px/pt",
            size[0],
            size[1],
            pixels_per_point
        );
    }
    state.view.viewport_size = size;
    state.view.pixels_per_point = pixels_per_point;
}

/// Setzt die Sichtbarkeit des Overlays.
pub fn set_overlay_visible(state: &mut AppState, visible: bool) {
    state.view.show_overlay = visible;
}
