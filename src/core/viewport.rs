//! Umrechnung Bildschirm-Pixel ↔ Szenen-Koordinaten.
//!
//! Die Szene nutzt direkt Normalized Device Coordinates: der Viewport
//! entspricht immer `[-1, 1] × [-1, 1]`, ohne Kamera oder Zoom.

use glam::Vec2;

/// Rechnet eine Pixelposition (relativ zur linken oberen Viewport-Ecke) in
/// Szenen-Koordinaten um.
///
/// `(x / w, -y / h)` wird von `[0,1] × [0,-1]` auf `[-1,1] × [1,-1]` abgebildet
/// (Y-Achse zeigt in der Szene nach oben).
pub fn screen_to_scene(screen_pos: Vec2, viewport_size: Vec2) -> Vec2 {
    let size = viewport_size.max(Vec2::ONE);
    let normalized = Vec2::new(screen_pos.x / size.x, -screen_pos.y / size.y);
    2.0 * (normalized - Vec2::new(0.5, -0.5))
}

/// Pick-Radius in Szenen-Einheiten: `point_size / min(width, height)`.
pub fn pick_radius(point_size_px: f32, viewport_size: Vec2) -> f32 {
    point_size_px / viewport_size.min_element().max(1.0)
}

/// Halbe Kantenlänge eines Punkt-Quads in NDC für eine Pixelgröße.
pub fn point_half_extent(point_size_px: f32, viewport_size_px: Vec2) -> Vec2 {
    Vec2::splat(point_size_px) / viewport_size_px.max(Vec2::ONE)
}
