//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::OverlayStyle;
use crate::core::{BezierCurve, ControlPoints, SpritePose};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Abgetastete Kurve (Arc für O(1)-Clone pro Frame)
    pub curve: Arc<BezierCurve>,
    /// Wird bei jedem Neuaufbau der Kurve erhöht (Renderer lädt Vertex-Buffer neu)
    pub curve_revision: u64,
    /// Aktuelle Kontrollpunkte
    pub control_points: ControlPoints,
    /// Index des gegriffenen Kontrollpunkts
    pub selected_point: Option<usize>,
    /// Sprite-Position, Skalierung und Frame
    pub sprite: SpritePose,
    /// Ob Kurve, Kontrollpolygon und Punkte gezeichnet werden
    pub show_overlay: bool,
    /// Viewport-Größe in Punkten [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Größe des Offscreen-Targets in physischen Pixeln
    pub target_size_px: [u32; 2],
    /// Farben und Punktgröße
    pub style: OverlayStyle,
}

impl RenderScene {
    /// Gibt zurück, ob der Viewport eine zeichenbare Größe hat.
    pub fn has_drawable_target(&self) -> bool {
        self.target_size_px[0] > 0 && self.target_size_px[1] > 0
    }
}
