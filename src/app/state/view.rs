/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Punkten
    pub viewport_size: [f32; 2],
    /// Physische Pixel pro Punkt (HiDPI)
    pub pixels_per_point: f32,
    /// Ob Kurve, Kontrollpolygon und Punkte gezeichnet werden
    pub show_overlay: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self {
            viewport_size,
            pixels_per_point: 1.0,
            show_overlay: true,
        }
    }

    /// Größe des Offscreen-Targets in physischen Pixeln.
    pub fn target_size_px(&self) -> [u32; 2] {
        let to_px = |v: f32| (v * self.pixels_per_point).round().max(0.0) as u32;
        [to_px(self.viewport_size[0]), to_px(self.viewport_size[1])]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new([0.0, 0.0])
    }
}
