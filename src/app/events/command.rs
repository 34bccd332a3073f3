/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Viewport-Größe und Pixeldichte übernehmen
    SetViewportSize {
        size: [f32; 2],
        pixels_per_point: f32,
    },
    /// Zeigerposition aktualisieren (zieht ggf. den gegriffenen Punkt mit)
    UpdatePointer { scene_pos: glam::Vec2 },
    /// Kontrollpunkt an Szenenposition greifen
    PickControlPoint {
        scene_pos: glam::Vec2,
        max_distance: f32,
    },
    /// Gegriffenen Kontrollpunkt loslassen
    ReleaseControlPoint { scene_pos: glam::Vec2 },
    /// Animations-Uhr um einen Frame weiterschalten
    AdvanceAnimation,
    /// Overlay-Sichtbarkeit setzen
    SetOverlayVisible { visible: bool },
    /// Animation pausieren oder fortsetzen
    SetAnimationPaused { paused: bool },
    /// Kontrollpunkte auf Startwerte zurücksetzen
    ResetControlPoints,
}

impl AppCommand {
    /// Kurzbezeichnung für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SetViewportSize { .. } => "Viewport",
            Self::UpdatePointer { .. } => "Zeiger",
            Self::PickControlPoint { .. } => "Greifen",
            Self::ReleaseControlPoint { .. } => "Loslassen",
            Self::AdvanceAnimation => "Frame",
            Self::SetOverlayVisible { .. } => "Overlay",
            Self::SetAnimationPaused { .. } => "Pause",
            Self::ResetControlPoints => "Zurücksetzen",
        }
    }
}
