/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Viewport-Größe (in Punkten) oder Pixeldichte hat sich geändert
    ViewportResized {
        size: [f32; 2],
        pixels_per_point: f32,
    },
    /// Zeiger wurde bewegt (Position relativ zum Viewport, in Punkten)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primäre Maustaste gedrückt
    PrimaryPressed { screen_pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PrimaryReleased { screen_pos: glam::Vec2 },
    /// Ein neuer Frame wird gerendert
    FrameAdvanced,
    /// Overlay (Kurve, Polygon, Punkte) ein-/ausblenden
    ToggleOverlayRequested,
    /// Animation pausieren/fortsetzen
    TogglePauseRequested,
    /// Kontrollpunkte auf Startwerte zurücksetzen
    ResetControlPointsRequested,
}
