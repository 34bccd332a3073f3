use crate::app::CommandLog;
use crate::core::{BezierCurve, ControlPoints};
use crate::shared::DemoOptions;
use std::sync::Arc;

use super::{AnimationState, PointerState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
///
/// Ersetzt jeglichen globalen Zustand: Kontrollpunkte, Kurve, Uhr und
/// Selektion werden explizit an Update- und Render-Funktionen übergeben.
pub struct AppState {
    /// Die vier Kontrollpunkte der Kurve
    pub control_points: ControlPoints,
    /// Aus den Kontrollpunkten abgeleitete Kurve (Arc für O(1)-Clone in RenderScene)
    pub curve: Arc<BezierCurve>,
    /// Zähler für Kurven-Neuaufbauten
    pub curve_revision: u64,
    /// Selection-State (gegriffener Punkt)
    pub selection: SelectionState,
    /// Letzte Zeigerposition
    pub pointer: PointerState,
    /// Animations-Uhr und Sprite-Pose
    pub animation: AnimationState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: DemoOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(DemoOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen
    pub fn with_options(options: DemoOptions) -> Self {
        let control_points = ControlPoints::initial();
        let curve = Arc::new(BezierCurve::from_control_points(&control_points));
        let mut animation = AnimationState::default();
        animation.pose = crate::core::sprite::compose(
            &animation.clock,
            &curve,
            &options.sprite_params(),
        );

        Self {
            control_points,
            curve,
            curve_revision: 0,
            selection: SelectionState::new(),
            pointer: PointerState::default(),
            animation,
            view: ViewState::new(options.window_size),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Baut die Kurve vollständig aus den aktuellen Kontrollpunkten neu auf.
    ///
    /// Die Sprite-Pose wird gegen die neue Kurve neu berechnet, auch wenn die
    /// Uhr pausiert ist.
    pub fn rebuild_curve(&mut self) {
        self.curve = Arc::new(BezierCurve::from_control_points(&self.control_points));
        self.curve_revision += 1;
        self.animation.pose = crate::core::sprite::compose(
            &self.animation.clock,
            &self.curve,
            &self.options.sprite_params(),
        );
        log::debug!("Kurve neu aufgebaut (Revision {})", self.curve_revision);
    }

    /// Position des aktuell gegriffenen Kontrollpunkts.
    pub fn selected_point_position(&self) -> Option<glam::Vec2> {
        self.selection
            .selected_point
            .and_then(|index| self.control_points.get(index))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
