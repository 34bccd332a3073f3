//! Animations-Uhr mit drei unabhängigen Zeit-Akkumulatoren.

/// Inkremente pro gerendertem Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSteps {
    /// Schritt für die Position entlang der Kurve
    pub scene: f64,
    /// Schritt für die Sprite-Skalierung
    pub scale: f64,
    /// Schritt für die Auswahl des Animations-Frames
    pub frame: f64,
}

/// Drei monoton wachsende Zeitwerte ohne Obergrenze.
///
/// Die Akkumulatoren sind `f64`: in `f32` bliebe die Frame-Zeit bei etwa 4096
/// stehen, weil das Inkrement unter die halbe Mantissen-Stufe fällt.
///
/// `scale_time` ist der einzige Wert, der zurückgesetzt wird (bei jedem
/// vollständigen Durchlauf des Sprites entlang der Kurve).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    /// Szenen-Zeit (bestimmt den Kurven-Index)
    pub scene_time: f64,
    /// Skalierungs-Zeit (bestimmt die Sprite-Größe)
    pub scale_time: f64,
    /// Frame-Zeit (bestimmt das Daumenkino-Bild)
    pub frame_time: f64,
    /// Anzahl der bisher ausgeführten Ticks
    pub ticks: u64,
}

impl AnimationClock {
    /// Erstellt eine Uhr mit allen Zeiten auf 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rückt alle drei Akkumulatoren um ihr Inkrement vor.
    pub fn tick(&mut self, steps: &ClockSteps) {
        self.scene_time += steps.scene;
        self.scale_time += steps.scale;
        self.frame_time += steps.frame;
        self.ticks += 1;
    }

    /// Setzt nur die Skalierungs-Zeit zurück.
    pub fn reset_scale(&mut self) {
        self.scale_time = 0.0;
    }
}
