//! Die vier Kontrollpunkte der Bézier-Kurve (Szenen-Koordinaten).

use glam::Vec2;

/// Anzahl der Kontrollpunkte einer kubischen Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Startkonfiguration der Kontrollpunkte.
pub const INITIAL_CONTROL_POINTS: [Vec2; CONTROL_POINT_COUNT] = [
    Vec2::new(-0.8, -1.6), // unten links (außerhalb des Bildes)
    Vec2::new(-0.45, 0.7), // oben Mitte
    Vec2::new(-0.05, 0.0), // unten Mitte
    Vec2::new(1.8, 0.1),   // rechts außerhalb
];

/// Feste Rolle eines Kontrollpunkts anhand seines Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPointRole {
    /// Kurvenanfang (Index 0)
    Start,
    /// Erster Anfasser (Index 1)
    Handle1,
    /// Zweiter Anfasser (Index 2)
    Handle2,
    /// Kurvenende (Index 3)
    End,
}

impl ControlPointRole {
    /// Liefert die Rolle zu einem Index (None außerhalb 0..4).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Start),
            1 => Some(Self::Handle1),
            2 => Some(Self::Handle2),
            3 => Some(Self::End),
            _ => None,
        }
    }

    /// Anzeigename für die Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Handle1 => "Handle 1",
            Self::Handle2 => "Handle 2",
            Self::End => "End",
        }
    }
}

/// Geordnete, feste Menge von vier Kontrollpunkten.
///
/// Punkte werden nur in-place verändert, nie hinzugefügt oder entfernt.
/// Selektionen referenzieren einen Punkt ausschließlich über seinen Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    points: [Vec2; CONTROL_POINT_COUNT],
}

impl ControlPoints {
    /// Erstellt Kontrollpunkte aus einem Array.
    pub fn new(points: [Vec2; CONTROL_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Startkonfiguration (siehe [`INITIAL_CONTROL_POINTS`]).
    pub fn initial() -> Self {
        Self::new(INITIAL_CONTROL_POINTS)
    }

    /// Read-only Zugriff auf alle Punkte in Index-Reihenfolge.
    pub fn as_array(&self) -> &[Vec2; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Position des Punkts mit Index `index`.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Überschreibt die Position eines Punkts. Gibt `false` bei ungültigem Index zurück.
    pub fn set(&mut self, index: usize, position: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = position;
                true
            }
            None => false,
        }
    }

    /// Hit-Test: erster Punkt (in Index-Reihenfolge), dessen Abstand zu `pos`
    /// kleiner als `radius` ist.
    ///
    /// Kein Distanz-Vergleich zwischen Kandidaten: bei Überlappung gewinnt
    /// immer der niedrigere Index.
    pub fn pick(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.distance(pos) < radius)
    }
}

impl Default for ControlPoints {
    fn default() -> Self {
        Self::initial()
    }
}
