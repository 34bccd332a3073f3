//! Diskrete Abtastung der kubischen Bézier-Kurve.

use super::ControlPoints;
use glam::Vec2;

/// Anzahl der Kurvensegmente (N).
pub const CURVE_SEGMENTS: usize = 150;
/// Anzahl der Samples (N + 1), unabhängig von den Kontrollpunkten.
pub const CURVE_SAMPLE_COUNT: usize = CURVE_SEGMENTS + 1;

/// Wertet die Kurve an der Stelle `t` aus.
///
/// `B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + (1-t)t²·P2 + t³·P3`
///
/// Der P2-Term trägt keinen Faktor 3; die Form der Kurve (und damit die
/// Laufbahn des Sprites) hängt davon ab. `B(0) = P0` und `B(1) = P3` gelten
/// unabhängig davon.
pub fn evaluate(points: &[Vec2; 4], t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * points[0] + 3.0 * inv2 * t * points[1] + inv * t2 * points[2] + t2 * t * points[3]
}

/// Vollständig abgetastete Kurve mit genau [`CURVE_SAMPLE_COUNT`] Punkten.
///
/// Wird nie inkrementell aktualisiert: jede Änderung eines Kontrollpunkts
/// erzeugt eine neue Kurve über [`BezierCurve::from_control_points`].
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    samples: [Vec2; CURVE_SAMPLE_COUNT],
}

impl BezierCurve {
    /// Tastet die Kurve bei `t = i / N` für `i = 0..=N` ab.
    pub fn from_control_points(control_points: &ControlPoints) -> Self {
        let points = control_points.as_array();
        let samples = std::array::from_fn(|i| {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            evaluate(points, t)
        });
        Self { samples }
    }

    /// Alle Samples in Parameter-Reihenfolge.
    pub fn samples(&self) -> &[Vec2; CURVE_SAMPLE_COUNT] {
        &self.samples
    }

    /// Sample mit Index `index`; Indizes größer N werden umgebrochen.
    pub fn sample(&self, index: usize) -> Vec2 {
        self.samples[index % CURVE_SAMPLE_COUNT]
    }

    /// Index des letzten Samples (`t = 1`).
    pub const fn last_index() -> usize {
        CURVE_SEGMENTS
    }

    /// Anzahl der Samples (immer [`CURVE_SAMPLE_COUNT`]).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Immer `false`: eine Kurve hat stets N + 1 Samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::from_control_points(&ControlPoints::initial())
    }
}
