//! Sprite-Komposition: Kurvenposition, Skalierung und Animations-Frame.

use super::{AnimationClock, BezierCurve, CURVE_SAMPLE_COUNT};
use glam::{Mat4, Vec2, Vec3};

/// Anzahl der Animations-Frames (Daumenkino).
pub const SPRITE_FRAME_COUNT: usize = 13;

/// Parameter der Sprite-Bewegung (aus den Optionen abgeleitet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteParams {
    /// Multiplikator Szenen-Zeit → Kurven-Index
    pub speed_factor: f32,
    /// Wie schnell das Sprite kleiner wird
    pub shrink_factor: f32,
    /// Startgröße (größerer Wert = kleineres Sprite)
    pub initial_size: f32,
    /// Seitenverhältnis-Skalierung (x, y) des Sprite-Quads
    pub aspect_scale: Vec2,
    /// Multiplikator Frame-Zeit → Frame-Index
    pub frame_rate_factor: f32,
    /// Anzahl der Animations-Frames
    pub frame_count: usize,
}

/// Ergebnis der Komposition für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpritePose {
    /// Index des Kurven-Samples, auf dem das Sprite steht
    pub curve_index: usize,
    /// Aktueller Skalierungsfaktor
    pub scale_factor: f32,
    /// Index des Animations-Frames
    pub frame_index: usize,
    /// Position in Szenen-Koordinaten
    pub position: Vec2,
    /// translate(position) ∘ scale(scale_factor · aspect)
    pub transform: Mat4,
}

impl Default for SpritePose {
    fn default() -> Self {
        Self {
            curve_index: 0,
            scale_factor: 1.0,
            frame_index: 0,
            position: Vec2::ZERO,
            transform: Mat4::IDENTITY,
        }
    }
}

/// `floor(scene_time · speed_factor) mod (N + 1)`
pub fn curve_index(scene_time: f64, speed_factor: f32) -> usize {
    let raw = (scene_time * f64::from(speed_factor)).floor();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw as u64 % CURVE_SAMPLE_COUNT as u64) as usize
}

/// `1 / (shrink_factor · (scale_time + initial_size))`
pub fn scale_factor(scale_time: f64, shrink_factor: f32, initial_size: f32) -> f32 {
    (1.0 / (f64::from(shrink_factor) * (scale_time + f64::from(initial_size)))) as f32
}

/// `floor(frame_time · rate_factor) mod frame_count`
pub fn frame_index(frame_time: f64, rate_factor: f32, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let raw = (frame_time * f64::from(rate_factor)).floor();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw as u64 % frame_count as u64) as usize
}

/// Gibt `true` zurück, wenn das Sprite bei dieser Szenen-Zeit auf dem letzten
/// Kurven-Sample steht (Ende eines Durchlaufs).
pub fn at_curve_end(scene_time: f64, speed_factor: f32) -> bool {
    curve_index(scene_time, speed_factor) == BezierCurve::last_index()
}

/// Berechnet Position, Skalierung und Frame des Sprites aus Uhr und Kurve.
pub fn compose(clock: &AnimationClock, curve: &BezierCurve, params: &SpriteParams) -> SpritePose {
    let curve_index = curve_index(clock.scene_time, params.speed_factor);
    let scale_factor = scale_factor(clock.scale_time, params.shrink_factor, params.initial_size);
    let frame_index = frame_index(clock.frame_time, params.frame_rate_factor, params.frame_count);
    let position = curve.sample(curve_index);

    let scale = params.aspect_scale * scale_factor;
    let transform = Mat4::from_translation(position.extend(0.0))
        * Mat4::from_scale(Vec3::new(scale.x, scale.y, 1.0));

    SpritePose {
        curve_index,
        scale_factor,
        frame_index,
        position,
        transform,
    }
}
