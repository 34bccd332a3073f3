//! Core-Domänentypen: Kontrollpunkte, Bézier-Kurve, Animations-Uhr, Sprite.
//!
//! Reine Logik ohne GPU- oder UI-Abhängigkeit.

pub mod assets;
pub mod bezier;
pub mod clock;
pub mod control_points;
pub mod sprite;
pub mod viewport;

pub use assets::{AssetError, SceneImages};
pub use bezier::{BezierCurve, CURVE_SAMPLE_COUNT, CURVE_SEGMENTS};
pub use clock::{AnimationClock, ClockSteps};
pub use control_points::{ControlPointRole, ControlPoints, CONTROL_POINT_COUNT};
pub use sprite::{SpriteParams, SpritePose, SPRITE_FRAME_COUNT};
