//! Fox Run Curve Demo Library.
//! Kurven-, Animations- und Editier-Logik als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    AnimationClock, BezierCurve, ControlPointRole, ControlPoints, SceneImages, SpritePose,
    CURVE_SAMPLE_COUNT,
};
pub use shared::{DemoOptions, RenderScene};
