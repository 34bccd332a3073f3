//! UI-Komponenten: Toolbar, Status-Bar, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Die UI mutiert keinen Zustand direkt, sondern liefert `AppIntent`s.
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use status::{render_status_bar, FrameTimer};
pub use toolbar::render_toolbar;
