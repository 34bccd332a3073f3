//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::viewport::screen_to_scene;
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Bildschirmpositionen werden hier anhand der aktuellen Viewport-Größe in
/// Szenenkoordinaten umgerechnet; der Pick-Radius kommt aus den Optionen.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let viewport = Vec2::from(state.view.viewport_size);

    match intent {
        AppIntent::ViewportResized {
            size,
            pixels_per_point,
        } => vec![AppCommand::SetViewportSize {
            size,
            pixels_per_point,
        }],
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::UpdatePointer {
            scene_pos: screen_to_scene(screen_pos, viewport),
        }],
        AppIntent::PrimaryPressed { screen_pos } => {
            let max_distance = state.options.pick_radius(state.view.viewport_size);
            vec![AppCommand::PickControlPoint {
                scene_pos: screen_to_scene(screen_pos, viewport),
                max_distance,
            }]
        }
        AppIntent::PrimaryReleased { screen_pos } => vec![AppCommand::ReleaseControlPoint {
            scene_pos: screen_to_scene(screen_pos, viewport),
        }],
        AppIntent::FrameAdvanced => vec![AppCommand::AdvanceAnimation],
        AppIntent::ToggleOverlayRequested => vec![AppCommand::SetOverlayVisible {
            visible: !state.view.show_overlay,
        }],
        AppIntent::TogglePauseRequested => vec![AppCommand::SetAnimationPaused {
            paused: !state.animation.paused,
        }],
        AppIntent::ResetControlPointsRequested => vec![AppCommand::ResetControlPoints],
    }
}

#[cfg(test)]
mod tests;
