//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport & Overlay ===
            AppCommand::SetViewportSize {
                size,
                pixels_per_point,
            } => handlers::view::set_viewport_size(state, size, pixels_per_point),
            AppCommand::SetOverlayVisible { visible } => {
                handlers::view::set_overlay_visible(state, visible)
            }

            // === Kontrollpunkt-Editing ===
            AppCommand::UpdatePointer { scene_pos } => {
                handlers::editing::update_pointer(state, scene_pos)
            }
            AppCommand::PickControlPoint {
                scene_pos,
                max_distance,
            } => handlers::editing::pick(state, scene_pos, max_distance),
            AppCommand::ReleaseControlPoint { scene_pos } => {
                handlers::editing::release(state, scene_pos)
            }
            AppCommand::ResetControlPoints => handlers::editing::reset(state),

            // === Animation ===
            AppCommand::AdvanceAnimation => handlers::animation::advance(state),
            AppCommand::SetAnimationPaused { paused } => {
                handlers::animation::set_paused(state, paused)
            }
        }

        Ok(())
    }

    /// Wendet alle Intents eines Frames an und baut danach die Render-Szene.
    ///
    /// Fehler einzelner Intents werden geloggt; die übrigen laufen weiter.
    pub fn process_frame(&mut self, state: &mut AppState, intents: Vec<AppIntent>) -> RenderScene {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }

        self.build_render_scene(state)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
