//! Keyboard-Shortcuts für den Viewport.
//!
//! `Space` pausiert, `O` schaltet das Overlay, `R` setzt die Kontrollpunkte zurück.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Shortcuts nicht auslösen, solange ein Widget den Fokus hat
    if ui.ctx().memory(|m| m.focused().is_some()) {
        return events;
    }

    let (modifiers, space, key_o, key_r) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::R),
        )
    });

    if modifiers.command || modifiers.alt {
        return events;
    }

    if space {
        events.push(AppIntent::TogglePauseRequested);
    }
    if key_o {
        events.push(AppIntent::ToggleOverlayRequested);
    }
    if key_r {
        events.push(AppIntent::ResetControlPointsRequested);
    }

    events
}

#[cfg(test)]
mod tests;
