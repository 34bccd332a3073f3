//! Toolbar für Overlay, Pause und Reset.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(state.view.show_overlay, "Overlay (O)")
                .on_hover_text("Kurve, Kontrollpolygon und Punkte ein-/ausblenden")
                .clicked()
            {
                events.push(AppIntent::ToggleOverlayRequested);
            }

            let pause_label = if state.animation.paused {
                "▶ Weiter (Space)"
            } else {
                "⏸ Pause (Space)"
            };
            if ui
                .selectable_label(state.animation.paused, pause_label)
                .clicked()
            {
                events.push(AppIntent::TogglePauseRequested);
            }

            ui.separator();

            if ui
                .button("Punkte zurücksetzen (R)")
                .on_hover_text("Stellt die vier Start-Kontrollpunkte wieder her")
                .clicked()
            {
                events.push(AppIntent::ResetControlPointsRequested);
            }
        });
    });

    events
}
