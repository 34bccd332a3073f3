//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::ControlPointRole;

/// Geglättete Frame-Zeit für die FPS-Anzeige.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    smoothed_dt: Option<f32>,
}

impl FrameTimer {
    const SMOOTHING: f32 = 0.1;

    /// Nimmt die Dauer des letzten Frames (Sekunden) auf.
    pub fn record(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.smoothed_dt = Some(match self.smoothed_dt {
            Some(prev) => prev + (dt - prev) * Self::SMOOTHING,
            None => dt,
        });
    }

    /// Frames pro Sekunde, sobald mindestens ein Frame gemessen wurde.
    pub fn fps(&self) -> Option<f32> {
        self.smoothed_dt.map(|dt| 1.0 / dt)
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, timer: &FrameTimer) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let pose = &state.animation.pose;
            ui.label(format!(
                "Kurve: {}/{} | Frame: {} | Skalierung: {:.2}",
                pose.curve_index,
                crate::core::BezierCurve::last_index(),
                pose.frame_index + 1,
                pose.scale_factor
            ));

            ui.separator();

            ui.label(format!(
                "Durchläufe: {}",
                state.animation.completed_traversals
            ));

            ui.separator();

            match state.selection.selected_point.zip(state.selected_point_position()) {
                Some((index, pos)) => {
                    let role = ControlPointRole::from_index(index)
                        .map(ControlPointRole::label)
                        .unwrap_or("?");
                    ui.label(format!(
                        "Gegriffen: P{} ({}) ({:.3}, {:.3})",
                        index, role, pos.x, pos.y
                    ));
                }
                None => {
                    ui.label("Gegriffen: –");
                }
            }

            ui.separator();
            ui.label(last_action_text(state));

            if state.animation.paused {
                ui.separator();
                ui.label(egui::RichText::new("⏸ Pausiert").color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(fps) = timer.fps() {
                    ui.label(format!("{:.0} FPS", fps));
                }
            });
        });
    });
}

/// Text für die zuletzt ausgeführte Benutzer-Aktion (Frame-Ticks zählen nicht).
pub fn last_action_text(state: &AppState) -> String {
    match state.command_log.last_user_command() {
        Some(command) => format!("Letzte Aktion: {}", command.label()),
        None => "Letzte Aktion: –".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppCommand;
    use approx::assert_relative_eq;

    #[test]
    fn test_last_action_ignores_frame_ticks() {
        let mut state = AppState::new();
        assert_eq!(last_action_text(&state), "Letzte Aktion: –");

        state.command_log.record(&AppCommand::ResetControlPoints);
        state.command_log.record(&AppCommand::AdvanceAnimation);

        assert_eq!(last_action_text(&state), "Letzte Aktion: Zurücksetzen");
    }

    #[test]
    fn test_timer_without_samples_has_no_fps() {
        assert!(FrameTimer::default().fps().is_none());
    }

    #[test]
    fn test_timer_converges_towards_frame_rate() {
        let mut timer = FrameTimer::default();
        timer.record(1.0 / 30.0);
        for _ in 0..200 {
            timer.record(1.0 / 60.0);
        }
        let fps = timer.fps().expect("FPS nach Messungen vorhanden");
        assert_relative_eq!(fps, 60.0, max_relative = 0.01);
    }

    #[test]
    fn test_timer_ignores_invalid_durations() {
        let mut timer = FrameTimer::default();
        timer.record(0.0);
        timer.record(f32::NAN);
        assert!(timer.fps().is_none());
    }
}
