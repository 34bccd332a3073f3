use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_events(events_in: Vec<egui::Event>, modifiers: egui::Modifiers) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = modifiers;
    raw_input.events = events_in;

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn test_space_toggles_pause() {
    let events = collect_with_events(
        vec![key_event(egui::Key::Space, egui::Modifiers::default())],
        egui::Modifiers::default(),
    );

    assert_eq!(events, vec![AppIntent::TogglePauseRequested]);
}

#[test]
fn test_o_toggles_overlay() {
    let events = collect_with_events(
        vec![key_event(egui::Key::O, egui::Modifiers::default())],
        egui::Modifiers::default(),
    );

    assert_eq!(events, vec![AppIntent::ToggleOverlayRequested]);
}

#[test]
fn test_r_resets_control_points() {
    let events = collect_with_events(
        vec![key_event(egui::Key::R, egui::Modifiers::default())],
        egui::Modifiers::default(),
    );

    assert_eq!(events, vec![AppIntent::ResetControlPointsRequested]);
}

#[test]
fn test_command_modifier_suppresses_shortcuts() {
    let events = collect_with_events(
        vec![key_event(egui::Key::R, egui::Modifiers::COMMAND)],
        egui::Modifiers::COMMAND,
    );

    assert!(events.is_empty());
}

#[test]
fn test_other_keys_emit_nothing() {
    let events = collect_with_events(
        vec![key_event(egui::Key::A, egui::Modifiers::default())],
        egui::Modifiers::default(),
    );

    assert!(events.is_empty());
}
