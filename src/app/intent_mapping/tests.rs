use crate::app::{AppCommand, AppIntent, AppState};
use approx::assert_relative_eq;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn pointer_moved_maps_to_scene_space_with_flipped_y() {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 400.0];

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(200.0, 100.0),
        },
    );

    assert_eq!(commands.len(), 1);
    let AppCommand::UpdatePointer { scene_pos } = commands[0] else {
        panic!("UpdatePointer erwartet, erhalten: {:?}", commands[0]);
    };
    assert_relative_eq!(scene_pos.x, -0.5);
    assert_relative_eq!(scene_pos.y, 0.5);
}

#[test]
fn primary_pressed_carries_pick_radius_of_current_viewport() {
    let mut state = AppState::new();
    state.view.viewport_size = [1000.0, 500.0];

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            screen_pos: Vec2::new(500.0, 250.0),
        },
    );

    assert_eq!(commands.len(), 1);
    let AppCommand::PickControlPoint {
        scene_pos,
        max_distance,
    } = commands[0]
    else {
        panic!("PickControlPoint erwartet, erhalten: {:?}", commands[0]);
    };
    assert_relative_eq!(scene_pos.x, 0.0);
    assert_relative_eq!(scene_pos.y, 0.0);
    assert_relative_eq!(max_distance, 10.0 / 500.0);
}

#[test]
fn toggle_intents_invert_current_flags() {
    let mut state = AppState::new();
    state.view.show_overlay = true;
    state.animation.paused = true;

    let overlay = map_intent_to_commands(&state, AppIntent::ToggleOverlayRequested);
    let pause = map_intent_to_commands(&state, AppIntent::TogglePauseRequested);

    assert_eq!(overlay, vec![AppCommand::SetOverlayVisible { visible: false }]);
    assert_eq!(pause, vec![AppCommand::SetAnimationPaused { paused: false }]);
}

#[test]
fn frame_advanced_maps_to_single_advance_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced);

    assert_eq!(commands, vec![AppCommand::AdvanceAnimation]);
}
