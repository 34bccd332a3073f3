use fox_run::core::control_points::INITIAL_CONTROL_POINTS;
use fox_run::{AppCommand, AppController, AppIntent, AppState, BezierCurve};
use glam::Vec2;
use std::collections::BTreeSet;

fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [720.0, 720.0],
                pixels_per_point: 1.0,
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn advance(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::FrameAdvanced)
        .expect("FrameAdvanced sollte ohne Fehler durchlaufen");
}

#[test]
fn test_drag_gesture_moves_handle_and_rebuilds_curve() {
    let (mut controller, mut state) = setup();
    let initial_mid = state.curve.sample(75);

    // P1 (-0.45, 0.7) liegt bei Pixel (198, 108)
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                screen_pos: Vec2::new(198.0, 108.0),
            },
        )
        .expect("PrimaryPressed");
    assert_eq!(state.selection.selected_point, Some(1));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(300.0, 200.0),
            },
        )
        .expect("PointerMoved");
    let dragged = state.control_points.get(1).expect("P1");
    assert!((dragged - Vec2::new(300.0 / 360.0 - 1.0, 1.0 - 200.0 / 360.0)).length() < 1e-5);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryReleased {
                screen_pos: Vec2::new(360.0, 360.0),
            },
        )
        .expect("PrimaryReleased");

    assert_eq!(state.selection.selected_point, None);
    assert_eq!(state.control_points.get(1), Some(Vec2::ZERO));
    assert_eq!(state.curve.sample(0), INITIAL_CONTROL_POINTS[0]);
    assert_eq!(
        state.curve.sample(BezierCurve::last_index()),
        INITIAL_CONTROL_POINTS[3]
    );
    assert_ne!(state.curve.sample(75), initial_mid);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.curve_revision, state.curve_revision);
    assert_eq!(scene.selected_point, None);
}

#[test]
fn test_press_on_empty_area_keeps_points() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                screen_pos: Vec2::new(700.0, 20.0),
            },
        )
        .expect("PrimaryPressed");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(650.0, 40.0),
            },
        )
        .expect("PointerMoved");

    assert_eq!(state.selection.selected_point, None);
    assert_eq!(state.control_points.as_array(), &INITIAL_CONTROL_POINTS);
    assert_eq!(state.curve_revision, 0);
}

#[test]
fn test_curve_index_wraps_and_resets_scale_time() {
    let (mut controller, mut state) = setup();
    let last = BezierCurve::last_index();

    let mut reached_end = false;
    let mut wrapped = false;
    for _ in 0..10_000 {
        advance(&mut controller, &mut state);
        let index = state.animation.pose.curve_index;
        if index == last {
            reached_end = true;
            assert_eq!(state.animation.clock.scale_time, 0.0);
        } else if reached_end && index == 0 {
            wrapped = true;
            break;
        }
    }

    assert!(reached_end, "Kurvenende wurde nie erreicht");
    assert!(wrapped, "Kurven-Index ist nicht auf 0 umgebrochen");
    assert_eq!(state.animation.completed_traversals, 1);
    assert!(state.animation.clock.scale_time < 0.001);
}

#[test]
fn test_frame_index_cycles_through_all_frames() {
    let (mut controller, mut state) = setup();
    let mut seen = BTreeSet::new();

    for _ in 0..600 {
        advance(&mut controller, &mut state);
        seen.insert(state.animation.pose.frame_index);
    }

    assert_eq!(seen, (0..13).collect::<BTreeSet<_>>());
}

#[test]
fn test_pause_stops_clock_but_not_editing() {
    let (mut controller, mut state) = setup();
    advance(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::TogglePauseRequested)
        .expect("TogglePauseRequested");
    let ticks = state.animation.clock.ticks;
    for _ in 0..10 {
        advance(&mut controller, &mut state);
    }
    assert_eq!(state.animation.clock.ticks, ticks);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                screen_pos: Vec2::new(198.0, 108.0),
            },
        )
        .expect("PrimaryPressed");
    assert_eq!(state.selection.selected_point, Some(1));

    controller
        .handle_intent(&mut state, AppIntent::TogglePauseRequested)
        .expect("TogglePauseRequested");
    advance(&mut controller, &mut state);
    assert_eq!(state.animation.clock.ticks, ticks + 1);
}

#[test]
fn test_every_command_is_logged_in_order() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::ToggleOverlayRequested)
        .expect("ToggleOverlayRequested");
    advance(&mut controller, &mut state);

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], AppCommand::SetViewportSize { .. }));
    assert_eq!(entries[1], AppCommand::SetOverlayVisible { visible: false });
    assert_eq!(entries[2], AppCommand::AdvanceAnimation);
    assert_eq!(
        state.command_log.last_user_command(),
        Some(&AppCommand::SetOverlayVisible { visible: false })
    );
}

fn sprite_on_curve(controller: &AppController, state: &AppState) -> bool {
    let scene = controller.build_render_scene(state);
    scene.sprite.position == scene.curve.sample(scene.sprite.curve_index)
}

#[test]
fn test_editing_while_paused_keeps_sprite_on_curve() {
    let (mut controller, mut state) = setup();
    for _ in 0..3000 {
        advance(&mut controller, &mut state);
    }
    controller
        .handle_intent(&mut state, AppIntent::TogglePauseRequested)
        .expect("TogglePauseRequested");
    let index_before = state.animation.pose.curve_index;

    let gesture = [
        AppIntent::PrimaryPressed {
            screen_pos: Vec2::new(198.0, 108.0),
        },
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(600.0, 650.0),
        },
    ];
    for intent in gesture {
        controller.handle_intent(&mut state, intent).expect("Drag");
    }
    assert!(sprite_on_curve(&controller, &state), "Sprite neben Kurve beim Ziehen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryReleased {
                screen_pos: Vec2::new(600.0, 650.0),
            },
        )
        .expect("PrimaryReleased");
    for _ in 0..5 {
        advance(&mut controller, &mut state);
    }

    assert_eq!(state.animation.pose.curve_index, index_before);
    assert!(sprite_on_curve(&controller, &state), "Sprite neben Kurve nach Loslassen");

    controller
        .handle_intent(&mut state, AppIntent::ResetControlPointsRequested)
        .expect("ResetControlPointsRequested");
    assert!(sprite_on_curve(&controller, &state), "Sprite neben Kurve nach Reset");
}

#[test]
fn test_frame_scene_reflects_intents_of_same_frame() {
    let (mut controller, mut state) = setup();

    let scene = controller.process_frame(
        &mut state,
        vec![
            AppIntent::PrimaryPressed {
                screen_pos: Vec2::new(198.0, 108.0),
            },
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(300.0, 200.0),
            },
            AppIntent::FrameAdvanced,
        ],
    );

    assert_eq!(state.animation.clock.ticks, 1);
    assert_eq!(scene.curve_revision, state.curve_revision);
    assert_eq!(scene.curve_revision, 1);
    assert_eq!(scene.selected_point, Some(1));
    assert_eq!(scene.control_points, state.control_points);
    assert_eq!(scene.sprite, state.animation.pose);
}
