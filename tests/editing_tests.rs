use fox_run::core::control_points::INITIAL_CONTROL_POINTS;
use fox_run::{AppController, AppIntent, AppState};
use glam::Vec2;

/// Rechnet eine Szenenposition in Pixel eines 720×720-Viewports um.
fn to_screen(scene: Vec2) -> Vec2 {
    Vec2::new((scene.x * 0.5 + 0.5) * 720.0, (0.5 - scene.y * 0.5) * 720.0)
}

fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [720.0, 720.0],
                pixels_per_point: 2.0,
            },
        )
        .expect("ViewportResized");
    (controller, state)
}

fn press(controller: &mut AppController, state: &mut AppState, scene: Vec2) {
    controller
        .handle_intent(
            state,
            AppIntent::PrimaryPressed {
                screen_pos: to_screen(scene),
            },
        )
        .expect("PrimaryPressed");
}

#[test]
fn test_jitter_at_same_pixel_does_not_rebuild() {
    let (mut controller, mut state) = setup();
    press(&mut controller, &mut state, INITIAL_CONTROL_POINTS[2]);
    assert_eq!(state.selection.selected_point, Some(2));

    let target = Vec2::new(400.0, 300.0);
    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { screen_pos: target })
        .expect("PointerMoved");
    let revision = state.curve_revision;

    for _ in 0..5 {
        controller
            .handle_intent(&mut state, AppIntent::PointerMoved { screen_pos: target })
            .expect("PointerMoved");
    }

    assert_eq!(state.curve_revision, revision);
}

#[test]
fn test_overlapping_points_pick_lower_index() {
    let (mut controller, mut state) = setup();
    state.control_points.set(3, Vec2::new(0.2, 0.2));
    state.control_points.set(1, Vec2::new(0.2, 0.2));
    state.rebuild_curve();

    press(&mut controller, &mut state, Vec2::new(0.2, 0.2));

    assert_eq!(state.selection.selected_point, Some(1));
}

#[test]
fn test_pick_radius_is_point_size_over_min_dimension() {
    let (mut controller, mut state) = setup();
    let p2 = INITIAL_CONTROL_POINTS[2];

    // Radius 10 / 720 Szeneneinheiten entspricht 5 Pixeln bei 720 Pixeln Breite
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                screen_pos: to_screen(p2) + Vec2::new(2.0, 0.0),
            },
        )
        .expect("PrimaryPressed");
    assert_eq!(state.selection.selected_point, Some(2));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryReleased {
                screen_pos: to_screen(p2),
            },
        )
        .expect("PrimaryReleased");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                screen_pos: to_screen(p2) + Vec2::new(0.0, 20.0),
            },
        )
        .expect("PrimaryPressed");
    assert_eq!(state.selection.selected_point, None);
}

#[test]
fn test_reset_during_drag_restores_points_and_ends_drag() {
    let (mut controller, mut state) = setup();
    press(&mut controller, &mut state, INITIAL_CONTROL_POINTS[0]);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointerMoved");
    assert_ne!(state.control_points.as_array(), &INITIAL_CONTROL_POINTS);

    controller
        .handle_intent(&mut state, AppIntent::ResetControlPointsRequested)
        .expect("ResetControlPointsRequested");

    assert_eq!(state.control_points.as_array(), &INITIAL_CONTROL_POINTS);
    assert_eq!(state.selection.selected_point, None);

    // Weitere Bewegungen verschieben nichts mehr
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerMoved");
    assert_eq!(state.control_points.as_array(), &INITIAL_CONTROL_POINTS);
}

#[test]
fn test_overlay_toggle_reaches_render_scene() {
    let (mut controller, mut state) = setup();
    assert!(controller.build_render_scene(&state).show_overlay);

    controller
        .handle_intent(&mut state, AppIntent::ToggleOverlayRequested)
        .expect("ToggleOverlayRequested");
    assert!(!controller.build_render_scene(&state).show_overlay);

    controller
        .handle_intent(&mut state, AppIntent::ToggleOverlayRequested)
        .expect("ToggleOverlayRequested");
    assert!(controller.build_render_scene(&state).show_overlay);
}

#[test]
fn test_render_scene_uses_physical_pixels() {
    let (controller, state) = setup();

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.viewport_size, [720.0, 720.0]);
    assert_eq!(scene.target_size_px, [1440, 1440]);
}
