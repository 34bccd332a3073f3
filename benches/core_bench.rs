use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fox_run::app::build_render_scene;
use fox_run::{AppController, AppIntent, AppState, BezierCurve, ControlPoints};
use glam::Vec2;
use std::hint::black_box;

fn bench_curve_rebuild(c: &mut Criterion) {
    let points = ControlPoints::initial();

    c.bench_function("curve_rebuild_151_samples", |b| {
        b.iter(|| {
            let curve = BezierCurve::from_control_points(black_box(&points));
            black_box(curve.sample(75))
        })
    });
}

fn bench_frame_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_path");

    for &frames in &[1usize, 100usize] {
        group.bench_with_input(
            BenchmarkId::new("advance_and_build_scene", frames),
            &frames,
            |b, &frames| {
                let mut controller = AppController::new();
                let mut state = AppState::new();
                b.iter(|| {
                    for _ in 0..frames {
                        controller
                            .handle_intent(&mut state, AppIntent::FrameAdvanced)
                            .expect("FrameAdvanced failed");
                    }
                    black_box(build_render_scene(&state).sprite.curve_index)
                })
            },
        );
    }

    group.finish();
}

fn bench_drag_updates(c: &mut Criterion) {
    c.bench_function("drag_100_pointer_moves", |b| {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        b.iter(|| {
            controller
                .handle_intent(
                    &mut state,
                    AppIntent::PrimaryPressed {
                        screen_pos: Vec2::new(198.0, 108.0),
                    },
                )
                .expect("PrimaryPressed failed");
            for step in 0..100 {
                let offset = step as f32;
                controller
                    .handle_intent(
                        &mut state,
                        AppIntent::PointerMoved {
                            screen_pos: Vec2::new(198.0 + offset, 108.0 + offset),
                        },
                    )
                    .expect("PointerMoved failed");
            }
            controller
                .handle_intent(
                    &mut state,
                    AppIntent::PrimaryReleased {
                        screen_pos: Vec2::new(198.0, 108.0),
                    },
                )
                .expect("PrimaryReleased failed");
            black_box(state.curve_revision)
        })
    });
}

criterion_group!(
    core_benches,
    bench_curve_rebuild,
    bench_frame_path,
    bench_drag_updates
);
criterion_main!(core_benches);
