//! Trackball projection and drag throughput.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use volview::camera::TrackballController;

fn projection_benchmark(c: &mut Criterion) {
    let trackball = TrackballController::new(1920, 1080);
    c.bench_function("hemisphere_projection", |b| {
        b.iter(|| black_box(trackball.project(black_box(700.0), black_box(300.0))))
    });
}

fn drag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");

    group.bench_function("update", |b| {
        let mut trackball = TrackballController::new(1920, 1080);
        trackball.begin_drag(960.0, 540.0);
        let mut x = 960.0_f32;
        b.iter(|| {
            x = if x > 1900.0 { 0.0 } else { x + 3.0 };
            trackball.update_drag(black_box(x), black_box(500.0));
            black_box(trackball.current_rotation())
        })
    });

    group.bench_function("gesture", |b| {
        let mut trackball = TrackballController::new(1920, 1080);
        b.iter(|| {
            trackball.begin_drag(black_box(900.0), black_box(500.0));
            trackball.update_drag(black_box(950.0), black_box(520.0));
            trackball.end_drag(black_box(1000.0), black_box(540.0));
            black_box(trackball.current_rotation())
        })
    });

    group.finish();
}

criterion_group!(benches, projection_benchmark, drag_benchmark);
criterion_main!(benches);
