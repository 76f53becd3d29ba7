//! Cache construction and redraw timings.
#![allow(missing_docs)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forcevis::engine::FrameChangeController;
use forcevis::field::TrajectoryCache;
use forcevis::host::recording::RecordingHost;
use forcevis::palette::Palette;
use forcevis::renderer::ArrowRenderer;
use forcevis::trajectory::Trajectory;
use glam::Vec3;

fn synthetic(frames: usize, atoms: usize, phase: f32) -> Trajectory {
    let frames = (0..frames)
        .map(|f| {
            (0..atoms)
                .map(|a| {
                    let t = (f * atoms + a) as f32 * 0.01 + phase;
                    Vec3::new(t.sin(), t.cos(), (t * 0.5).sin())
                })
                .collect()
        })
        .collect();
    Trajectory::from_frames(frames).unwrap_or_default()
}

fn cache_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_build");
    for atoms in [100, 1000, 5000] {
        let reference = synthetic(50, atoms, 0.0);
        let series = [synthetic(50, atoms, 1.0), synthetic(50, atoms, 2.0)];
        group.bench_function(format!("{atoms}_atoms_50_frames"), |b| {
            b.iter(|| black_box(TrajectoryCache::build(&reference, &series)))
        });
    }
    group.finish();
}

fn redraw_benchmark(c: &mut Criterion) {
    let reference = synthetic(10, 2000, 0.0);
    let series = [synthetic(10, 2000, 1.0), synthetic(10, 2000, 2.0)];
    let Ok(cache) = TrajectoryCache::build(&reference, &series) else {
        return;
    };
    let mut controller = FrameChangeController::new(
        Arc::new(cache),
        ArrowRenderer::default(),
        Palette::default(),
    );
    let mut host = RecordingHost::default();
    let mut frame = 0;

    c.bench_function("redraw_2000_atoms_2_series", |b| {
        b.iter(|| {
            frame = (frame + 1) % 10;
            black_box(controller.redraw(&mut host, frame))
        })
    });
}

criterion_group!(benches, cache_build_benchmark, redraw_benchmark);
criterion_main!(benches);
