//! Benchmarks for the bubble simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use bubbly::{Bubble, BubbleConfig, Deformation, NoOpBubbleObserver, PointerEvent, Vec2};

fn press(id: i32, x: f32, y: f32, t: f32) -> PointerEvent<f32> {
    PointerEvent { pointer_id: id, x, y, time_ms: t }
}

fn bench_throw_and_settle(c: &mut Criterion) {
    c.bench_function("throw_and_settle_full", |b| {
        b.iter(|| {
            let mut bubble = Bubble::new_at(
                BubbleConfig::new(),
                800.0,
                600.0,
                Vec2::new(100.0, 100.0),
            )
            .unwrap();
            let mut obs = NoOpBubbleObserver;
            bubble.pointer_down(press(1, 100.0, 100.0, 0.0), &mut obs);
            bubble.pointer_move(press(1, 118.0, 92.0, 16.0));
            bubble.pointer_up(1, &mut obs);
            let mut ticks = 0usize;
            while bubble.is_active() && ticks < 5000 {
                bubble.tick(&mut obs);
                ticks += 1;
            }
            (bubble.position(), ticks)
        });
    });
}

fn bench_settling_ticks(c: &mut Criterion) {
    c.bench_function("settling_1000_ticks", |b| {
        b.iter(|| {
            let mut bubble = Bubble::new_at(
                BubbleConfig::new().with_rest_epsilon(0.0),
                800.0,
                600.0,
                Vec2::new(100.0, 100.0),
            )
            .unwrap();
            let mut obs = NoOpBubbleObserver;
            bubble.pointer_down(press(1, 100.0, 100.0, 0.0), &mut obs);
            bubble.pointer_move(press(1, 115.0, 95.0, 16.0));
            bubble.pointer_up(1, &mut obs);
            for _ in 0..1000 {
                bubble.tick(&mut obs);
            }
            bubble.position()
        });
    });
}

fn bench_deformation(c: &mut Criterion) {
    c.bench_function("deformation_10000_velocities", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..10_000 {
                let v = Vec2::new((i % 41) as f32 - 20.0, (i % 29) as f32 - 14.0);
                let d = Deformation::from_velocity(v);
                acc += d.scale_x;
            }
            acc
        });
    });
}

criterion_group!(benches, bench_throw_and_settle, bench_settling_ticks, bench_deformation);
criterion_main!(benches);
