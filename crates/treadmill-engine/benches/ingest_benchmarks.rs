//! Engine Benchmarks
//!
//! Criterion benchmarks for the producer and reader hot paths.

use criterion::{Criterion, criterion_group, criterion_main};
use treadmill_engine::prelude::*;

fn bench_ingest(c: &mut Criterion) {
    let Ok(engine) = TreadmillEngine::new(TreadmillConfig::default()) else {
        return;
    };
    let mut angle = 0.0f32;

    c.bench_function("ingest", |b| {
        b.iter(|| {
            angle = (angle + 1.0) % 360.0;
            engine.ingest_at(std::hint::black_box(angle), 200, 40, 0)
        })
    });
}

fn bench_apply_policy(c: &mut Criterion) {
    let Ok(engine) = TreadmillEngine::new(TreadmillConfig::default()) else {
        return;
    };
    engine.ingest_at(90.0, 127, 0, 0);
    let host = ChannelState::new(Vec2::new(0.1, 0.1), true);

    c.bench_function("apply_policy", |b| {
        b.iter(|| engine.apply_policy(std::hint::black_box(host), None))
    });
}

fn bench_read_smoothed_state(c: &mut Criterion) {
    let Ok(engine) = TreadmillEngine::new(TreadmillConfig::default()) else {
        return;
    };
    engine.ingest_at(90.0, 127, 0, 0);

    c.bench_function("read_smoothed_state", |b| {
        b.iter(|| std::hint::black_box(engine.read_smoothed_state()))
    });
}

criterion_group!(
    benches,
    bench_ingest,
    bench_apply_policy,
    bench_read_smoothed_state
);
criterion_main!(benches);
