//! Resolver hot-path benchmark: one call per content-size change, so it
//! should stay trivially cheap.
//!
//! Run with: cargo bench -p adaptui-core --bench resolve_bench

use adaptui_core::{SHADOW_OFFSET, resolve};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve/under_limit", |b| {
        b.iter(|| resolve(black_box(200.0), black_box(450.0), black_box(0.0)))
    });

    c.bench_function("resolve/over_limit", |b| {
        b.iter(|| resolve(black_box(600.0), black_box(450.0), black_box(SHADOW_OFFSET)))
    });

    c.bench_function("resolve/measurement_sweep", |b| {
        b.iter(|| {
            for height in 1..=512 {
                black_box(resolve(f64::from(height), 450.0, 0.0));
            }
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
