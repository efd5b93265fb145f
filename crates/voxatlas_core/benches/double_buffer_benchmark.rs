//! Benchmark for frame-state publication.
//!
//! TARGET: snapshot of a camera-sized value well under 100ns
//!
//! Run with: cargo bench --package voxatlas_core --bench double_buffer_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voxatlas_core::DoubleBuffered;

fn benchmark_snapshot(c: &mut Criterion) {
    let buffer = DoubleBuffered::new([[1.0f32; 4]; 4]);

    c.bench_function("snapshot_mat4", |b| {
        b.iter(|| black_box(buffer.snapshot()));
    });
}

fn benchmark_publish(c: &mut Criterion) {
    let buffer = DoubleBuffered::new([[0.0f32; 4]; 4]);

    c.bench_function("publish_mat4", |b| {
        let mut value = 0.0f32;
        b.iter(|| {
            value += 1.0;
            buffer.publish(black_box([[value; 4]; 4]));
        });
    });
}

criterion_group!(benches, benchmark_snapshot, benchmark_publish);
criterion_main!(benches);
