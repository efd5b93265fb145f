//! Benchmark for the CPU shading stages.
//!
//! TARGET: a full fragment (classify + atlas + sample) well under 50ns
//!
//! Run with: cargo bench --package voxatlas_rendering --bench shading_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec3, Vec4};
use voxatlas_rendering::shading::{
    atlas_coord, shade_fragment, CpuTextureArray, FaceOrientation, FragmentInput, TextureLayer,
};
use voxatlas_rendering::SamplerConfig;

fn benchmark_classify(c: &mut Criterion) {
    let normals = [Vec3::X, Vec3::NEG_Y, Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO];

    c.bench_function("classify_4_normals", |b| {
        b.iter(|| {
            for n in &normals {
                black_box(FaceOrientation::classify(black_box(*n)));
            }
        });
    });
}

fn benchmark_atlas(c: &mut Criterion) {
    let p = Vec3::new(-12.75, 3.125, 0.4);

    c.bench_function("atlas_coord_all_faces", |b| {
        b.iter(|| {
            for face in FaceOrientation::PRIORITY {
                black_box(atlas_coord(face, black_box(p)).uv());
            }
        });
    });
}

fn benchmark_shade(c: &mut Criterion) {
    let rgba: Vec<u8> = (0..16 * 16 * 4).map(|i| (i % 251) as u8).collect();
    let layer = TextureLayer::from_rgba8(16, 16, &rgba).expect("16x16 layer");
    let textures = CpuTextureArray::new(vec![layer, TextureLayer::solid(Vec4::ONE)]);
    let sampler = SamplerConfig::default();
    let input = FragmentInput {
        world_position: Vec3::new(3.5, -1.0, 0.25),
        world_normal: Vec3::new(0.0, 0.0, -1.0),
        color: Vec3::new(0.2, 0.4, 0.6),
        texture_index: 0,
    };

    c.bench_function("shade_fragment", |b| {
        b.iter(|| black_box(shade_fragment(black_box(&input), &textures, &sampler)));
    });
}

criterion_group!(benches, benchmark_classify, benchmark_atlas, benchmark_shade);
criterion_main!(benches);
