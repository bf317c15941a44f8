//! CPU cost of the spiral math mirrored from the shader.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use phyllo::animation::PointPulse;
use phyllo::options::PulseOptions;
use phyllo::spiral::{layout_vertex, shade, FrameUniforms};

fn pulse_benchmark(c: &mut Criterion) {
    let pulse = PointPulse::new(5000, &PulseOptions::default());
    let _ = c.bench_function("pulse_point_count", |b| {
        b.iter(|| black_box(pulse.point_count(black_box(1234.5))))
    });
}

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_and_shade");

    for count in [1152_u32, 4325] {
        let uniforms = FrameUniforms {
            point_count: count as f32,
            ..FrameUniforms::new(1920, 1080, 2.0)
        };
        let _ = group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| {
                for i in 0..count {
                    let v = layout_vertex(i, black_box(Vec2::ZERO), &uniforms);
                    let _ = black_box(shade(&v));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, pulse_benchmark, layout_benchmark);
criterion_main!(benches);
