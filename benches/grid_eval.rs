//! Benchmarks for hashing and grid generation

use alice_spacehash::hash::hash_lattice;
use alice_spacehash::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    group.throughput(Throughput::Elements(4));

    group.bench_function("scalar_x4", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for i in 0..4 {
                acc ^= hash_lattice(black_box(7), i, black_box(-3), black_box(12));
            }
            acc
        })
    });

    group.bench_function("batch4", |b| {
        b.iter(|| {
            HashBatch4::seed(black_box(7))
                .eat_ints(black_box([0, 1, 2, 3]))
                .eat_ints(black_box([-3; 4]))
                .eat_ints(black_box([12; 4]))
                .finalize()
        })
    });

    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let resolution = 256;
    group.throughput(Throughput::Elements(4));

    for shape in Shape::ALL {
        group.bench_with_input(BenchmarkId::new("evaluate", shape), &shape, |b, &shape| {
            b.iter(|| shape.evaluate(black_box(1000), resolution))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    let world = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 1.0, 3.0),
        Quat::from_rotation_y(0.7),
        Vec3::new(1.0, 0.0, -4.0),
    );

    for resolution in [64u32, 256, 1024] {
        let config = GridConfig::new(resolution, Shape::OctoSphere)
            .with_world_transform(world)
            .with_domain(DomainTransform::from_scale(16.0));
        group.throughput(Throughput::Elements((resolution * resolution) as u64));

        group.bench_with_input(BenchmarkId::new("parallel", resolution), &config, |b, config| {
            b.iter(|| generate(black_box(config)))
        });

        group.bench_with_input(BenchmarkId::new("sequential", resolution), &config, |b, config| {
            b.iter(|| generate_sequential(black_box(config)))
        });
    }

    group.finish();
}

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice");
    for resolution in [64u32, 512] {
        group.throughput(Throughput::Elements((resolution * resolution) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(resolution), &resolution, |b, &r| {
            b.iter(|| lattice_hashes(black_box(r), 0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hash, bench_shapes, bench_generate, bench_lattice);
criterion_main!(benches);
