//! Benchmarks for shader generation and CPU-side animation throughput.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use orbfx::prelude::*;

fn bench_shader_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("shader_source");
    let theme = ThemeId::Spartan.theme();
    let mut rng = SmallRng::seed_from_u64(1);

    let orb = OrbBody::new(1.5, &theme);
    group.bench_function("orb", |b| b.iter(|| black_box(orb.shader_source())));

    let glow = GlowShell::new(1.5, &theme);
    group.bench_function("glow", |b| b.iter(|| black_box(glow.shader_source())));

    let rings = RingEnsemble::new(3, &theme, &mut rng);
    group.bench_function("ring", |b| b.iter(|| black_box(rings.shader_source(1))));

    let field = ParticleField::new(16, 1.5, &theme, SmallRng::seed_from_u64(2)).unwrap();
    group.bench_function("particles", |b| {
        b.iter(|| black_box(field.shader_source()))
    });

    group.finish();
}

fn bench_field_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_advance");
    let theme = ThemeId::Spartan.theme();

    for count in [2_000u32, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let mut field =
                ParticleField::new(count, 1.5, &theme, SmallRng::seed_from_u64(3)).unwrap();
            b.iter(|| {
                field.advance(black_box(0.016));
            })
        });
    }

    group.finish();
}

fn bench_full_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("halo_update");

    let mut halo = HaloOrbConfig::new()
        .with_seed(4)
        .build(&ThemeId::Covenant.theme())
        .unwrap();
    group.bench_function("default_ensemble", |b| {
        b.iter(|| {
            halo.update(black_box(0.016));
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_shader_sources,
    bench_field_advance,
    bench_full_update,
);
criterion_main!(benches);
