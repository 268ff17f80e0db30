//! Criterion benchmarks for the Cayley–Menger volume.
//!
//! Compares the length-only volume with the coordinate (Gram) volume on
//! seeded random tetrahedra.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tetrabook::samplers::{draw_edge_lengths, draw_points, ReplayToken};
use tetrabook::tetra::{compute, tetra_volume_from_points};
use tetrabook::VolumeCfg;

fn bench_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("tetra_volume");
    let mut tok = ReplayToken::new(123, 0);
    group.bench_function("cayley_menger", |b| {
        b.iter_batched(
            || {
                tok = tok.next();
                draw_edge_lengths(tok, 1.0)
            },
            |edges| {
                let _ = black_box(compute(&edges, VolumeCfg::default()));
            },
            BatchSize::SmallInput,
        );
    });
    let mut tok = ReplayToken::new(456, 0);
    group.bench_function("gram_from_points", |b| {
        b.iter_batched(
            || {
                tok = tok.next();
                draw_points(tok, 1.0)
            },
            |pts| {
                black_box(tetra_volume_from_points(pts));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_volume);
criterion_main!(benches);
