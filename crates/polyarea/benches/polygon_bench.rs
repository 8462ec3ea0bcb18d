//! Criterion benchmarks for hull construction, simplicity checks and greedy
//! augmentation.
//! Focus sizes: hull n in {100, 1000, 10000}; optimizer n in {20, 50, 100}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polyarea

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyarea::geom::{convex_hull, is_simple};
use polyarea::optimize::{augment_hull, Objective, OptimizeCfg};
use polyarea::sample::{draw_points, GridCfg, ReplayToken};
use polyarea::Point;

fn instance(count: usize, seed: u64) -> Vec<Point> {
    let cfg = GridCfg {
        count,
        side: 100_000,
        even: true,
    };
    draw_points(cfg, ReplayToken { seed, index: 0 }).unwrap_or_default()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1000, 10000] {
        let points = instance(n, 41);
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &points, |b, p| {
            b.iter(|| convex_hull(p))
        });

        let hull = convex_hull(&points);
        group.bench_with_input(BenchmarkId::new("is_simple", n), &hull, |b, h| {
            b.iter(|| is_simple(&points, h))
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);
    for &n in &[20usize, 50, 100] {
        for objective in [Objective::MinArea, Objective::MaxArea] {
            let name = match objective {
                Objective::MinArea => "min_area",
                Objective::MaxArea => "max_area",
            };
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter_batched(
                    || instance(n, 43),
                    |points| {
                        let _run = augment_hull(&points, OptimizeCfg::new(objective));
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_optimize);
criterion_main!(benches);
