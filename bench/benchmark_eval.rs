use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_optim_benchmarks::{Benchmark, ParallelConfig, chung_reynolds};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_chung_reynolds(c: &mut Criterion) {
    let mut group = c.benchmark_group("chung_reynolds");
    for dim in [2usize, 10, 30, 100] {
        let x = Array1::from_shape_fn(dim, |i| (i as f64) * 0.5 - 10.0);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &x, |b, x| {
            b.iter(|| chung_reynolds(black_box(x)))
        });
    }
    group.finish();
}

fn bench_population(c: &mut Criterion) {
    let bench = Benchmark::chung_reynolds();
    let mut rng = StdRng::seed_from_u64(0);
    let population: Array2<f64> = bench.bounds().sample_uniform(30, 1000, &mut rng);

    c.bench_function("population_parallel_1000x30", |b| {
        let config = ParallelConfig::default();
        b.iter(|| bench.evaluate_population(black_box(&population), &config))
    });

    c.bench_function("population_sequential_1000x30", |b| {
        let config = ParallelConfig::sequential();
        b.iter(|| bench.evaluate_population(black_box(&population), &config))
    });
}

criterion_group!(benches, bench_chung_reynolds, bench_population);
criterion_main!(benches);
