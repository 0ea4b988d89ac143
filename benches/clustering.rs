use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use stipple::cluster::{Clustering, Dbscan, Kmeans};
use stipple::Point;

fn synthetic_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random::<f32>() * 400.0,
                rng.random::<f32>() * 400.0,
            )
        })
        .collect()
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    let points = synthetic_points(1000, 42);

    group.bench_function("fit_n1000_eps15_min3", |b| {
        b.iter(|| {
            let model = Dbscan::new(15.0, 3);
            model.fit(black_box(&points)).unwrap();
        })
    });

    group.finish();
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    let points = synthetic_points(1000, 42);

    group.bench_function("fit_predict_n1000_k10", |b| {
        b.iter(|| {
            let model = Kmeans::new(10).with_max_iter(10).with_seed(42);
            model.fit_predict(black_box(&points)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan, bench_kmeans);
criterion_main!(benches);
