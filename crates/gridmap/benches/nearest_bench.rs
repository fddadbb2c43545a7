use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridmap::{Collection, Point, SpatialMap};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded point cloud so runs are comparable.
fn scatter(map: &SpatialMap, count: usize, seed: u64) -> Collection<Point> {
    let bounds = map.bounds();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0..=bounds.max_x), rng.gen_range(0..=bounds.max_y)))
        .collect()
}

fn bench_nearest(c: &mut Criterion) {
    let map = SpatialMap::with_bounds(1024, 1024);
    let points = scatter(&map, 5_000, 42);
    let center = map.center();

    c.bench_function("nearest_5k", |b| {
        b.iter(|| black_box(map.nearest(black_box(&center), &points)))
    });
}

fn bench_nearest_objects(c: &mut Criterion) {
    let map = SpatialMap::with_bounds(1024, 1024);
    let points = scatter(&map, 5_000, 42);
    let center = map.center();

    c.bench_function("nearest_objects_5k_top16", |b| {
        b.iter(|| black_box(map.nearest_objects(black_box(&center), &points, 16)))
    });
}

fn bench_filter(c: &mut Criterion) {
    let map = SpatialMap::with_bounds(1024, 1024);
    let points = scatter(&map, 5_000, 7);

    c.bench_function("filter_x_gt_5k", |b| {
        b.iter(|| black_box(points.filter("x", ">", black_box(512))))
    });
}

criterion_group!(benches, bench_nearest, bench_nearest_objects, bench_filter);
criterion_main!(benches);
