use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use radiant::{Bounds2i, Bounds3f, Point2i, Point3f, Vector3};
use radiant_bench::*;

// ============================================================
// Vector3
// ============================================================

fn vector3_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector3/cross");

    group.bench_function("f32", |b| {
        let d = random_dirs(2);
        let (a, v) = (d[0].cast::<f32>(), d[1].cast::<f32>());
        b.iter(|| black_box(black_box(a).cross(black_box(v))))
    });

    group.bench_function("f64", |b| {
        let d = random_dirs(2);
        let (a, v): (Vector3<f64>, Vector3<f64>) = (d[0].cast(), d[1].cast());
        b.iter(|| black_box(black_box(a).cross(black_box(v))))
    });

    group.finish();
}

fn vector3_normalize(c: &mut Criterion) {
    let dirs = random_dirs(1024);
    let mut group = c.benchmark_group("vector3/normalize");
    group.throughput(Throughput::Elements(dirs.len() as u64));
    group.bench_function("batch", |b| {
        b.iter(|| {
            for &v in &dirs {
                black_box(v.normalize());
            }
        })
    });
    group.finish();
}

fn vector3_coordinate_system(c: &mut Criterion) {
    let v = random_dirs(1)[0].normalize();
    c.bench_function("vector3/coordinate_system", |b| {
        b.iter(|| black_box(black_box(v).coordinate_system()))
    });
}

// ============================================================
// Bounds
// ============================================================

fn bounds3_union(c: &mut Criterion) {
    let boxes = random_bounds(4096, 100.0);
    let mut group = c.benchmark_group("bounds3/union");
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("fold", |b| {
        b.iter(|| {
            black_box(boxes.iter().fold(Bounds3f::default(), |acc, bb| acc.union(bb)))
        })
    });
    group.bench_function("centroids", |b| {
        b.iter(|| {
            let mid = Point3f::new(0.5, 0.5, 0.5);
            black_box(boxes.iter().fold(Bounds3f::default(), |acc, bb| acc.union_point(bb.lerp(mid))))
        })
    });
    group.finish();
}

fn bounds3_overlaps(c: &mut Criterion) {
    let boxes = random_bounds(1024, 10.0);
    let probe = Bounds3f::new(Point3f::new(-2.0, -2.0, -2.0), Point3f::new(2.0, 2.0, 2.0));
    c.bench_function("bounds3/overlaps", |b| {
        b.iter(|| boxes.iter().filter(|bb| black_box(probe).overlaps(bb)).count())
    });
}

fn bounds3_split_axis(c: &mut Criterion) {
    let boxes = random_bounds(256, 50.0);
    c.bench_function("bounds3/maximum_extent", |b| {
        b.iter(|| boxes.iter().map(|bb| bb.maximum_extent()).sum::<usize>())
    });
}

fn bounds2_pixels(c: &mut Criterion) {
    let tile = Bounds2i::new(Point2i::new(0, 0), Point2i::new(64, 64));
    let mut group = c.benchmark_group("bounds2/iter");
    group.throughput(Throughput::Elements(64 * 64));
    group.bench_function("tile_64", |b| {
        b.iter(|| black_box(tile).iter().fold(0i64, |acc, p| acc + i64::from(p.x ^ p.y)))
    });
    group.finish();
}

// ============================================================
// Ray
// ============================================================

fn ray_narrow_t_max(c: &mut Criterion) {
    let hits: Vec<_> = random_points(256, 1.0).iter().map(|p| (p.x + 1.0) * 50.0).collect();
    c.bench_function("ray/narrow_t_max", |b| {
        b.iter_batched(
            || random_rays(1).remove(0),
            |ray| {
                for &t in &hits {
                    ray.narrow_t_max(t);
                }
                black_box(ray.t_max())
            },
            BatchSize::SmallInput,
        )
    });
}

fn ray_at(c: &mut Criterion) {
    let rays = random_rays(1024);
    c.bench_function("ray/at", |b| {
        b.iter(|| {
            for r in &rays {
                black_box(r.at(black_box(2.5)));
            }
        })
    });
}

criterion_group!(
    benches,
    vector3_cross,
    vector3_normalize,
    vector3_coordinate_system,
    bounds3_union,
    bounds3_overlaps,
    bounds3_split_axis,
    bounds2_pixels,
    ray_narrow_t_max,
    ray_at,
);
criterion_main!(benches);
