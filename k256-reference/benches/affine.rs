//! secp256k1 reference point arithmetic benchmarks

use core::hint::black_box;
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use k256_reference::{AffinePoint, ORDER_HALF, num_bigint::BigUint};

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = AffinePoint::generator();
    let q = p.double().unwrap();
    group.bench_function("add", |b| b.iter(|| black_box(&p).add(black_box(&q))));
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = AffinePoint::generator();
    group.bench_function("double", |b| b.iter(|| black_box(&p).double()));
}

fn bench_point_validate<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let g = AffinePoint::generator();
    let (x, y) = (g.x().unwrap().clone(), g.y().unwrap().clone());
    group.bench_function("new", |b| {
        b.iter(|| AffinePoint::new(black_box(x.clone()), black_box(y.clone())))
    });
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let p = AffinePoint::generator();
    let k: BigUint = ORDER_HALF.clone();
    group.bench_function("mul", |b| b.iter(|| black_box(&p).mul(black_box(&k))));
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine point operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_validate(&mut group);
    bench_point_mul(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
