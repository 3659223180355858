//! Criterion benchmarks for the schoolbook kernels across operand sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use polymul::{add_scaled, mul, mul_add, sum_mul_add};

fn random_coeffs(rng: &mut ChaCha20Rng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_mul(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("mul");

    for &len in &[16usize, 64, 256, 1024] {
        let a = random_coeffs(&mut rng, len);
        let b = random_coeffs(&mut rng, len);
        let mut p = vec![0i64; 2 * len - 1];

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| mul(black_box(&mut p), black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_mul_unbalanced(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let mut group = c.benchmark_group("mul_unbalanced");

    // Short-times-long shapes: region 2 dominates.
    for &(a_len, b_len) in &[(8usize, 1024usize), (32, 1024), (128, 1024)] {
        let a = random_coeffs(&mut rng, a_len);
        let b = random_coeffs(&mut rng, b_len);
        let mut p = vec![0i64; a_len + b_len - 1];

        group.throughput(Throughput::Elements((a_len * b_len) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{a_len}x{b_len}")),
            &a_len,
            |bench, _| {
                bench.iter(|| mul(black_box(&mut p), black_box(&a), black_box(&b)));
            },
        );
    }

    group.finish();
}

fn bench_mul_add(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut group = c.benchmark_group("mul_add");

    for &len in &[16usize, 64, 256, 1024] {
        let a = random_coeffs(&mut rng, len);
        let b = random_coeffs(&mut rng, len);
        let mut p = vec![0i64; 2 * len - 1];

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| mul_add(black_box(&mut p), black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_sum_mul_add(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let mut group = c.benchmark_group("sum_mul_add");

    for &len in &[16usize, 64, 256, 1024] {
        let a0 = random_coeffs(&mut rng, len);
        let a1 = random_coeffs(&mut rng, len);
        let b = random_coeffs(&mut rng, len);
        let mut p = vec![0i64; 2 * len - 1];

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| {
                sum_mul_add(black_box(&mut p), black_box(&a0), black_box(&a1), black_box(&b))
            });
        });
    }

    group.finish();
}

fn bench_add_scaled(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut group = c.benchmark_group("add_scaled");

    for &len in &[64usize, 1024, 16384] {
        let a = random_coeffs(&mut rng, len);
        let mut p = vec![0i64; len];

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| add_scaled(black_box(&mut p), black_box(&a), black_box(7)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mul,
    bench_mul_unbalanced,
    bench_mul_add,
    bench_sum_mul_add,
    bench_add_scaled
);
criterion_main!(benches);
