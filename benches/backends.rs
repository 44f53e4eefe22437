//! Benchmarks for the add kernel comparing every backend available on this CPU
//!
//! # Benchmark Methodology
//!
//! - Sizes: 1K (L1-resident), 100K (L2/L3), 10M (memory bound)
//! - One series per backend tier (Scalar, SSE2, AVX, AVX2, AVX-512, NEON, SIMD128)
//! - Throughput reported in elements/second
//!
//! # Performance Goals
//!
//! - 1K:   close to lane-count speedup over Scalar
//! - 100K: 2-4x over Scalar
//! - 10M:  all SIMD tiers converge (memory bandwidth limited)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vadd::{available_backends, Kernel};

/// Generate test data for benchmarks
fn generate_test_data(size: usize) -> Vec<f32> {
    (0..size).map(|i| i as f32).collect()
}

/// Benchmark allocating element-wise addition per backend
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [1_000, 100_000, 10_000_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let a = generate_test_data(*size);
        let b = generate_test_data(*size);

        for backend in available_backends() {
            let Ok(kernel) = Kernel::with_backend(backend) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{backend:?}"), size),
                size,
                |bencher, _| {
                    bencher.iter(|| black_box(kernel.add(black_box(&a), black_box(&b)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark non-allocating element-wise addition per backend
fn bench_add_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_into");

    for size in [1_000, 100_000, 10_000_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let a = generate_test_data(*size);
        let b = generate_test_data(*size);
        let mut out = vec![0.0; *size];

        for backend in available_backends() {
            let Ok(kernel) = Kernel::with_backend(backend) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{backend:?}"), size),
                size,
                |bencher, _| {
                    bencher.iter(|| {
                        kernel
                            .add_into(black_box(&a), black_box(&b), &mut out)
                            .unwrap();
                        black_box(&out);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_add_into);
criterion_main!(benches);
