//! Multiplication benchmarks across the schoolbook/FFT crossover.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use decint_core::UnsignedInteger;

fn random_value(seed: u64, digits: usize) -> UnsignedInteger {
    let mut state = seed;
    let mut text = String::with_capacity(digits);
    text.push(char::from(b'1' + (seed % 9) as u8));
    while text.len() < digits {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        text.push(char::from(b'0' + ((state >> 33) % 10) as u8));
    }
    text.parse().expect("generated digits")
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for &digits in &[256usize, 4_096, 65_536, 1_048_576] {
        let a = random_value(1, digits);
        let b = random_value(2, digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b));
        });
    }
    group.finish();
}

fn bench_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");
    group.sample_size(20);
    for &digits in &[4_096usize, 65_536] {
        let x = random_value(3, digits);
        let y = random_value(4, digits / 2);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| black_box(&x).div_rem(black_box(&y)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply, bench_divide);
criterion_main!(benches);
