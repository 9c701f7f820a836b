//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use screener_core::traits::Indicator;
use screener_indicators::{Atr, Rsi, Sma};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("close", size), &data, |b, data| {
            let sma = Sma::new(200);
            b.iter(|| sma.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("close", size), &data, |b, data| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_atr(c: &mut Criterion) {
    let mut group = c.benchmark_group("ATR");

    for size in [1000, 10000, 100000].iter() {
        let close = generate_test_data(*size);
        let high: Vec<f64> = close.iter().map(|c| c + 1.5).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.5).collect();

        group.bench_with_input(
            BenchmarkId::new("ohlc", size),
            &(high, low, close),
            |b, (high, low, close)| {
                let atr = Atr::new(14);
                b.iter(|| atr.calculate_ohlc(black_box(high), black_box(low), black_box(close)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_sma, benchmark_rsi, benchmark_atr);
criterion_main!(benches);
