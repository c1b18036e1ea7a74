//! Performance benchmarks for unified-ta indicators.
//!
//! Run with: `cargo bench -p unified-ta`
//!
//! Each indicator is measured twice: through its slice function and through
//! the `Ta` facade, so the cost of dispatch and validation is visible next
//! to the raw computation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unified_ta::frame::Frame;
use unified_ta::indicators::{
    ama::ama,
    atr::average_true_range,
    kama::kama,
    mabw::mabw,
    stoch_macd::stoch_macd,
    vpn::{vpn, VpnInput},
    VpnConfig,
};
use unified_ta::params::Params;
use unified_ta::registry::Registry;
use unified_ta::Ta;

/// Generate synthetic OHLCV data for benchmarks.
fn generate_ohlcv(size: usize) -> Frame {
    let mut open = Vec::with_capacity(size);
    let mut high = Vec::with_capacity(size);
    let mut low = Vec::with_capacity(size);
    let mut close = Vec::with_capacity(size);
    let mut volume = Vec::with_capacity(size);

    let mut price = 100.0;
    for i in 0..size {
        // Simple deterministic price movement for reproducibility
        let t = i as f64;
        price += (t * 0.1).sin() * 2.0 + (t * 0.03).cos() * 1.5;
        price = price.max(10.0);

        open.push(price + (t * 0.04).sin() * 0.3);
        high.push(price + 1.0 + (t * 0.07).sin().abs());
        low.push(price - 1.0 - (t * 0.05).cos().abs());
        close.push(price + (t * 0.02).sin() * 0.5);
        volume.push(1_000_000.0 + (t * 1000.0).sin().abs() * 500_000.0);
    }

    Frame::new(vec![
        ("open", open),
        ("high", high),
        ("low", low),
        ("close", close),
        ("volume", volume),
    ])
    .unwrap()
}

// Standard sizes for benchmarking
const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn bench_kama(c: &mut Criterion) {
    let mut group = c.benchmark_group("kama");
    for &size in SIZES {
        let frame = generate_ohlcv(size);
        let close = frame.column("close").unwrap().to_vec();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &close, |b, data| {
            b.iter(|| kama(black_box(data), 10, 2, 30, 20))
        });
    }
    group.finish();
}

fn bench_ama(c: &mut Criterion) {
    let mut group = c.benchmark_group("ama");
    for &size in SIZES {
        let frame = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &frame, |b, frame| {
            let (h, l, c) = (
                frame.column("high").unwrap(),
                frame.column("low").unwrap(),
                frame.column("close").unwrap(),
            );
            b.iter(|| ama(black_box(h), black_box(l), black_box(c), 10, 2, 30))
        });
    }
    group.finish();
}

fn bench_stoch_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("stoch_macd");
    for &size in SIZES {
        let frame = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &frame, |b, frame| {
            let (h, l, c) = (
                frame.column("high").unwrap(),
                frame.column("low").unwrap(),
                frame.column("close").unwrap(),
            );
            b.iter(|| stoch_macd(black_box(h), black_box(l), black_box(c), 45, 12, 26, 9))
        });
    }
    group.finish();
}

fn bench_mabw(c: &mut Criterion) {
    let mut group = c.benchmark_group("mabw");
    for &size in SIZES {
        let frame = generate_ohlcv(size);
        let close = frame.column("close").unwrap().to_vec();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &close, |b, data| {
            b.iter(|| mabw(black_box(data), 10, 50, 1.0))
        });
    }
    group.finish();
}

fn bench_vpn(c: &mut Criterion) {
    let mut group = c.benchmark_group("vpn");
    for &size in SIZES {
        let frame = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &frame, |b, frame| {
            let input = VpnInput {
                high: frame.column("high").unwrap(),
                low: frame.column("low").unwrap(),
                close: frame.column("close").unwrap(),
                volume: frame.column("volume").unwrap(),
            };
            b.iter(|| vpn(black_box(input), VpnConfig::default()))
        });
    }
    group.finish();
}

fn bench_atr(c: &mut Criterion) {
    let mut group = c.benchmark_group("atr");
    for &size in SIZES {
        let frame = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &frame, |b, frame| {
            let (h, l, c) = (
                frame.column("high").unwrap(),
                frame.column("low").unwrap(),
                frame.column("close").unwrap(),
            );
            b.iter(|| average_true_range(black_box(h), black_box(l), black_box(c), 14))
        });
    }
    group.finish();
}

/// Every registered indicator through the facade at a fixed size.
fn bench_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    let size = 10_000;
    let ta = Ta::from_frame(generate_ohlcv(size)).unwrap();
    let params = Params::new();
    group.throughput(Throughput::Elements(size as u64));
    for name in ta.available_indicators() {
        group.bench_function(name, |b| b.iter(|| ta.indicator(black_box(name), &params)));
    }
    group.finish();
}

fn bench_discovery(c: &mut Criterion) {
    c.bench_function("registry_discover", |b| {
        b.iter(|| Registry::discover(black_box(unified_ta::indicators::BUILTIN)))
    });
}

criterion_group!(
    benches,
    bench_kama,
    bench_ama,
    bench_stoch_macd,
    bench_mabw,
    bench_vpn,
    bench_atr,
    bench_facade,
    bench_discovery,
);
criterion_main!(benches);
