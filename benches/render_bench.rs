//! Benchmarks for the chart renderers
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ctg_monitor::client::{ComplexPoint, FilterCoefficients};
use ctg_monitor::render::{LineChart, LinearScale, ZPlane};

/// Heart-rate-like samples around 140 BPM
fn create_test_samples(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 140.0 + 12.0 * (i as f64 * 0.05).sin() + 3.0 * (i as f64 * 0.7).cos())
        .collect()
}

fn create_test_filter(order: usize) -> FilterCoefficients {
    let poles = (0..order)
        .map(|k| {
            let angle = std::f64::consts::PI * (2 * k + 1) as f64 / (2 * order) as f64;
            ComplexPoint::new(0.8 * angle.cos(), 0.8 * angle.sin())
        })
        .collect();
    let zeros = vec![ComplexPoint::new(-1.0, 0.0); order];
    FilterCoefficients::new(zeros, poles)
}

fn bench_line_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_chart");
    let chart = LineChart::default();

    for size in [1_000, 10_000, 100_000] {
        let samples = create_test_samples(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("render_{}", size), |b| {
            b.iter(|| chart.render(black_box(&samples)))
        });

        group.bench_function(format!("render_markup_{}", size), |b| {
            b.iter(|| chart.render(black_box(&samples)).to_markup())
        });
    }

    group.finish();
}

fn bench_zplane(c: &mut Criterion) {
    let mut group = c.benchmark_group("zplane");
    let plane = ZPlane::default();

    for order in [4, 32] {
        let filter = create_test_filter(order);

        group.bench_function(format!("render_order_{}", order), |b| {
            b.iter(|| plane.render(black_box(&filter)).to_markup())
        });
    }

    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");

    group.bench_function("nice_and_ticks", |b| {
        b.iter(|| {
            let scale = LinearScale::new(black_box((112.3, 158.9)), (310.0, 0.0)).nice(10);
            scale.ticks(5)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_line_chart, bench_zplane, bench_scale);
criterion_main!(benches);
