use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hquant_stream::{Correlation, Indicator, Phase, RelativeStrengthIndex};

fn prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0 + (i % 11) as f64 * 0.1)
        .collect()
}

fn bench_rsi(c: &mut Criterion) {
    let data = prices(10_000);
    c.bench_function("rsi_15_final_10k", |b| {
        b.iter(|| {
            let mut rsi = RelativeStrengthIndex::default();
            for &p in &data {
                black_box(rsi.process(p, Phase::Final));
            }
        })
    });

    // 每根 K 线 4 次中间更新
    c.bench_function("rsi_15_ticks_10k", |b| {
        b.iter(|| {
            let mut rsi = RelativeStrengthIndex::default();
            for &p in &data {
                for k in 0..4 {
                    black_box(rsi.process(p + k as f64 * 0.01, Phase::Provisional));
                }
                black_box(rsi.process(p, Phase::Final));
            }
        })
    });
}

fn bench_correlation(c: &mut Criterion) {
    let data = prices(10_000);
    c.bench_function("correlation_20_final_10k", |b| {
        b.iter(|| {
            let mut corr = Correlation::default();
            for (i, &p) in data.iter().enumerate() {
                let q = p * 0.8 + (i % 3) as f64;
                black_box(corr.process((p, q), Phase::Final));
            }
        })
    });
}

criterion_group!(benches, bench_rsi, bench_correlation);
criterion_main!(benches);
