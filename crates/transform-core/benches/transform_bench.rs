
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use transform_core::{transform_bars, Bar, ChartType, CollisionPolicy, TransformOptions};

fn gen_ohlc(n: usize) -> Vec<Bar> {
    let mut v = Vec::with_capacity(n);
    let mut t = 0i64;
    let mut price = 100.0f64;
    for i in 0..n {
        t += 60;
        let o = price;
        // drifting sawtooth so every style sees reversals
        let c = o + if (i / 50) % 2 == 0 { 0.3 } else { -0.25 };
        let h = o.max(c) + 0.5;
        let l = o.min(c) - 0.5;
        price = c;
        v.push(Bar::new(t, o, h, l, c));
    }
    v
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_bars");
    let options = TransformOptions::default().with_brick_size(0.5).with_box_size(0.5).with_range(2.0);
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_ohlc(n);
        for t in [ChartType::HeikinAshi, ChartType::Renko, ChartType::LineBreak, ChartType::Kagi, ChartType::PointFigure, ChartType::Range] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{t}")), &t, |b, &ct| {
                b.iter_batched(
                    || data.clone(),
                    |d| { let _ = black_box(transform_bars(&d, ct, &options, CollisionPolicy::ShiftForward)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
