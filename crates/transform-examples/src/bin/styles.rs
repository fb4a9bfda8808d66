// File: crates/transform-examples/src/bin/styles.rs
// Summary: Minimal example that converts one mock series into every chart style and prints a summary.

use rand::rngs::StdRng;
use rand::SeedableRng;
use transform_core::{
    change_chart_type, get_chart_data, realtime_update, ChartDataRequest, ChartType, CollisionPolicy,
    MockBarSource, Timeframe, TransformOptions,
};

fn main() -> transform_core::Result<()> {
    let mut source = MockBarSource::seeded(7, 100.0, 2.0).with_start_time(1_700_000_000);
    let options = TransformOptions::default().with_brick_size(0.5).with_box_size(0.5).with_range(1.0);

    // Fetch once through the service, then reuse the raw bars for each style
    let request = ChartDataRequest::new("DEMO", Timeframe::MINUTE, ChartType::Candles)
        .with_count(300)
        .with_options(options);
    let base = get_chart_data(&mut source, &request, CollisionPolicy::default())?;
    println!("{:<14} {:>5} bars", base.chart_type, base.bars.len());

    for chart_type in ChartType::ALL.into_iter().filter(|t| !t.is_passthrough()) {
        let data = change_chart_type(&base.bars, chart_type, &options)?;
        let last = data.bars.last().map(|b| b.close).unwrap_or(f64::NAN);
        println!(
            "{:<14} {:>5} bars  last close {:>8.3}  warnings {}",
            chart_type,
            data.bars.len(),
            last,
            data.warnings.len()
        );
    }

    // A few simulated ticks on the live bar
    let mut rng = StdRng::seed_from_u64(7);
    if let Some(mut live) = base.bars.last().copied() {
        for _ in 0..3 {
            live = realtime_update(&live, &mut rng);
            println!("tick @ {}: close {:.3} (h {:.3} l {:.3})", live.time, live.close, live.high, live.low);
        }
    }
    Ok(())
}
