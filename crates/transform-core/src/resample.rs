// File: crates/transform-core/src/resample.rs
// Summary: Time-bucket OHLC aggregation to a coarser timeframe.

use crate::bar::Bar;
use crate::timeframe::Timeframe;

/// Aggregate ascending bars into `timeframe`-aligned buckets.
/// For each bucket: open=first.open, close=last.close, high=max high, low=min low,
/// time=bucket start. Input must be sorted by time.
pub fn resample(data: &[Bar], timeframe: Timeframe) -> Vec<Bar> {
    let mut out: Vec<Bar> = Vec::new();
    for b in data {
        let start = timeframe.floor(b.time);
        match out.last_mut() {
            Some(cur) if cur.time == start => {
                cur.high = cur.high.max(b.high);
                cur.low = cur.low.min(b.low);
                cur.close = b.close;
            }
            _ => out.push(b.with_time(start)),
        }
    }
    out
}
