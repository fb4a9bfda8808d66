// File: crates/transform-core/src/transform/heikin_ashi.rs
// Summary: Heikin-Ashi smoothing (same length as input).

use crate::bar::Bar;

/// Previous Heikin-Ashi open/close carried bar to bar.
#[derive(Clone, Copy, Debug)]
struct HaState {
    open: f64,
    close: f64,
}

/// Heikin-Ashi transform.
/// For each bar: close = avg(o,h,l,c), open = avg(prev ha open, prev ha close)
/// (first bar: avg(o,c)), high/low widened to include ha open/close.
pub fn heikin_ashi(bars: &[Bar]) -> Vec<Bar> {
    let mut out = Vec::with_capacity(bars.len());
    let mut prev: Option<HaState> = None;
    for b in bars {
        let close = (b.open + b.high + b.low + b.close) / 4.0;
        let open = match prev {
            Some(p) => (p.open + p.close) / 2.0,
            None => (b.open + b.close) / 2.0,
        };
        let high = b.high.max(open).max(close);
        let low = b.low.min(open).min(close);
        out.push(Bar::new(b.time, open, high, low, close));
        prev = Some(HaState { open, close });
    }
    out
}
