// File: crates/transform-core/src/transform/range.rs
// Summary: Range bars that seal once their high-low span reaches a fixed size.

use crate::bar::Bar;
use crate::options::RangeParams;

/// Range-bar transform. Sealed bars close at their high (raw close above the
/// bar open) or low (otherwise); the next bar opens at that close. The
/// unsealed remainder is emitted last.
pub fn range_bars(bars: &[Bar], params: &RangeParams) -> Vec<Bar> {
    let Some(first) = bars.first() else { return Vec::new() };
    let mut out = Vec::new();
    let mut current = *first;

    for b in &bars[1..] {
        current.high = current.high.max(b.high);
        current.low = current.low.min(b.low);
        if current.span() >= params.range {
            current.close = if b.close > current.open { current.high } else { current.low };
            out.push(current);
            let open = current.close;
            current = Bar::new(b.time, open, b.high.max(open), b.low.min(open), b.close);
        } else {
            current.close = b.close;
            current.time = b.time;
        }
    }
    out.push(current);
    out
}
