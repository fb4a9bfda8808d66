// File: crates/transform-core/src/transform/kagi.rs
// Summary: Kagi chart: contiguous yang/yin segments flipping on a percentage reversal.

use crate::bar::Bar;
use crate::options::KagiParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Yang, // up
    Yin,  // down
}

#[derive(Clone, Copy, Debug)]
struct KagiState {
    direction: Direction,
    last_high: f64,
    last_low: f64,
    /// Close of the last emitted segment; the next one opens here.
    last_close: f64,
}

fn segment(time: i64, from: f64, to: f64) -> Bar {
    Bar::new(time, from, from.max(to), from.min(to), to)
}

/// Kagi transform. The first bar seeds a segment from its open to its close.
pub fn kagi(bars: &[Bar], params: &KagiParams) -> Vec<Bar> {
    let Some(first) = bars.first() else { return Vec::new() };
    let ratio = params.reversal_pct / 100.0;
    let mut out = vec![segment(first.time, first.open, first.close)];
    let mut state = KagiState {
        direction: if first.is_up() { Direction::Yang } else { Direction::Yin },
        last_high: first.open.max(first.close),
        last_low: first.open.min(first.close),
        last_close: first.close,
    };

    for b in &bars[1..] {
        let c = b.close;
        match state.direction {
            Direction::Yang if c > state.last_high => {
                state.last_high = c;
            }
            Direction::Yang if c < state.last_high * (1.0 - ratio) => {
                state.direction = Direction::Yin;
                state.last_low = c;
            }
            Direction::Yin if c < state.last_low => {
                state.last_low = c;
            }
            Direction::Yin if c > state.last_low * (1.0 + ratio) => {
                state.direction = Direction::Yang;
                state.last_high = c;
            }
            _ => continue,
        }
        out.push(segment(b.time, state.last_close, c));
        state.last_close = c;
    }
    out
}
