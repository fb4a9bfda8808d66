// File: crates/transform-core/src/transform/point_figure.rs
// Summary: Point & Figure columns of X (up) and O (down) boxes on integer box indices.
// Notes:
// - Box `k` spans prices [k * box_size, (k + 1) * box_size].
// - X columns grow when price reaches a box top (floor index); O columns grow
//   when price reaches a box bottom (ceil index).
// - A reversal is counted in boxes from the column's extreme boundary. The new
//   column starts one box inside it (an O column one box below the top X, an X
//   column one box above the bottom O) and holds that many boxes.

use tracing::warn;

use crate::bar::Bar;
use crate::chart_type::ChartType;
use crate::options::PointFigureParams;
use crate::transform::Transformed;
use crate::types::QUANT_EPSILON;
use crate::warning::TransformWarning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    Undecided,
    X,
    O,
}

/// Column under construction. `top`/`bottom` are box boundary indices; while
/// undecided both hold the anchor taken from the first close.
#[derive(Clone, Copy, Debug)]
struct PfState {
    column: Column,
    top: i64,
    bottom: i64,
}

#[inline]
fn floor_box(price: f64, size: f64) -> i64 {
    (price / size + QUANT_EPSILON).floor() as i64
}

#[inline]
fn ceil_box(price: f64, size: f64) -> i64 {
    (price / size - QUANT_EPSILON).ceil() as i64
}

struct Emitter<'a> {
    out: &'a mut Transformed,
    size: f64,
    cap: usize,
}

impl Emitter<'_> {
    /// Clamp a requested box count to the catch-up cap, recording truncation.
    fn limit(&mut self, time: i64, requested: i64) -> i64 {
        if requested > self.cap as i64 {
            warn!(time, requested, cap = self.cap, "point & figure catch-up truncated");
            self.out.warnings.push(TransformWarning::CatchUpTruncated {
                chart_type: ChartType::PointFigure,
                time,
                requested: requested as u64,
                emitted: self.cap,
            });
            self.cap as i64
        } else {
            requested
        }
    }

    /// X boxes stacked upward starting at boundary `from`.
    fn up(&mut self, time: i64, from: i64, count: i64) {
        for k in from..from + count {
            let lo = k as f64 * self.size;
            let hi = (k + 1) as f64 * self.size;
            self.out.bars.push(Bar::new(time, lo, hi, lo, hi));
        }
    }

    /// O boxes stacked downward starting at boundary `from`.
    fn down(&mut self, time: i64, from: i64, count: i64) {
        for k in (from - count..from).rev() {
            let lo = k as f64 * self.size;
            let hi = (k + 1) as f64 * self.size;
            self.out.bars.push(Bar::new(time, hi, hi, lo, lo));
        }
    }
}

/// Point & Figure transform. All boxes added by one input bar carry its time.
pub fn point_figure(bars: &[Bar], params: &PointFigureParams) -> Transformed {
    let mut out = Transformed::default();
    let Some(first) = bars.first() else { return out };
    let size = params.box_size;
    let reversal = params.reversal as i64;
    let anchor = floor_box(first.close, size);
    let mut state = PfState { column: Column::Undecided, top: anchor, bottom: anchor };
    let mut em = Emitter { out: &mut out, size, cap: params.max_catch_up };

    for b in &bars[1..] {
        let t = b.time;
        let hi_idx = floor_box(b.close, size);
        let lo_idx = ceil_box(b.close, size);
        match state.column {
            Column::Undecided => {
                if hi_idx > state.top {
                    let n = em.limit(t, hi_idx.saturating_sub(state.top));
                    em.up(t, state.bottom, n);
                    state = PfState { column: Column::X, top: state.bottom + n, bottom: state.bottom };
                } else if lo_idx < state.bottom {
                    let n = em.limit(t, state.bottom.saturating_sub(lo_idx));
                    em.down(t, state.top, n);
                    state = PfState { column: Column::O, top: state.top, bottom: state.top - n };
                }
            }
            Column::X => {
                if hi_idx > state.top {
                    let n = em.limit(t, hi_idx.saturating_sub(state.top));
                    em.up(t, state.top, n);
                    state.top += n;
                } else {
                    let start = state.top;
                    let boxes = start.saturating_sub(lo_idx);
                    if boxes >= reversal {
                        let n = em.limit(t, boxes);
                        let top = start - 1;
                        em.down(t, top, n);
                        state = PfState { column: Column::O, top, bottom: top - n };
                    }
                }
            }
            Column::O => {
                if lo_idx < state.bottom {
                    let n = em.limit(t, state.bottom.saturating_sub(lo_idx));
                    em.down(t, state.bottom, n);
                    state.bottom -= n;
                } else {
                    let start = state.bottom;
                    let boxes = hi_idx.saturating_sub(start);
                    if boxes >= reversal {
                        let n = em.limit(t, boxes);
                        let bottom = start + 1;
                        em.up(t, bottom, n);
                        state = PfState { column: Column::X, top: bottom + n, bottom };
                    }
                }
            }
        }
    }
    out
}
