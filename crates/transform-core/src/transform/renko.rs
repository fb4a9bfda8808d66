// File: crates/transform-core/src/transform/renko.rs
// Summary: Renko bricks of fixed height, emitted only on full-brick moves.

use tracing::warn;

use crate::bar::Bar;
use crate::chart_type::ChartType;
use crate::options::RenkoParams;
use crate::transform::Transformed;
use crate::types::whole_steps;
use crate::warning::TransformWarning;

/// Brick ladder anchored at the first close. `level` counts bricks from the
/// anchor so the committed price is always `anchor + level * brick`.
#[derive(Clone, Copy, Debug)]
struct RenkoState {
    anchor: f64,
    level: i64,
}

impl RenkoState {
    fn last_close(&self, brick: f64) -> f64 {
        self.anchor + self.level as f64 * brick
    }
}

/// Renko transform. Bricks created by one input bar share its timestamp.
pub fn renko(bars: &[Bar], params: &RenkoParams) -> Transformed {
    let mut out = Transformed::default();
    let Some(first) = bars.first() else { return out };
    let brick = params.brick_size;
    let mut state = RenkoState { anchor: first.close, level: 0 };

    for b in &bars[1..] {
        let last = state.last_close(brick);
        let requested = whole_steps((b.close - last).abs(), brick);
        if requested == 0 {
            continue;
        }
        let dir: i64 = if b.close > last { 1 } else { -1 };
        let emit = if requested > params.max_catch_up as u64 {
            warn!(time = b.time, requested, cap = params.max_catch_up, "renko catch-up truncated");
            out.warnings.push(TransformWarning::CatchUpTruncated {
                chart_type: ChartType::Renko,
                time: b.time,
                requested,
                emitted: params.max_catch_up,
            });
            params.max_catch_up
        } else {
            requested as usize
        };

        for _ in 0..emit {
            let from = state.last_close(brick);
            state.level += dir;
            let to = state.last_close(brick);
            out.bars.push(Bar::new(b.time, from, from.max(to), from.min(to), to));
        }
    }
    out
}
