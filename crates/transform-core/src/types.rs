// File: crates/transform-core/src/types.rs
// Summary: Shared constants (option defaults, catch-up cap, quantization epsilon).

/// Default Renko brick height, in price units.
pub const DEFAULT_BRICK_SIZE: f64 = 1.0;
/// Default number of lines a Line Break reversal must break.
pub const DEFAULT_LINE_COUNT: usize = 1;
/// Default Kagi reversal, in percent.
pub const DEFAULT_KAGI_REVERSAL: f64 = 1.0;
/// Default Point & Figure reversal, in boxes.
pub const DEFAULT_PF_REVERSAL: u32 = 3;
/// Default Point & Figure box size, in price units.
pub const DEFAULT_BOX_SIZE: f64 = 1.0;
/// Default range-bar span, in price units.
pub const DEFAULT_RANGE: f64 = 1.0;

/// Upper bound on bricks/boxes emitted for a single input bar.
/// Contract: a gap larger than this is truncated and reported.
pub const DEFAULT_MAX_CATCH_UP: usize = 500;

/// Line Break history is bounded to this many multiples of `line_count`.
pub const LINE_HISTORY_FACTOR: usize = 3;

/// Tolerance applied when quantizing prices into whole bricks/boxes so
/// that values such as `0.3 / 0.1` do not fall one step short.
pub const QUANT_EPSILON: f64 = 1e-9;

/// Smallest timestamp step, in seconds, used to disambiguate collisions.
pub const TIME_STEP: i64 = 1;

/// Number of bars the chart-data service requests when none is given.
pub const DEFAULT_BAR_COUNT: usize = 500;

/// Count of whole `step`s contained in `distance` (both positive).
#[inline]
pub fn whole_steps(distance: f64, step: f64) -> u64 {
    let n = (distance / step + QUANT_EPSILON).floor();
    if n <= 0.0 { 0 } else if n >= u64::MAX as f64 { u64::MAX } else { n as u64 }
}
