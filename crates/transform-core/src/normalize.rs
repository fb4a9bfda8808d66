// File: crates/transform-core/src/normalize.rs
// Summary: Ordering/de-duplication pass guaranteeing strictly ascending, unique timestamps.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bar::Bar;
use crate::error::{Result, TransformError};
use crate::types::TIME_STEP;
use crate::warning::TransformWarning;

/// How bars sharing a timestamp are made unique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Move the colliding bar to one second after its predecessor.
    /// Lossy: the original time is only kept in the warning. A collision at
    /// `i64::MAX` cannot be shifted and is reported as an error.
    #[default]
    ShiftForward,
    /// Keep only the last bar for each timestamp.
    KeepLast,
    /// Fail on the first collision.
    Reject,
}

/// Sort `bars` by time (stable) and resolve timestamp collisions per `policy`.
pub fn normalize(mut bars: Vec<Bar>, policy: CollisionPolicy) -> Result<(Vec<Bar>, Vec<TransformWarning>)> {
    bars.sort_by_key(|b| b.time);
    let mut warnings = Vec::new();
    let mut out: Vec<Bar> = Vec::with_capacity(bars.len());

    for bar in bars {
        let Some(prev) = out.last_mut() else {
            out.push(bar);
            continue;
        };
        if bar.time > prev.time {
            out.push(bar);
            continue;
        }
        match policy {
            CollisionPolicy::ShiftForward => {
                let Some(adjusted) = prev.time.checked_add(TIME_STEP) else {
                    return Err(TransformError::TimestampCollision { time: bar.time });
                };
                warnings.push(TransformWarning::TimestampShifted { original: bar.time, adjusted });
                out.push(bar.with_time(adjusted));
            }
            CollisionPolicy::KeepLast => {
                warnings.push(TransformWarning::DuplicateDropped { time: prev.time });
                *prev = bar;
            }
            CollisionPolicy::Reject => {
                return Err(TransformError::TimestampCollision { time: bar.time });
            }
        }
    }

    if !warnings.is_empty() {
        warn!(collisions = warnings.len(), ?policy, "resolved timestamp collisions");
    }
    debug!(bars = out.len(), "normalized bar sequence");
    Ok((out, warnings))
}
