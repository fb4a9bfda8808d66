// File: crates/transform-core/src/warning.rs
// Summary: Recoverable conditions reported alongside transformed output.

use std::fmt;

use serde::Serialize;

use crate::chart_type::ChartType;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformWarning {
    /// Raw input was not in ascending time order and was sorted first.
    InputReordered,
    /// A price gap required more bricks/boxes than the per-bar cap allows.
    CatchUpTruncated {
        chart_type: ChartType,
        time: i64,
        requested: u64,
        emitted: usize,
    },
    /// A bar collided with its predecessor and was moved forward.
    TimestampShifted { original: i64, adjusted: i64 },
    /// A bar shared its time with a later one and was dropped.
    DuplicateDropped { time: i64 },
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformWarning::InputReordered => write!(f, "input bars were out of order and have been sorted"),
            TransformWarning::CatchUpTruncated { chart_type, time, requested, emitted } => write!(
                f,
                "{chart_type}: bar at {time} needed {requested} steps, emitted {emitted}"
            ),
            TransformWarning::TimestampShifted { original, adjusted } => {
                write!(f, "timestamp {original} collided, shifted to {adjusted}")
            }
            TransformWarning::DuplicateDropped { time } => write!(f, "duplicate bar at {time} dropped"),
        }
    }
}
