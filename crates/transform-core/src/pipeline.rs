// File: crates/transform-core/src/pipeline.rs
// Summary: End-to-end call: validate -> order input -> transform -> normalize.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, warn};

use crate::bar::{is_strictly_ascending, Bar};
use crate::chart_type::ChartType;
use crate::error::{Result, TransformError};
use crate::normalize::{normalize, CollisionPolicy};
use crate::options::{TransformOptions, TransformSpec};
use crate::transform::apply;
use crate::warning::TransformWarning;

/// Bars ready for the renderer plus everything recoverable that happened on the way.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub chart_type: ChartType,
    pub bars: Vec<Bar>,
    pub warnings: Vec<TransformWarning>,
}

/// Transform `bars` into `chart_type` and normalize timestamps.
///
/// Non-finite prices are rejected. Out-of-order input is stable-sorted
/// before the transform runs and reported as [`TransformWarning::InputReordered`].
pub fn transform_bars(
    bars: &[Bar],
    chart_type: ChartType,
    options: &TransformOptions,
    policy: CollisionPolicy,
) -> Result<ChartData> {
    let spec = TransformSpec::resolve(chart_type, options)?;
    if let Some(index) = bars.iter().position(|b| !b.is_finite()) {
        return Err(TransformError::InvalidBar { index, reason: "non-finite price" });
    }

    let mut warnings = Vec::new();
    let input: Cow<'_, [Bar]> = if bars.windows(2).all(|w| w[0].time <= w[1].time) {
        Cow::Borrowed(bars)
    } else {
        warn!(chart_type = %chart_type, "input bars out of order; sorting");
        warnings.push(TransformWarning::InputReordered);
        let mut sorted = bars.to_vec();
        sorted.sort_by_key(|b| b.time);
        Cow::Owned(sorted)
    };

    let transformed = apply(&input, &spec);
    warnings.extend(transformed.warnings);

    let out = if is_strictly_ascending(&transformed.bars) {
        transformed.bars
    } else {
        let (out, shifted) = normalize(transformed.bars, policy)?;
        warnings.extend(shifted);
        out
    };

    debug!(chart_type = %chart_type, input = bars.len(), output = out.len(), warnings = warnings.len(), "transform complete");
    Ok(ChartData { chart_type, bars: out, warnings })
}
