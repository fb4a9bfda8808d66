// File: crates/transform-core/src/options.rs
// Summary: Per-style transform options and their validated, typed form (`TransformSpec`).

use serde::{Deserialize, Serialize};

use crate::chart_type::ChartType;
use crate::error::{Result, TransformError};
use crate::types::{
    DEFAULT_BOX_SIZE, DEFAULT_BRICK_SIZE, DEFAULT_KAGI_REVERSAL, DEFAULT_LINE_COUNT,
    DEFAULT_MAX_CATCH_UP, DEFAULT_PF_REVERSAL, DEFAULT_RANGE,
};

/// Raw, optional parameters as supplied by a caller or a config file.
/// Missing values fall back to the style's default; present values are
/// validated by [`TransformSpec::resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Renko brick height, in price units.
    #[serde(alias = "brickSize", skip_serializing_if = "Option::is_none")]
    pub brick_size: Option<f64>,
    /// Lines a Line Break reversal must break.
    #[serde(alias = "lineCount", skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    /// Kagi: percent. Point & Figure: whole boxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversal: Option<f64>,
    /// Point & Figure box size, in price units.
    #[serde(alias = "boxSize", skip_serializing_if = "Option::is_none")]
    pub box_size: Option<f64>,
    /// Range-bar span, in price units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
    /// Cap on bricks/boxes emitted for one input bar.
    #[serde(alias = "maxCatchUp", skip_serializing_if = "Option::is_none")]
    pub max_catch_up: Option<usize>,
}

impl TransformOptions {
    pub fn with_brick_size(mut self, v: f64) -> Self { self.brick_size = Some(v); self }
    pub fn with_line_count(mut self, v: usize) -> Self { self.line_count = Some(v); self }
    pub fn with_reversal(mut self, v: f64) -> Self { self.reversal = Some(v); self }
    pub fn with_box_size(mut self, v: f64) -> Self { self.box_size = Some(v); self }
    pub fn with_range(mut self, v: f64) -> Self { self.range = Some(v); self }
    pub fn with_max_catch_up(mut self, v: usize) -> Self { self.max_catch_up = Some(v); self }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: &TransformOptions) -> Self {
        Self {
            brick_size: self.brick_size.or(fallback.brick_size),
            line_count: self.line_count.or(fallback.line_count),
            reversal: self.reversal.or(fallback.reversal),
            box_size: self.box_size.or(fallback.box_size),
            range: self.range.or(fallback.range),
            max_catch_up: self.max_catch_up.or(fallback.max_catch_up),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenkoParams {
    pub brick_size: f64,
    pub max_catch_up: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineBreakParams {
    pub line_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KagiParams {
    /// Reversal threshold in percent (1.0 = 1%).
    pub reversal_pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointFigureParams {
    pub box_size: f64,
    pub reversal: u32,
    pub max_catch_up: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeParams {
    pub range: f64,
}

impl Default for RenkoParams {
    fn default() -> Self { Self { brick_size: DEFAULT_BRICK_SIZE, max_catch_up: DEFAULT_MAX_CATCH_UP } }
}

impl Default for LineBreakParams {
    fn default() -> Self { Self { line_count: DEFAULT_LINE_COUNT } }
}

impl Default for KagiParams {
    fn default() -> Self { Self { reversal_pct: DEFAULT_KAGI_REVERSAL } }
}

impl Default for PointFigureParams {
    fn default() -> Self {
        Self { box_size: DEFAULT_BOX_SIZE, reversal: DEFAULT_PF_REVERSAL, max_catch_up: DEFAULT_MAX_CATCH_UP }
    }
}

impl Default for RangeParams {
    fn default() -> Self { Self { range: DEFAULT_RANGE } }
}

/// A chart type resolved together with its validated parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformSpec {
    /// Rendering-only style; bars are returned unchanged.
    Passthrough(ChartType),
    HeikinAshi,
    Renko(RenkoParams),
    LineBreak(LineBreakParams),
    Kagi(KagiParams),
    PointFigure(PointFigureParams),
    Range(RangeParams),
}

impl TransformSpec {
    /// Validate `options` for `chart_type`. Only the fields the style uses are
    /// checked; out-of-range values are rejected rather than clamped.
    pub fn resolve(chart_type: ChartType, options: &TransformOptions) -> Result<Self> {
        let spec = match chart_type {
            ChartType::HeikinAshi => TransformSpec::HeikinAshi,
            ChartType::Renko => TransformSpec::Renko(RenkoParams {
                brick_size: positive("brick_size", options.brick_size, DEFAULT_BRICK_SIZE)?,
                max_catch_up: max_catch_up(options)?,
            }),
            ChartType::LineBreak => TransformSpec::LineBreak(LineBreakParams {
                line_count: nonzero("line_count", options.line_count, DEFAULT_LINE_COUNT)?,
            }),
            ChartType::Kagi => TransformSpec::Kagi(KagiParams {
                reversal_pct: kagi_reversal(options.reversal)?,
            }),
            ChartType::PointFigure => TransformSpec::PointFigure(PointFigureParams {
                box_size: positive("box_size", options.box_size, DEFAULT_BOX_SIZE)?,
                reversal: box_reversal(options.reversal)?,
                max_catch_up: max_catch_up(options)?,
            }),
            ChartType::Range => TransformSpec::Range(RangeParams {
                range: positive("range", options.range, DEFAULT_RANGE)?,
            }),
            other => TransformSpec::Passthrough(other),
        };
        Ok(spec)
    }

    pub fn chart_type(&self) -> ChartType {
        match self {
            TransformSpec::Passthrough(t) => *t,
            TransformSpec::HeikinAshi => ChartType::HeikinAshi,
            TransformSpec::Renko(_) => ChartType::Renko,
            TransformSpec::LineBreak(_) => ChartType::LineBreak,
            TransformSpec::Kagi(_) => ChartType::Kagi,
            TransformSpec::PointFigure(_) => ChartType::PointFigure,
            TransformSpec::Range(_) => ChartType::Range,
        }
    }
}

fn positive(name: &'static str, value: Option<f64>, default: f64) -> Result<f64> {
    let v = value.unwrap_or(default);
    if !v.is_finite() {
        return Err(TransformError::InvalidOption { name, value: v, reason: "must be finite" });
    }
    if v <= 0.0 {
        return Err(TransformError::InvalidOption { name, value: v, reason: "must be greater than zero" });
    }
    Ok(v)
}

fn nonzero(name: &'static str, value: Option<usize>, default: usize) -> Result<usize> {
    match value.unwrap_or(default) {
        0 => Err(TransformError::InvalidOption { name, value: 0.0, reason: "must be at least 1" }),
        n => Ok(n),
    }
}

fn max_catch_up(options: &TransformOptions) -> Result<usize> {
    nonzero("max_catch_up", options.max_catch_up, DEFAULT_MAX_CATCH_UP)
}

fn kagi_reversal(value: Option<f64>) -> Result<f64> {
    let v = positive("reversal", value, DEFAULT_KAGI_REVERSAL)?;
    if v >= 100.0 {
        return Err(TransformError::InvalidOption { name: "reversal", value: v, reason: "percentage must be below 100" });
    }
    Ok(v)
}

fn box_reversal(value: Option<f64>) -> Result<u32> {
    let v = positive("reversal", value, DEFAULT_PF_REVERSAL as f64)?;
    if v.fract() != 0.0 || v > u32::MAX as f64 {
        return Err(TransformError::InvalidOption { name: "reversal", value: v, reason: "must be a whole number of boxes" });
    }
    Ok(v as u32)
}
