// File: crates/transform-core/src/transform/mod.rs
// Summary: Chart-style transforms and the dispatch from a resolved `TransformSpec`.

pub mod heikin_ashi;
pub mod kagi;
pub mod line_break;
pub mod point_figure;
pub mod range;
pub mod renko;

pub use heikin_ashi::heikin_ashi;
pub use kagi::kagi;
pub use line_break::line_break;
pub use point_figure::point_figure;
pub use range::range_bars;
pub use renko::renko;

use crate::bar::Bar;
use crate::options::TransformSpec;
use crate::warning::TransformWarning;

/// Output of one transform call, before ordering/de-duplication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transformed {
    pub bars: Vec<Bar>,
    pub warnings: Vec<TransformWarning>,
}

impl From<Vec<Bar>> for Transformed {
    fn from(bars: Vec<Bar>) -> Self {
        Self { bars, warnings: Vec::new() }
    }
}

/// Dispatch `bars` to the transform selected by `spec`.
/// Rendering-only styles return the input unchanged.
pub fn apply(bars: &[Bar], spec: &TransformSpec) -> Transformed {
    match spec {
        TransformSpec::Passthrough(_) => bars.to_vec().into(),
        TransformSpec::HeikinAshi => heikin_ashi(bars).into(),
        TransformSpec::Renko(p) => renko(bars, p),
        TransformSpec::LineBreak(p) => line_break(bars, p).into(),
        TransformSpec::Kagi(p) => kagi(bars, p).into(),
        TransformSpec::PointFigure(p) => point_figure(bars, p),
        TransformSpec::Range(p) => range_bars(bars, p).into(),
    }
}
