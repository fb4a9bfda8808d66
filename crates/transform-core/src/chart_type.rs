// File: crates/transform-core/src/chart_type.rs
// Summary: Chart type identifiers (rendering styles and data-transforming styles).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Candles,
    Bars,          // OHLC bar (no filled body)
    Line,
    Area,
    Baseline,
    HollowCandles,
    HeikinAshi,
    Renko,
    LineBreak,
    Kagi,
    PointFigure,
    Range,
}

impl ChartType {
    pub const ALL: [ChartType; 12] = [
        ChartType::Candles,
        ChartType::Bars,
        ChartType::Line,
        ChartType::Area,
        ChartType::Baseline,
        ChartType::HollowCandles,
        ChartType::HeikinAshi,
        ChartType::Renko,
        ChartType::LineBreak,
        ChartType::Kagi,
        ChartType::PointFigure,
        ChartType::Range,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ChartType::Candles => "candles",
            ChartType::Bars => "bars",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Baseline => "baseline",
            ChartType::HollowCandles => "hollow_candles",
            ChartType::HeikinAshi => "heikin_ashi",
            ChartType::Renko => "renko",
            ChartType::LineBreak => "line_break",
            ChartType::Kagi => "kagi",
            ChartType::PointFigure => "point_figure",
            ChartType::Range => "range",
        }
    }

    /// Styles that only differ in how the renderer draws the same OHLC data.
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            ChartType::Candles
                | ChartType::Bars
                | ChartType::Line
                | ChartType::Area
                | ChartType::Baseline
                | ChartType::HollowCandles
        )
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for ChartType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ChartType::ALL
            .into_iter()
            .find(|t| t.id() == want)
            .ok_or_else(|| TransformError::UnknownChartType(s.to_string()))
    }
}
