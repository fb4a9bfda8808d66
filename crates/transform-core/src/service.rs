// File: crates/transform-core/src/service.rs
// Summary: Chart-data service: fetch raw bars from a source and run the transform pipeline.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bar::Bar;
use crate::chart_type::ChartType;
use crate::error::Result;
use crate::normalize::CollisionPolicy;
use crate::options::TransformOptions;
use crate::pipeline::{transform_bars, ChartData};
use crate::source::BarSource;
use crate::timeframe::Timeframe;
use crate::types::DEFAULT_BAR_COUNT;

/// What the chart wants to display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDataRequest {
    pub symbol: String,
    #[serde(default)]
    pub timeframe: Timeframe,
    /// Number of raw bars to fetch; defaults to 500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(alias = "chartType")]
    pub chart_type: ChartType,
    #[serde(default, alias = "chartOptions")]
    pub options: TransformOptions,
}

impl ChartDataRequest {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe, chart_type: ChartType) -> Self {
        Self { symbol: symbol.into(), timeframe, count: None, chart_type, options: TransformOptions::default() }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }
}

/// Fetch raw bars for `request` and transform them into its chart type.
pub fn get_chart_data<S: BarSource + ?Sized>(
    source: &mut S,
    request: &ChartDataRequest,
    policy: CollisionPolicy,
) -> Result<ChartData> {
    let count = request.count.unwrap_or(DEFAULT_BAR_COUNT);
    let raw = source.fetch(&request.symbol, request.timeframe, count)?;
    info!(symbol = %request.symbol, timeframe = %request.timeframe, chart_type = %request.chart_type, bars = raw.len(), "chart data request");
    transform_bars(&raw, request.chart_type, &request.options, policy)
}

/// Re-transform already loaded raw bars for a new chart type without refetching.
pub fn change_chart_type(raw: &[Bar], chart_type: ChartType, options: &TransformOptions) -> Result<ChartData> {
    transform_bars(raw, chart_type, options, CollisionPolicy::default())
}
