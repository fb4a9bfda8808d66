// File: crates/transform-core/src/lib.rs
// Summary: Core library entry point; exports the bar model, chart-style transforms and the chart-data service.

pub mod bar;
pub mod chart_type;
pub mod config;
pub mod error;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod resample;
pub mod service;
pub mod source;
pub mod time;
pub mod timeframe;
pub mod transform;
pub mod types;
pub mod warning;

pub use bar::Bar;
pub use chart_type::ChartType;
pub use config::PipelineConfig;
pub use error::{Result, TransformError};
pub use normalize::{normalize, CollisionPolicy};
pub use options::{TransformOptions, TransformSpec};
pub use pipeline::{transform_bars, ChartData};
pub use resample::resample;
pub use service::{change_chart_type, get_chart_data, ChartDataRequest};
pub use source::{realtime_update, BarSource, MockBarSource};
pub use time::parse_timestamp;
pub use timeframe::Timeframe;
pub use transform::{apply, Transformed};
pub use warning::TransformWarning;
