// File: crates/transform-core/src/error.rs
// Summary: Library error type shared by transforms, normalization, config and the service layer.

use thiserror::Error;

/// The unified error type for the `transform_core` crate.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A transform option is out of range (non-positive, non-finite or zero count).
    #[error("invalid option `{name}` = {value}: {reason}")]
    InvalidOption {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An input bar cannot be transformed.
    #[error("invalid bar at index {index}: {reason}")]
    InvalidBar { index: usize, reason: &'static str },

    /// Two output bars share a timestamp and the collision policy rejects it.
    #[error("timestamp collision at {time}")]
    TimestampCollision { time: i64 },

    #[error("unknown chart type: {0}")]
    UnknownChartType(String),

    #[error("invalid timeframe: {0}")]
    InvalidTimeframe(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The bar source failed to produce data.
    #[error("bar source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
