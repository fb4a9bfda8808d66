// File: crates/transform-core/src/time.rs
// Summary: Timestamp parsing (epoch seconds/millis and exchange-style date strings).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, TransformError};

/// Epoch values above this are taken as milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Parse a timestamp into epoch seconds (UTC).
///
/// Accepts integer epoch seconds, integer epoch milliseconds, `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS` (or with a `T`) and RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<i64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TransformError::InvalidTimestamp(s.to_string()));
    }
    if let Ok(n) = s.parse::<i64>() {
        return Ok(if n > EPOCH_MILLIS_THRESHOLD { n / 1000 } else { n });
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() {
            let n = f.trunc() as i64;
            return Ok(if n > EPOCH_MILLIS_THRESHOLD { n / 1000 } else { n });
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    Err(TransformError::InvalidTimestamp(s.to_string()))
}
