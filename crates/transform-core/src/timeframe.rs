// File: crates/transform-core/src/timeframe.rs
// Summary: Bar interval parsed from labels such as "1 minute", "15 minutes" or "1 day".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Bar interval in whole seconds (always >= 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timeframe {
    seconds: i64,
}

impl Timeframe {
    pub const MINUTE: Timeframe = Timeframe { seconds: 60 };

    pub fn from_seconds(seconds: i64) -> Result<Self, TransformError> {
        if seconds < 1 {
            return Err(TransformError::InvalidTimeframe(format!("{seconds}s")));
        }
        Ok(Self { seconds })
    }

    pub const fn seconds(&self) -> i64 { self.seconds }

    /// Start of the bucket containing `time`.
    pub fn floor(&self, time: i64) -> i64 {
        time - time.rem_euclid(self.seconds)
    }
}

impl Default for Timeframe {
    fn default() -> Self { Self::MINUTE }
}

/// Parses `"<n> <unit>"` or `"<n><unit>"`; a missing count means 1.
/// Units: s/sec/second(s), m/min/minute(s), h/hour(s), d/day(s), w/week(s).
/// An unrecognized unit falls back to one minute.
impl FromStr for Timeframe {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);
        let count: i64 = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| TransformError::InvalidTimeframe(s.clone()))?
        };
        if count == 0 {
            return Err(TransformError::InvalidTimeframe(s.clone()));
        }
        let unit_seconds = match unit.trim() {
            "s" | "sec" | "secs" | "second" | "seconds" => 1,
            "m" | "min" | "mins" | "minute" | "minutes" => 60,
            "h" | "hr" | "hour" | "hours" => 3_600,
            "d" | "day" | "days" => 86_400,
            "w" | "week" | "weeks" => 604_800,
            _ => return Ok(Self::MINUTE),
        };
        count
            .checked_mul(unit_seconds)
            .map(|seconds| Self { seconds })
            .ok_or(TransformError::InvalidTimeframe(s))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.seconds;
        let (n, unit) = if s % 604_800 == 0 {
            (s / 604_800, "week")
        } else if s % 86_400 == 0 {
            (s / 86_400, "day")
        } else if s % 3_600 == 0 {
            (s / 3_600, "hour")
        } else if s % 60 == 0 {
            (s / 60, "minute")
        } else {
            (s, "second")
        };
        if n == 1 { write!(f, "1 {unit}") } else { write!(f, "{n} {unit}s") }
    }
}

impl TryFrom<String> for Timeframe {
    type Error = TransformError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self { tf.to_string() }
}
