// File: crates/transform-core/src/bar.rs
// Summary: OHLC bar model shared by every transform.

use serde::{Deserialize, Serialize};

/// One open/high/low/close sample stamped with epoch seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Construct without checks. Transforms use this for bars whose bounds
    /// they compute themselves.
    pub const fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { time, open, high, low, close }
    }

    /// Try to construct a bar enforcing OHLC invariants:
    /// finite prices, l <= min(o,c), h >= max(o,c), and l <= h.
    pub fn try_new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Result<Self, &'static str> {
        let bar = Self { time, open, high, low, close };
        bar.check()?;
        Ok(bar)
    }

    /// Validate the OHLC invariants, returning the first violated one.
    pub fn check(&self) -> Result<(), &'static str> {
        if !self.is_finite() { return Err("non-finite price"); }
        if self.low > self.open.min(self.close) { return Err("low above min(open,close)"); }
        if self.high < self.open.max(self.close) { return Err("high below max(open,close)"); }
        if self.low > self.high { return Err("low above high"); }
        Ok(())
    }

    pub fn is_valid(&self) -> bool { self.check().is_ok() }

    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }

    /// Close strictly above open.
    pub fn is_up(&self) -> bool { self.close > self.open }

    /// High-low span.
    pub fn span(&self) -> f64 { self.high - self.low }

    /// Copy of this bar restamped at `time`.
    pub fn with_time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }
}

/// True when times are strictly ascending (no duplicates).
pub fn is_strictly_ascending(bars: &[Bar]) -> bool {
    bars.windows(2).all(|w| w[0].time < w[1].time)
}
