// File: crates/transform-core/src/source.rs
// Summary: Bar source seam plus a seedable random-walk mock and realtime tick simulator.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::bar::Bar;
use crate::error::Result;
use crate::timeframe::Timeframe;

/// Floor applied to every generated price.
const MIN_PRICE: f64 = 0.1;
/// Largest absolute close change produced by [`realtime_update`].
const REALTIME_STEP: f64 = 1.0;
/// Hour (UTC) the mock session opens when no start time is given.
const SESSION_OPEN_HOUR: u32 = 9;

/// Produces raw, ascending OHLC bars for a symbol and timeframe.
pub trait BarSource {
    fn fetch(&mut self, symbol: &str, timeframe: Timeframe, count: usize) -> Result<Vec<Bar>>;
}

/// Random-walk bar generator.
pub struct MockBarSource {
    pub start_price: f64,
    pub volatility: f64,
    /// First bar time; `None` means today's session open.
    pub start_time: Option<i64>,
    rng: StdRng,
}

impl MockBarSource {
    pub fn new(start_price: f64, volatility: f64) -> Self {
        Self { start_price, volatility, start_time: None, rng: StdRng::from_os_rng() }
    }

    /// Deterministic generator for tests and reproducible demos.
    pub fn seeded(seed: u64, start_price: f64, volatility: f64) -> Self {
        Self { start_price, volatility, start_time: None, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn with_start_time(mut self, time: i64) -> Self {
        self.start_time = Some(time);
        self
    }

    /// Generate `count` bars spaced one `timeframe` apart.
    pub fn generate(&mut self, count: usize, timeframe: Timeframe) -> Vec<Bar> {
        let start = self.start_time.unwrap_or_else(session_open_today);
        let step = timeframe.seconds();
        let half_vol = self.volatility / 2.0;
        let mut last_close = self.start_price.max(MIN_PRICE);
        let mut out = Vec::with_capacity(count);

        for i in 0..count {
            let change = (self.rng.random::<f64>() - 0.5) * self.volatility;
            let open = last_close;
            let close = (open + change).max(MIN_PRICE);
            let high = open.max(close) + self.rng.random::<f64>() * half_vol;
            let low = open.min(close) - self.rng.random::<f64>() * half_vol;
            out.push(Bar::new(start + i as i64 * step, open, high, low, close));
            last_close = close;
        }
        out
    }
}

impl BarSource for MockBarSource {
    fn fetch(&mut self, symbol: &str, timeframe: Timeframe, count: usize) -> Result<Vec<Bar>> {
        debug!(symbol, %timeframe, count, "generating mock bars");
        Ok(self.generate(count, timeframe))
    }
}

/// Simulate a tick on the last bar: close moves by up to ±0.5, high/low widen
/// to contain it, time and open are kept.
pub fn realtime_update<R: Rng>(last: &Bar, rng: &mut R) -> Bar {
    let change = (rng.random::<f64>() - 0.5) * REALTIME_STEP;
    let close = (last.close + change).max(MIN_PRICE);
    Bar::new(last.time, last.open, last.high.max(close), last.low.min(close), close)
}

fn session_open_today() -> i64 {
    Utc::now()
        .date_naive()
        .and_hms_opt(SESSION_OPEN_HOUR, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_else(|| Utc::now().timestamp())
}
