// File: crates/transform-core/src/transform/line_break.rs
// Summary: Line Break (N-line break) chart; a new line is drawn only on an N-line reversal.

use std::collections::VecDeque;

use crate::bar::Bar;
use crate::options::LineBreakParams;
use crate::types::LINE_HISTORY_FACTOR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trend {
    Up,
    Down,
}

/// A committed line: where it opened and closed.
#[derive(Clone, Copy, Debug)]
struct Line {
    open: f64,
    close: f64,
}

impl Line {
    fn high(&self) -> f64 { self.open.max(self.close) }
    fn low(&self) -> f64 { self.open.min(self.close) }
}

struct LineBreakState {
    lines: VecDeque<Line>,
    trend: Trend,
    line_count: usize,
}

impl LineBreakState {
    fn last(&self) -> Line {
        // Never empty: seeded with the first bar and only trimmed from the front.
        self.lines[self.lines.len() - 1]
    }

    /// Lines a reversal has to break: the most recent `line_count`, or all if fewer.
    fn recent(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().rev().take(self.line_count)
    }

    fn commit(&mut self, line: Line, trend: Trend) {
        self.lines.push_back(line);
        self.trend = trend;
        while self.lines.len() > self.line_count * LINE_HISTORY_FACTOR {
            self.lines.pop_front();
        }
    }
}

/// Line Break transform. The first bar is emitted as-is and seeds the trend
/// (up when close >= open). Only reversals emit: bars that run on in the
/// current direction or stay inside the recent lines are dropped, and the
/// latest line is never rewritten in place.
pub fn line_break(bars: &[Bar], params: &LineBreakParams) -> Vec<Bar> {
    let Some(first) = bars.first() else { return Vec::new() };
    let mut out = vec![*first];
    let mut state = LineBreakState {
        lines: VecDeque::from([Line { open: first.open, close: first.close }]),
        trend: if first.close >= first.open { Trend::Up } else { Trend::Down },
        line_count: params.line_count,
    };

    for b in &bars[1..] {
        let last = state.last();
        let next = match state.trend {
            Trend::Up if b.close > last.close => None,
            Trend::Down if b.close < last.close => None,
            Trend::Up => {
                let floor = state.recent().map(Line::low).fold(f64::INFINITY, f64::min);
                (b.close < floor).then_some(Trend::Down)
            }
            Trend::Down => {
                let ceiling = state.recent().map(Line::high).fold(f64::NEG_INFINITY, f64::max);
                (b.close > ceiling).then_some(Trend::Up)
            }
        };
        let Some(trend) = next else { continue };

        let line = Line { open: last.close, close: b.close };
        out.push(Bar::new(b.time, line.open, line.high(), line.low(), line.close));
        state.commit(line, trend);
    }
    out
}
