// File: crates/transform-core/tests/line_break.rs
// Purpose: Line Break N-line reversal and dropped continuation bars.

use transform_core::options::LineBreakParams;
use transform_core::transform::line_break;
use transform_core::Bar;

fn series(first: (f64, f64), closes: &[f64]) -> Vec<Bar> {
    let (o, c) = first;
    let mut v = vec![Bar::new(0, o, o.max(c), o.min(c), c)];
    v.extend(closes.iter().enumerate().map(|(i, &c)| Bar::new((i as i64 + 1) * 60, c, c, c, c)));
    v
}

fn opens_closes(bars: &[Bar]) -> Vec<(f64, f64)> {
    bars.iter().map(|b| (b.open, b.close)).collect()
}

#[test]
fn three_line_break_sequence() {
    let bars = series((10.0, 11.0), &[12.0, 11.5, 13.0, 9.5, 9.0, 12.0, 14.0]);
    let out = line_break(&bars, &LineBreakParams { line_count: 3 });
    // 12, 11.5 and 13 stay above the first line; 9.0 and 14.0 run on after a reversal
    assert_eq!(opens_closes(&out), vec![(10.0, 11.0), (11.0, 9.5), (9.5, 12.0)]);
    // dropped bars leave no trace; emitted lines keep the source time
    let times: Vec<i64> = out.iter().map(|b| b.time).collect();
    assert_eq!(times, vec![0, 240, 360]);
}

#[test]
fn continuation_draws_no_new_line() {
    let bars = series((10.0, 11.0), &[12.0, 13.0, 14.0]);
    let out = line_break(&bars, &LineBreakParams { line_count: 3 });
    assert_eq!(opens_closes(&out), vec![(10.0, 11.0)]);

    let bars = series((11.0, 10.0), &[9.0, 8.0]);
    assert_eq!(line_break(&bars, &LineBreakParams::default()).len(), 1);
}

#[test]
fn first_bar_is_emitted_unchanged() {
    let bars = vec![Bar::new(5, 3.0, 4.0, 1.0, 2.0)];
    let out = line_break(&bars, &LineBreakParams::default());
    assert_eq!(out, bars);
}

#[test]
fn reversal_needs_to_break_the_recent_extreme() {
    // first line spans 10..11; 10.2 stays inside it, 9.9 breaks below
    let bars = series((10.0, 11.0), &[10.2, 9.9, 10.5, 11.2]);
    let out = line_break(&bars, &LineBreakParams { line_count: 3 });
    // back up needs a close above 11, the highest of the recent lines
    assert_eq!(opens_closes(&out), vec![(10.0, 11.0), (11.0, 9.9), (9.9, 11.2)]);
    assert_eq!(out[1], Bar::new(120, 11.0, 11.0, 9.9, 9.9));
}

#[test]
fn output_bars_satisfy_ohlc_bounds() {
    let bars = series((10.0, 9.0), &[8.0, 8.5, 10.5, 12.0, 7.0, 6.0, 13.0]);
    for b in line_break(&bars, &LineBreakParams { line_count: 2 }) {
        assert!(b.is_valid(), "{b:?}");
    }
}

#[test]
fn long_runs_keep_working_with_bounded_history() {
    // widening zigzag: every bar breaks the previous extreme the other way
    let closes: Vec<f64> = (1..200)
        .map(|i| if i % 2 == 1 { 1000.0 - i as f64 } else { 1000.0 + i as f64 })
        .collect();
    let out = line_break(&series((1000.0, 1000.5), &closes), &LineBreakParams { line_count: 2 });
    assert_eq!(out.len(), 200);
    assert!(out[1..].windows(2).all(|w| w[0].close == w[1].open));

    // a straight run never leaves the first line
    let rising: Vec<f64> = (1..200).map(|i| 100.0 + i as f64).collect();
    assert_eq!(line_break(&series((100.0, 100.5), &rising), &LineBreakParams { line_count: 2 }).len(), 1);
}

#[test]
fn empty_input_is_empty_output() {
    assert!(line_break(&[], &LineBreakParams::default()).is_empty());
}
