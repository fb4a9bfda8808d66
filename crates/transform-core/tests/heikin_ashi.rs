// File: crates/transform-core/tests/heikin_ashi.rs
// Purpose: Heikin-Ashi values, bounds and the end-to-end pipeline scenario.

use transform_core::transform::heikin_ashi;
use transform_core::{transform_bars, Bar, ChartType, CollisionPolicy, TransformOptions};

fn scenario() -> Vec<Bar> {
    vec![
        Bar::new(0, 10.0, 12.0, 9.0, 11.0),
        Bar::new(60, 11.0, 11.0, 8.0, 8.5),
        Bar::new(120, 8.5, 9.0, 7.0, 7.2),
    ]
}

#[test]
fn end_to_end_three_bars() {
    let data = transform_bars(&scenario(), ChartType::HeikinAshi, &TransformOptions::default(), CollisionPolicy::ShiftForward)
        .expect("transform");
    assert_eq!(data.bars.len(), 3);
    assert!(data.warnings.is_empty());

    let first = data.bars[0];
    assert_eq!(first.time, 0);
    assert_eq!(first.open, 10.5);
    assert_eq!(first.close, 10.5);
    assert_eq!(first.high, 12.0);
    assert_eq!(first.low, 9.0);
}

#[test]
fn open_chains_from_previous_ha_bar() {
    let ha = heikin_ashi(&scenario());
    // bar 1: open = avg(10.5, 10.5), close = (11+11+8+8.5)/4
    assert_eq!(ha[1].open, 10.5);
    assert!((ha[1].close - 9.625).abs() < 1e-12);
    assert_eq!(ha[1].high, 11.0);
    assert_eq!(ha[1].low, 8.0);
    // bar 2: open = avg(10.5, 9.625)
    assert!((ha[2].open - 10.0625).abs() < 1e-12);
}

#[test]
fn bounds_hold_for_every_bar() {
    let bars = vec![
        Bar::new(1, 5.0, 5.1, 4.9, 5.0),
        Bar::new(2, 5.0, 9.0, 5.0, 8.9),
        Bar::new(3, 8.9, 8.9, 1.0, 1.2),
        Bar::new(4, 1.2, 1.3, 1.1, 1.25),
    ];
    for b in heikin_ashi(&bars) {
        assert!(b.low <= b.open.min(b.close), "{b:?}");
        assert!(b.high >= b.open.max(b.close), "{b:?}");
    }
}

#[test]
fn empty_input_is_empty_output() {
    assert!(heikin_ashi(&[]).is_empty());
}
