// File: crates/transform-core/tests/service.rs
// Purpose: Mock source, chart-data service, timeframes, resampling, timestamps and TOML config.

use rand::rngs::StdRng;
use rand::SeedableRng;
use transform_core::{
    change_chart_type, get_chart_data, parse_timestamp, realtime_update, resample, Bar, BarSource, ChartDataRequest,
    ChartType, CollisionPolicy, MockBarSource, PipelineConfig, Timeframe, TransformError, TransformOptions,
};

const START: i64 = 1_700_000_000;

#[test]
fn mock_source_is_deterministic_and_ordered() {
    let mut a = MockBarSource::seeded(7, 100.0, 2.0).with_start_time(START);
    let mut b = MockBarSource::seeded(7, 100.0, 2.0).with_start_time(START);
    let tf: Timeframe = "5 minutes".parse().expect("tf");
    let xs = a.fetch("AAPL", tf, 200).expect("fetch");
    let ys = b.fetch("AAPL", tf, 200).expect("fetch");
    assert_eq!(xs, ys);
    assert_eq!(xs.len(), 200);
    assert_eq!(xs[0].time, START);
    assert_eq!(xs[0].open, 100.0);
    for w in xs.windows(2) {
        assert_eq!(w[1].time - w[0].time, 300);
        assert_eq!(w[1].open, w[0].close);
    }
    for bar in &xs {
        assert!(bar.is_valid(), "{bar:?}");
        assert!(bar.close >= 0.1);
    }
}

#[test]
fn get_chart_data_fetches_and_transforms() {
    let mut source = MockBarSource::seeded(42, 100.0, 2.0).with_start_time(START);
    let request = ChartDataRequest::new("BTCUSD", Timeframe::MINUTE, ChartType::Renko)
        .with_count(300)
        .with_options(TransformOptions::default().with_brick_size(0.5));
    let data = get_chart_data(&mut source, &request, CollisionPolicy::ShiftForward).expect("chart data");
    assert_eq!(data.chart_type, ChartType::Renko);
    assert!(!data.bars.is_empty());
    assert!(data.bars.windows(2).all(|w| w[0].time < w[1].time));
}

#[test]
fn request_count_defaults_to_500() {
    let mut source = MockBarSource::seeded(1, 50.0, 1.0).with_start_time(START);
    let request = ChartDataRequest::new("ETH", Timeframe::MINUTE, ChartType::Candles);
    let data = get_chart_data(&mut source, &request, CollisionPolicy::Reject).expect("chart data");
    assert_eq!(data.bars.len(), 500);
}

#[test]
fn change_chart_type_reuses_raw_bars() {
    let raw = MockBarSource::seeded(3, 100.0, 2.0).with_start_time(START).generate(120, Timeframe::MINUTE);
    let ha = change_chart_type(&raw, ChartType::HeikinAshi, &TransformOptions::default()).expect("ha");
    assert_eq!(ha.bars.len(), raw.len());
    let candles = change_chart_type(&raw, ChartType::Candles, &TransformOptions::default()).expect("candles");
    assert_eq!(candles.bars, raw);
}

#[test]
fn request_deserializes_from_client_json_shape() {
    let req: ChartDataRequest = toml::from_str(
        r#"
        symbol = "AAPL"
        timeframe = "15 minutes"
        chartType = "point_figure"
        [chartOptions]
        boxSize = 0.5
        reversal = 2
        "#,
    )
    .expect("request");
    assert_eq!(req.timeframe.seconds(), 900);
    assert_eq!(req.chart_type, ChartType::PointFigure);
    assert_eq!(req.options.box_size, Some(0.5));
    assert_eq!(req.options.reversal, Some(2.0));
    assert_eq!(req.count, None);
}

#[test]
fn realtime_update_keeps_time_and_open() {
    let mut rng = StdRng::seed_from_u64(9);
    let last = Bar::new(START, 10.0, 10.4, 9.8, 10.1);
    for _ in 0..50 {
        let next = realtime_update(&last, &mut rng);
        assert_eq!(next.time, last.time);
        assert_eq!(next.open, last.open);
        assert!((next.close - last.close).abs() <= 0.5);
        assert!(next.is_valid());
        assert!(next.high >= last.high && next.low <= last.low);
    }
}

#[test]
fn timeframe_labels() {
    let cases = [
        ("1 minute", 60),
        ("15 minutes", 900),
        ("2 hours", 7_200),
        ("1 day", 86_400),
        ("30 seconds", 30),
        ("4h", 14_400),
        ("minute", 60),
        ("3 fortnights", 60),
    ];
    for (label, seconds) in cases {
        assert_eq!(label.parse::<Timeframe>().expect(label).seconds(), seconds, "{label}");
    }
    assert!("0 minutes".parse::<Timeframe>().is_err());
    assert_eq!(Timeframe::from_seconds(7_200).expect("tf").to_string(), "2 hours");
    assert_eq!(Timeframe::MINUTE.to_string(), "1 minute");
}

#[test]
fn resample_buckets_by_timeframe() {
    let bars = vec![
        Bar::new(0, 1.0, 2.0, 0.5, 1.5),
        Bar::new(60, 1.5, 3.0, 1.4, 2.5),
        Bar::new(300, 2.5, 2.6, 2.0, 2.1),
        Bar::new(420, 2.1, 2.2, 1.0, 1.1),
    ];
    let out = resample(&bars, "5 minutes".parse().expect("tf"));
    assert_eq!(out, vec![Bar::new(0, 1.0, 3.0, 0.5, 2.5), Bar::new(300, 2.5, 2.6, 1.0, 1.1)]);
}

#[test]
fn timestamps_parse_from_epochs_and_dates() {
    assert_eq!(parse_timestamp("1700000000").expect("secs"), 1_700_000_000);
    assert_eq!(parse_timestamp("1700000000000").expect("millis"), 1_700_000_000);
    assert_eq!(parse_timestamp("1970-01-02").expect("date"), 86_400);
    assert_eq!(parse_timestamp("1970-01-01 01:00:00").expect("datetime"), 3_600);
    assert_eq!(parse_timestamp("1970-01-01T00:01:00Z").expect("rfc3339"), 60);
    assert!(matches!(parse_timestamp("yesterday"), Err(TransformError::InvalidTimestamp(_))));
}

#[test]
fn pipeline_config_from_toml() {
    let cfg = PipelineConfig::from_toml_str(
        r#"
        collision = "keep_last"
        [options]
        brick_size = 0.25
        line_count = 3
        "#,
    )
    .expect("config");
    assert_eq!(cfg.collision, CollisionPolicy::KeepLast);
    assert_eq!(cfg.options.brick_size, Some(0.25));
    assert_eq!(cfg.options.line_count, Some(3));
    assert_eq!(cfg.options.box_size, None);

    let back = PipelineConfig::from_toml_str(&cfg.to_toml_string().expect("serialize")).expect("reparse");
    assert_eq!(back, cfg);

    assert!(matches!(PipelineConfig::from_toml_str("colour = 1"), Err(TransformError::Config(_))));
    assert_eq!(PipelineConfig::from_toml_str("").expect("empty"), PipelineConfig::default());
}
