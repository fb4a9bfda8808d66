// File: crates/demo/src/main.rs
// Summary: Demo loads OHLC CSV (or generates mock bars), applies a chart style and writes the result as CSV.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use transform_core::{
    parse_timestamp, resample, transform_bars, Bar, ChartType, CollisionPolicy, MockBarSource, PipelineConfig,
    Timeframe, TransformOptions,
};

#[derive(Debug, Parser)]
#[command(name = "transform-demo", about = "Convert OHLC bars into alternative chart styles")]
struct Cli {
    /// OHLC CSV to read (.csv/.cvs extensions are tried interchangeably).
    #[arg(long, short = 'i')]
    input: Option<String>,

    /// Generate this many mock bars instead of reading a file.
    #[arg(long, conflicts_with = "input")]
    mock: Option<usize>,

    /// Seed for the mock generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Bar interval of generated data.
    #[arg(long, default_value = "1 minute")]
    timeframe: Timeframe,

    /// Aggregate input bars to this timeframe before transforming.
    #[arg(long)]
    resample: Option<Timeframe>,

    /// Target style: candles, heikin_ashi, renko, line_break, kagi, point_figure, range, ...
    #[arg(long, short = 't', default_value = "heikin_ashi")]
    chart_type: ChartType,

    /// TOML file with `collision` and an `[options]` table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// shift_forward | keep_last | reject (overrides the config file).
    #[arg(long, value_parser = parse_policy)]
    collision: Option<CollisionPolicy>,

    #[arg(long)]
    brick_size: Option<f64>,
    #[arg(long)]
    line_count: Option<usize>,
    #[arg(long)]
    reversal: Option<f64>,
    #[arg(long)]
    box_size: Option<f64>,
    #[arg(long)]
    range: Option<f64>,
    #[arg(long)]
    max_catch_up: Option<usize>,

    /// Output CSV; defaults to target/out/<stem>_<chart type>.csv.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl Cli {
    fn flag_options(&self) -> TransformOptions {
        TransformOptions {
            brick_size: self.brick_size,
            line_count: self.line_count,
            reversal: self.reversal,
            box_size: self.box_size,
            range: self.range,
            max_catch_up: self.max_catch_up,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(p) => PipelineConfig::load(p).with_context(|| format!("loading config '{}'", p.display()))?,
        None => PipelineConfig::default(),
    };
    let options = cli.flag_options().or(&config.options);
    let policy = cli.collision.unwrap_or(config.collision);

    let (mut bars, stem) = match (&cli.input, cli.mock) {
        (Some(raw), _) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!("Using input file: {}", path.display());
            if used_alt {
                info!("  (extension swapped between .csv/.cvs)");
            }
            let file = std::fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
            let bars = load_ohlc_csv(file).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (bars, stem)
        }
        (None, count) => {
            let count = count.unwrap_or(500);
            let bars = MockBarSource::seeded(cli.seed, 100.0, 2.0).generate(count, cli.timeframe);
            (bars, format!("mock_{}", cli.seed))
        }
    };
    info!("Loaded {} bars", bars.len());
    if bars.is_empty() {
        anyhow::bail!("no bars loaded; check headers/delimiter.");
    }

    if let Some(tf) = cli.resample {
        bars = resample(&bars, tf);
        info!("Resampled to {} ({} bars)", tf, bars.len());
    }

    let data = transform_bars(&bars, cli.chart_type, &options, policy)
        .with_context(|| format!("transforming to {}", cli.chart_type))?;
    for w in &data.warnings {
        warn!("{w}");
    }

    let (min_p, max_p) = minmax_price(&data.bars);
    info!("{}: {} -> {} bars, price range [{:.4}, {:.4}]", cli.chart_type, bars.len(), data.bars.len(), min_p, max_p);

    let out = cli.output.clone().unwrap_or_else(|| out_name_with(&stem, cli.chart_type));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let file = std::fs::File::create(&out).with_context(|| format!("creating {}", out.display()))?;
    write_ohlc_csv(file, &data.bars)?;
    info!("Wrote {}", out.display());
    Ok(())
}

fn parse_policy(s: &str) -> Result<CollisionPolicy, String> {
    match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "shift_forward" | "shift" => Ok(CollisionPolicy::ShiftForward),
        "keep_last" | "last" => Ok(CollisionPolicy::KeepLast),
        "reject" => Ok(CollisionPolicy::Reject),
        other => Err(format!("unknown collision policy '{other}'")),
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/<stem>_<chart type>.csv
fn out_name_with(stem: &str, chart_type: ChartType) -> PathBuf {
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("bars_{}.csv", chart_type));
    } else {
        out.push(format!("{}_{}.csv", short, chart_type));
    }
    out
}

/// Load Binance-like OHLC CSV into bars. Rows without a parsable time are
/// numbered by position; rows missing a price or breaking OHLC bounds are skipped.
fn load_ohlc_csv<R: Read>(reader: R) -> Result<Vec<Bar>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };

    // Common Binance headers
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("Could not find one of open/high/low/close columns.");
    }

    let mut out = Vec::new();
    let mut row_index = 0_i64;

    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok()) };

        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(|s| parse_timestamp(s).ok())
            .unwrap_or(row_index);
        row_index += 1;

        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            match Bar::try_new(t, o, h, l, c) {
                Ok(bar) => out.push(bar),
                Err(reason) => warn!("Skipping row {}: {}", row_index - 1, reason),
            }
        }
    }
    Ok(out)
}

fn write_ohlc_csv<W: Write>(writer: W, bars: &[Bar]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for b in bars {
        wtr.serialize(b)?;
    }
    wtr.flush()?;
    Ok(())
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn minmax_price(c: &[Bar]) -> (f64, f64) {
    let mut min_p = f64::INFINITY;
    let mut max_p = f64::NEG_INFINITY;
    for k in c {
        min_p = min_p.min(k.low);
        max_p = max_p.max(k.high);
    }
    (min_p, max_p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_binance_style_csv() {
        let csv = "Open_Time,Open,High,Low,Close,Volume\n\
                   1700000000000,10,12,9,11,5\n\
                   1700000060000,11,11,8,8.5,7\n\
                   2023-11-14,8.5,9,7,7.2,1\n";
        let bars = load_ohlc_csv(csv.as_bytes()).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0], Bar::new(1_700_000_000, 10.0, 12.0, 9.0, 11.0));
        assert_eq!(bars[1].time, 1_700_000_060);
        assert_eq!(bars[2].time, 1_699_920_000);
    }

    #[test]
    fn rows_without_time_column_are_numbered() {
        let csv = "o,h,l,c\n1,2,0.5,1.5\nbad,2,1,1\n1.5,3,1,2\n";
        let bars = load_ohlc_csv(csv.as_bytes()).unwrap();
        assert_eq!(bars.iter().map(|b| b.time).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn rows_breaking_ohlc_bounds_are_skipped() {
        let csv = "time,open,high,low,close\n60,10,12,9,11\n120,10,9,8,11\n180,inf,12,9,11\n240,11,13,10,12\n";
        let bars = load_ohlc_csv(csv.as_bytes()).unwrap();
        assert_eq!(bars.iter().map(|b| b.time).collect::<Vec<_>>(), vec![60, 240]);
    }

    #[test]
    fn written_csv_has_bar_headers() {
        let mut buf = Vec::new();
        write_ohlc_csv(&mut buf, &[Bar::new(60, 1.0, 2.0, 0.5, 1.5)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "time,open,high,low,close\n60,1.0,2.0,0.5,1.5\n");
    }

    #[test]
    fn collision_policy_flag() {
        assert_eq!(parse_policy("keep-last"), Ok(CollisionPolicy::KeepLast));
        assert_eq!(parse_policy("shift"), Ok(CollisionPolicy::ShiftForward));
        assert!(parse_policy("merge").is_err());
    }

    #[test]
    fn flags_override_config_options() {
        let cli = Cli::parse_from(["transform-demo", "--mock", "10", "-t", "renko", "--brick-size", "2"]);
        let config = PipelineConfig::from_toml_str("[options]\nbrick_size = 0.5\nbox_size = 3.0\n").unwrap();
        let merged = cli.flag_options().or(&config.options);
        assert_eq!(merged.brick_size, Some(2.0));
        assert_eq!(merged.box_size, Some(3.0));
        assert_eq!(cli.chart_type, ChartType::Renko);
    }
}
