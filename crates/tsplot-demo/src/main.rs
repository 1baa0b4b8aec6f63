// File: crates/tsplot-demo/src/main.rs
// Summary: Demo loads named numeric columns from a CSV and renders them as one multi-series PNG.
// Usage: tsplot-demo <file.csv> [column ...] [--join] [--bounds=MIN,MAX] [--diff=COLUMN] [--theme=NAME] [--out=PATH]

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tsplot_core::{abs_diff, theme, Chart, DataSeries, PlotConfig, PlotMetadata};

#[derive(Default)]
struct Args {
    input: PathBuf,
    columns: Vec<String>,
    join: bool,
    bounds: Option<(f64, f64)>,
    diff: Option<String>,
    theme: Option<String>,
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = parse_args(std::env::args().skip(1))?;
    log::info!("using input file: {}", args.input.display());

    let table = load_columns(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    log::info!("loaded {} rows, columns: {:?}", table.rows, table.names);
    if table.rows == 0 {
        bail!("no rows loaded - check headers/delimiter.");
    }

    let wanted: Vec<String> = if args.columns.is_empty() {
        table.names.clone()
    } else {
        args.columns.iter().map(|c| c.to_lowercase()).collect()
    };

    let theme = theme::find(args.theme.as_deref().unwrap_or("dark"));
    let mut chart = Chart::new();
    for (slot, name) in wanted.iter().enumerate() {
        let values = table
            .column(name)
            .with_context(|| format!("column '{name}' not found"))?;
        let mut series = DataSeries::filtered(name.as_str(), theme.series_color(slot), values.to_vec(), |v| !v.is_nan());
        if slot == 0 {
            series = series.with_summary(name.as_str());
        }
        if name.contains("volume") {
            series = series.with_integer_scale();
        }
        chart.add_series(series)?;
    }
    if let Some(name) = &args.diff {
        let name = name.to_lowercase();
        let values = table.column(&name).with_context(|| format!("column '{name}' not found"))?;
        let head = values.first().copied().unwrap_or(0.0);
        let slot = chart.series().len();
        chart.add_series(DataSeries::new(format!("|d {name}|"), theme.series_color(slot), abs_diff(values, head)))?;
    }
    if let Some((lo, hi)) = args.bounds {
        chart.join_with_bounds(lo, hi);
    }

    let meta = PlotMetadata::new()
        .with_title(format!("columns: {}", wanted.join(", ")))
        .generated(
            chrono::Local::now().naive_local(),
            format!("{} ({}/{})", hostname(), std::env::consts::OS, std::env::consts::ARCH),
        )
        .with_provenance(describe_source(&args.input));
    chart.set_metadata(meta);

    let cfg = PlotConfig::from_theme(&theme)
        .with_height(700)
        .with_width_factor(4.0)
        .with_font_height(13.0)
        .with_joined_scales(args.join);

    let out = args.out.clone().unwrap_or_else(|| out_name(&args.input));
    chart.render_to_png(&cfg, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut input = None;
    for a in raw {
        if a == "--join" {
            args.join = true;
        } else if let Some(v) = a.strip_prefix("--bounds=") {
            let (lo, hi) = v.split_once(',').context("--bounds expects MIN,MAX")?;
            args.bounds = Some((lo.trim().parse()?, hi.trim().parse()?));
        } else if let Some(v) = a.strip_prefix("--diff=") {
            args.diff = Some(v.to_string());
        } else if let Some(v) = a.strip_prefix("--theme=") {
            args.theme = Some(v.to_string());
        } else if let Some(v) = a.strip_prefix("--out=") {
            args.out = Some(PathBuf::from(v));
        } else if a.starts_with("--") {
            bail!("unknown flag {a}");
        } else if input.is_none() {
            input = Some(PathBuf::from(a));
        } else {
            args.columns.push(a);
        }
    }
    args.input = input.context("usage: tsplot-demo <file.csv> [column ...] [--join] [--bounds=MIN,MAX] [--diff=COLUMN] [--theme=NAME] [--out=PATH]")?;
    if !args.input.exists() {
        bail!("file not found: {}", args.input.display());
    }
    Ok(args)
}

/// Numeric columns of a CSV, keyed by lower-case header.
struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl Table {
    fn column(&self, name: &str) -> Option<&[f64]> {
        let i = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[i])
    }
}

/// Load every column that parses as a number in at least one row.
/// Unparseable cells become missing samples.
fn load_columns(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let mut columns = vec![Vec::new(); headers.len()];
    let mut rows = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        for (i, col) in columns.iter_mut().enumerate() {
            let v = rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
            col.push(v);
        }
        rows += 1;
    }

    let (names, columns): (Vec<String>, Vec<Vec<f64>>) = headers
        .into_iter()
        .zip(columns)
        .filter(|(_, col)| col.iter().any(|v| !v.is_nan()))
        .unzip();
    Ok(Table { names, columns, rows })
}

fn describe_source(path: &Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => {
            let changed = meta
                .modified()
                .ok()
                .map(|t| chrono::DateTime::<chrono::Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!("{}: {:.1}KB   changed: {}", path.display(), meta.len() as f64 / 1024.0, changed)
        }
        Err(_) => path.display().to_string(),
    }
}

fn hostname() -> String {
    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_else(|_| "localhost".to_string())
}

/// Produce output file name like target/out/plot_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("plot_{stem}.png"))
}
