// File: crates/demo/src/main.rs
// Summary: Demo loads a fitness metric CSV and prints the computed axis for each metric.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use stride_axis::{compute, format_fixed, ValueKind};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled sample log
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/metrics_sample.csv".to_string());

    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let log = load_metric_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;

    let total: usize = log.series.values().map(Vec::len).sum();
    println!("Loaded {} samples across {} metrics", total, log.series.len());
    if log.skipped > 0 {
        println!("Skipped {} rows with missing or unparseable values", log.skipped);
    }

    if log.series.is_empty() {
        anyhow::bail!("no samples loaded, check headers/delimiter.");
    }

    if let Some((first, last)) = log.span() {
        let days = (last - first).num_days() + 1;
        println!("Log covers {} to {} ({} days)", first, last, days);
    }

    for (tag, values) in &log.series {
        let kind = ValueKind::from_tag(tag);
        let spec =
            compute(values, kind).with_context(|| format!("axis for metric '{tag}'"))?;

        let (lo, hi) = minmax(values);
        println!();
        println!("[{}] {} samples, data range [{:.2}, {:.2}]", tag, values.len(), lo, hi);
        println!(
            "  axis {} .. {} step {}",
            format_fixed(spec.y_min, spec.decimals),
            format_fixed(spec.y_max, spec.decimals),
            format_fixed(spec.step, spec.decimals),
        );
        println!("  ticks: {}", spec.ticks.join(" | "));
    }

    Ok(())
}

struct MetricLog {
    series: BTreeMap<String, Vec<f64>>,
    first_day: Option<NaiveDate>,
    last_day: Option<NaiveDate>,
    skipped: usize,
}

impl MetricLog {
    fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first_day?, self.last_day?))
    }
}

/// Load a long-format metric CSV (one reading per row) into per-metric series.
fn load_metric_csv(path: &Path) -> Result<MetricLog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    // Inspect headers (log them)
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_date = idx(&["date", "day", "logged_at"]);
    let i_metric = idx(&["metric", "kind", "name"]);
    let i_value = idx(&["value", "amount", "reading"]);

    if i_metric.is_none() || i_value.is_none() {
        println!("Warning: could not find metric/value columns.");
    }

    let mut log = MetricLog {
        series: BTreeMap::new(),
        first_day: None,
        last_day: None,
        skipped: 0,
    };

    for rec in rdr.records() {
        let rec = rec?;

        let value = i_value
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite());
        let value = match value {
            Some(v) => v,
            None => {
                log.skipped += 1;
                continue;
            }
        };

        let tag = i_metric
            .and_then(|ix| rec.get(ix))
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|| "value".to_string());

        if let Some(day) = i_date.and_then(|ix| rec.get(ix)).and_then(parse_day) {
            log.first_day = Some(log.first_day.map_or(day, |d| d.min(day)));
            log.last_day = Some(log.last_day.map_or(day, |d| d.max(day)));
        }

        log.series.entry(tag).or_default().push(value);
    }
    Ok(log)
}

fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn minmax(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}
