// File: crates/demo/src/main.rs
// Summary: Demo loads a sales CSV and runs aggregation, pivot, and time-series transforms.

use anyhow::{Context, Result};
use chart_data::{
    fill_gaps, moving_average, normalize, pivot, sum_by, with_percentage, Record, TimeValue,
};
use chrono::DateTime;
use std::path::{Path, PathBuf};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the bundled sample
    let raw = std::env::args().nth(1).unwrap_or_else(|| "sample_sales.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let records = load_sales_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", records.len());

    if records.is_empty() {
        anyhow::bail!("no records loaded — check headers/delimiter.");
    }

    // 1) Revenue by region, with share of total
    let by_region = sum_by(&records, |r| r.key("region"), |r| r.num("amount"));
    let shares = with_percentage(&by_region, |p| Some(p.value));
    println!("\nRevenue by region:");
    for w in &shares {
        println!(
            "  {:<10} {:>10.2}  ({:.1}%)",
            w.record.category, w.record.value, w.percentage
        );
    }

    // 2) Product revenue pivoted across regions
    let bundle = pivot(
        &records,
        |r| r.key("product"),
        |r| r.key("region"),
        |r| r.num("amount"),
    );
    println!(
        "\nPivot: {} series x {} categories {:?}",
        bundle.series.len(),
        bundle.categories.len(),
        bundle.categories
    );
    for s in &bundle.series {
        println!("  {:<10} {:?}", s.name, s.data);
    }

    // 3) Daily revenue: aggregate per day, fill missing days, smooth
    let daily = sum_by(&records, |r| r.key("date"), |r| r.num("amount"));
    let points = normalize(&daily, |p| Some(p.value), |p| TimeValue::Text(p.category.clone()));
    let filled = fill_gaps(&points, DAY_MS, 0.0);
    let values: Vec<f64> = filled.iter().map(|p| p.1).collect();
    let smoothed = moving_average(&values, 3);
    println!(
        "\nDaily revenue: {} days observed, {} after gap fill",
        points.len(),
        filled.len()
    );

    let out = PathBuf::from("target/out/daily_revenue_filled.csv");
    write_daily_csv(&out, &filled, &smoothed)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Resolve path, also trying the demo crate directory when run from the
/// workspace root.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new("crates/demo").join(p);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load a sales CSV (date, region, product, amount, units) into records.
fn load_sales_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut row = Record::new();
        for (i, name) in headers.iter().enumerate() {
            let Some(raw) = rec.get(i) else { continue };
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            // numeric cells become numbers, everything else stays text
            row = match raw.parse::<f64>() {
                Ok(n) => row.with(name.clone(), n),
                Err(_) => row.with(name.clone(), raw),
            };
        }
        if !row.fields.is_empty() {
            out.push(row);
        }
    }
    Ok(out)
}

fn write_daily_csv(path: &Path, filled: &[(i64, f64)], smoothed: &[f64]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["date", "revenue", "smoothed"])?;
    for (i, &(t, v)) in filled.iter().enumerate() {
        let date = DateTime::from_timestamp_millis(t)
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| t.to_string());
        let s = smoothed.get(i).copied().unwrap_or(v);
        wtr.write_record([date, format!("{v:.2}"), format!("{s:.2}")])?;
    }
    wtr.flush()?;
    Ok(())
}
