// File: crates/chart-data/src/pivot.rs
// Summary: Reshape grouped records into per-series arrays aligned to a shared category axis.

use std::collections::{BTreeSet, HashMap};

use crate::aggregate::group_by;
use crate::percent::percentages;
use crate::record::CategoryPoint;

/// One series: a name and one value per category of the owning bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesColumn {
    pub name: String,
    pub data: Vec<f64>,
}

/// Parallel per-series arrays over a shared category axis.
/// Contract: every `series[i].data` has exactly `categories.len()` entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesBundle {
    pub categories: Vec<String>,
    pub series: Vec<SeriesColumn>,
}

/// Pivot records into a [`SeriesBundle`] for stacked/grouped charts.
///
/// The category axis is the set of distinct category keys across *all*
/// records, sorted lexicographically ascending (the tie-break rule callers
/// can rely on). Series keep first-seen order. Combinations with no record
/// are data, not errors: they fill with `0.0`. A duplicate (series, category)
/// pair resolves to the last record, matching map-overwrite semantics.
pub fn pivot<T, S, C, V>(records: &[T], series_key: S, category_key: C, value: V) -> SeriesBundle
where
    S: Fn(&T) -> String,
    C: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    let categories: Vec<String> = records
        .iter()
        .map(|r| category_key(r))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = group_by(records, series_key)
        .into_iter()
        .map(|g| {
            let mut lookup: HashMap<String, f64> = HashMap::with_capacity(g.rows.len());
            for &r in &g.rows {
                lookup.insert(category_key(r), value(r).unwrap_or(0.0));
            }
            let data = categories
                .iter()
                .map(|c| lookup.get(c).copied().unwrap_or(0.0))
                .collect();
            SeriesColumn { name: g.key, data }
        })
        .collect();

    SeriesBundle { categories, series }
}

/// Split aggregated points into parallel category/value arrays.
pub fn split_points(points: &[CategoryPoint]) -> (Vec<String>, Vec<f64>) {
    (
        points.iter().map(|p| p.category.clone()).collect(),
        points.iter().map(|p| p.value).collect(),
    )
}

/// One proportional slice: a name, its value, and its share of the total.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
}

/// Name/value pairs with their share of the total attached, for pie-style
/// charts. A zero (or negative) total yields all-zero percentages.
pub fn pie_slices<T, N, V>(records: &[T], name_key: N, value: V) -> Vec<PieSlice>
where
    N: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    let values: Vec<f64> = records.iter().map(|r| value(r).unwrap_or(0.0)).collect();
    let shares = percentages(&values);
    records
        .iter()
        .zip(values)
        .zip(shares)
        .map(|((r, value), percentage)| PieSlice { name: name_key(r), value, percentage })
        .collect()
}
