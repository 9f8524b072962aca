// File: crates/chart-data/src/percent.rs
// Summary: Share-of-total percentages over record collections.

/// A record paired with its share of the group total, in percent.
#[derive(Clone, Debug, PartialEq)]
pub struct Weighted<T> {
    pub record: T,
    pub percentage: f64,
}

/// Each value's share of the total, in percent. A non-positive total yields
/// all zeros instead of dividing.
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if !(total > 0.0) {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 100.0).collect()
}

/// Augment each record with its share of the total of `value` across all
/// records. Absent values count as `0.0` in both the total and the share.
pub fn with_percentage<T, V>(records: &[T], value: V) -> Vec<Weighted<T>>
where
    T: Clone,
    V: Fn(&T) -> Option<f64>,
{
    let values: Vec<f64> = records.iter().map(|r| value(r).unwrap_or(0.0)).collect();
    let shares = percentages(&values);
    records
        .iter()
        .cloned()
        .zip(shares)
        .map(|(record, percentage)| Weighted { record, percentage })
        .collect()
}
