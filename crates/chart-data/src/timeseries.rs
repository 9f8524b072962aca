// File: crates/chart-data/src/timeseries.rs
// Summary: Timestamp normalization, fixed-interval gap filling, and moving-average smoothing.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// A normalized time series sample: epoch milliseconds and a value.
pub type TimePoint = (i64, f64);

/// The heterogeneous timestamp representations accepted by [`normalize`].
#[derive(Clone, Debug, PartialEq)]
pub enum TimeValue {
    /// Epoch milliseconds, used as-is.
    Millis(i64),
    /// Calendar string; RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC.
    Text(String),
    /// A parsed calendar time.
    At(DateTime<Utc>),
}

impl TimeValue {
    /// Coerce to epoch milliseconds. Unparseable text coerces to epoch 0
    /// rather than failing; bad timestamps are degenerate data, not errors.
    pub fn epoch_millis(&self) -> i64 {
        match self {
            TimeValue::Millis(ms) => *ms,
            TimeValue::Text(s) => parse_epoch_millis(s).unwrap_or(0),
            TimeValue::At(at) => at.timestamp_millis(),
        }
    }
}

/// Parse a calendar string to epoch milliseconds.
///
/// Accepts RFC 3339 (`2023-04-01T12:30:00Z`, offset forms included) and bare
/// dates (`2023-04-01`, midnight UTC). Locale-dependent forms such as
/// `01/02/2023` are deliberately rejected.
pub fn parse_epoch_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Some(at.timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = d.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).timestamp_millis());
    }
    None
}

/// Convert records to `(epoch_millis, value)` pairs, in input order.
///
/// No sorting happens here; [`fill_gaps`] orders defensively on its own.
pub fn normalize<T, V, W>(records: &[T], value: V, time: W) -> Vec<TimePoint>
where
    V: Fn(&T) -> Option<f64>,
    W: Fn(&T) -> TimeValue,
{
    records
        .iter()
        .map(|r| (time(r).epoch_millis(), value(r).unwrap_or(0.0)))
        .collect()
}

/// Fill missing buckets of a time series at a fixed interval.
///
/// The grid starts at the minimum timestamp and steps by `interval_ms` up to
/// the maximum, `floor(span / interval) + 1` points in total. Each input
/// point is snapped to its nearest grid step (clamped to the grid); the first
/// occupant of a step wins. Steps with no occupant emit `fill`. Inputs with
/// 0 or 1 points come back unchanged; so does a non-positive interval.
pub fn fill_gaps(points: &[TimePoint], interval_ms: i64, fill: f64) -> Vec<TimePoint> {
    if points.len() <= 1 || interval_ms <= 0 {
        return points.to_vec();
    }
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.0);

    let start = sorted[0].0;
    let end = sorted[sorted.len() - 1].0;
    let steps = ((end - start) / interval_ms) as usize + 1;

    let mut occupied: Vec<Option<f64>> = vec![None; steps];
    for &(t, v) in &sorted {
        let nearest = ((t - start) as f64 / interval_ms as f64).round() as i64;
        let idx = nearest.clamp(0, steps as i64 - 1) as usize;
        if occupied[idx].is_none() {
            occupied[idx] = Some(v);
        }
    }

    occupied
        .into_iter()
        .enumerate()
        .map(|(i, slot)| (start + i as i64 * interval_ms, slot.unwrap_or(fill)))
        .collect()
}

/// Trailing moving average with a stable output length.
///
/// The first `window - 1` entries pass through unchanged; from index
/// `window - 1` on, each output is the mean of the trailing `window` inputs.
/// Inputs shorter than the window (or a zero window) come back unchanged.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return values.to_vec();
    }
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0f64;
    for i in 0..values.len() {
        sum += values[i];
        if i + 1 < window {
            out.push(values[i]);
        } else {
            if i + 1 > window {
                sum -= values[i - window];
            }
            out.push(sum / window as f64);
        }
    }
    out
}
