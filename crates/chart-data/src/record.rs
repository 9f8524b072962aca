// File: crates/chart-data/src/record.rs
// Summary: Open-map business record model and the canonical aggregated point shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// One field of a business record. Numbers, text, and calendar times cover the
/// value kinds the transforms care about; anything else stays with the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Number(f64),
    Text(String),
    Time(DateTime<Utc>),
}

impl From<f64> for Field {
    fn from(v: f64) -> Self { Field::Number(v) }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self { Field::Number(v as f64) }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self { Field::Text(v.to_string()) }
}

impl From<String> for Field {
    fn from(v: String) -> Self { Field::Text(v) }
}

impl From<DateTime<Utc>> for Field {
    fn from(v: DateTime<Utc>) -> Self { Field::Time(v) }
}

/// A row of business data with no fixed schema; fields are addressed by name.
///
/// Transforms never mutate records in place. The typed entry points in this
/// crate take key-selector closures, so `Record` is a convenience carrier for
/// dynamic data (CSV rows, decoded payloads), not a required input type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: BTreeMap::new() }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Field>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Numeric view of a field; `None` for absent or non-numeric fields.
    pub fn num(&self, key: &str) -> Option<f64> {
        match self.fields.get(key)? {
            Field::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            Field::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn time(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(key)? {
            Field::Time(at) => Some(*at),
            _ => None,
        }
    }

    /// String form of a field, for grouping keys. Numbers format with no
    /// trailing `.0`, times as RFC 3339.
    pub fn key(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Field::Text(s)) => s.clone(),
            Some(Field::Number(n)) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Some(Field::Time(at)) => at.to_rfc3339(),
            None => String::new(),
        }
    }

    /// Epoch milliseconds of a field, applying the timestamp coercion rules:
    /// time fields use their own epoch value, text parses as RFC 3339 (with a
    /// bare-date fallback), numbers are taken as epoch milliseconds already.
    pub fn epoch_millis(&self, key: &str) -> Option<i64> {
        match self.fields.get(key)? {
            Field::Time(at) => Some(at.timestamp_millis()),
            Field::Text(s) => crate::timeseries::parse_epoch_millis(s),
            Field::Number(n) => Some(*n as i64),
        }
    }
}

/// Canonical shape after aggregation: one category label and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPoint {
    pub category: String,
    pub value: f64,
}

impl CategoryPoint {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: category.into(), value }
    }
}
