// File: crates/chart-data/src/aggregate.rs
// Summary: Grouping and reduction: group/sum/average/count plus sort and filter helpers.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::record::CategoryPoint;

/// One group of records sharing a key. Groups come back in first-seen order
/// so downstream output is deterministic.
#[derive(Debug)]
pub struct Group<'a, T> {
    pub key: String,
    pub rows: Vec<&'a T>,
}

/// Group records by the string form of `key`.
///
/// Empty input yields an empty list, never an error.
pub fn group_by<'a, T, K>(records: &'a [T], key: K) -> Vec<Group<'a, T>>
where
    K: Fn(&T) -> String,
{
    let mut groups: Vec<Group<'a, T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for r in records {
        let k = key(r);
        match index.get(&k) {
            Some(&i) => groups[i].rows.push(r),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push(Group { key: k, rows: vec![r] });
            }
        }
    }
    groups
}

/// Sum `value` per group. Absent or non-numeric values count as `0.0`.
pub fn sum_by<T, K, V>(records: &[T], key: K, value: V) -> Vec<CategoryPoint>
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    group_by(records, key)
        .into_iter()
        .map(|g| {
            let sum = g.rows.iter().map(|&r| value(r).unwrap_or(0.0)).sum();
            CategoryPoint::new(g.key, sum)
        })
        .collect()
}

/// Average `value` per group. An empty group divides by 1, yielding `0.0`.
pub fn average_by<T, K, V>(records: &[T], key: K, value: V) -> Vec<CategoryPoint>
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    group_by(records, key)
        .into_iter()
        .map(|g| {
            let sum: f64 = g.rows.iter().map(|&r| value(r).unwrap_or(0.0)).sum();
            let n = g.rows.len().max(1) as f64;
            CategoryPoint::new(g.key, sum / n)
        })
        .collect()
}

/// Group cardinality as the value.
pub fn count_by<T, K>(records: &[T], key: K) -> Vec<CategoryPoint>
where
    K: Fn(&T) -> String,
{
    group_by(records, key)
        .into_iter()
        .map(|g| CategoryPoint::new(g.key, g.rows.len() as f64))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Stable clone-and-sort by a comparable key. Incomparable pairs (e.g. NaN
/// keys) keep their input order.
pub fn sort_by<T, K, O>(records: &[T], key: K, order: SortOrder) -> Vec<T>
where
    T: Clone,
    K: Fn(&T) -> O,
    O: PartialOrd,
{
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}

/// Clone of the records matching `predicate`, in input order.
pub fn filter_by<T, P>(records: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    records.iter().filter(|&r| predicate(r)).cloned().collect()
}
