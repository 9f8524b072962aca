// File: crates/chart-data/tests/aggregate.rs
// Purpose: Validate grouping, reduction, sorting, and filtering over record sets.

use chart_data::{average_by, count_by, filter_by, group_by, sort_by, sum_by, SortOrder};
use chart_data::{Field, Record};

#[derive(Clone)]
struct Sale {
    region: &'static str,
    amount: Option<f64>,
}

fn sales() -> Vec<Sale> {
    vec![
        Sale { region: "A", amount: Some(10.0) },
        Sale { region: "B", amount: Some(20.0) },
        Sale { region: "A", amount: Some(15.0) },
        Sale { region: "B", amount: Some(25.0) },
    ]
}

#[test]
fn group_by_preserves_first_seen_order() {
    let data = sales();
    let groups = group_by(&data, |s| s.region.to_string());
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, "A");
    assert_eq!(groups[1].key, "B");
    assert_eq!(groups[0].rows.len(), 2);
    assert_eq!(groups[1].rows.len(), 2);
}

#[test]
fn sum_by_groups_and_sums() {
    let data = sales();
    let points = sum_by(&data, |s| s.region.to_string(), |s| s.amount);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].category, "A");
    assert!((points[0].value - 25.0).abs() < 1e-9);
    assert_eq!(points[1].category, "B");
    assert!((points[1].value - 45.0).abs() < 1e-9);
}

#[test]
fn sum_by_treats_missing_values_as_zero() {
    let data = vec![
        Sale { region: "A", amount: Some(10.0) },
        Sale { region: "A", amount: None },
    ];
    let points = sum_by(&data, |s| s.region.to_string(), |s| s.amount);
    assert!((points[0].value - 10.0).abs() < 1e-9);
}

#[test]
fn grouping_total_invariant() {
    // Sum of per-group sums equals the raw total (missing counted as 0).
    let data = vec![
        Sale { region: "X", amount: Some(3.5) },
        Sale { region: "Y", amount: None },
        Sale { region: "X", amount: Some(-1.5) },
        Sale { region: "Z", amount: Some(7.0) },
    ];
    let raw: f64 = data.iter().map(|s| s.amount.unwrap_or(0.0)).sum();
    let grouped: f64 = sum_by(&data, |s| s.region.to_string(), |s| s.amount)
        .iter()
        .map(|p| p.value)
        .sum();
    assert!((raw - grouped).abs() < 1e-9);
}

#[test]
fn average_by_divides_by_group_size() {
    let data = sales();
    let points = average_by(&data, |s| s.region.to_string(), |s| s.amount);
    assert!((points[0].value - 12.5).abs() < 1e-9);
    assert!((points[1].value - 22.5).abs() < 1e-9);
}

#[test]
fn count_by_returns_cardinality() {
    let data = sales();
    let points = count_by(&data, |s| s.region.to_string());
    assert!((points[0].value - 2.0).abs() < 1e-9);
    assert!((points[1].value - 2.0).abs() < 1e-9);
}

#[test]
fn empty_input_yields_empty_output() {
    let data: Vec<Sale> = Vec::new();
    assert!(group_by(&data, |s| s.region.to_string()).is_empty());
    assert!(sum_by(&data, |s| s.region.to_string(), |s| s.amount).is_empty());
    assert!(average_by(&data, |s| s.region.to_string(), |s| s.amount).is_empty());
    assert!(count_by(&data, |s| s.region.to_string()).is_empty());
}

#[test]
fn sort_by_asc_and_desc() {
    let data = sales();
    let asc = sort_by(&data, |s| s.amount.unwrap_or(0.0), SortOrder::Asc);
    let amounts: Vec<f64> = asc.iter().map(|s| s.amount.unwrap()).collect();
    assert_eq!(amounts, vec![10.0, 15.0, 20.0, 25.0]);

    let desc = sort_by(&data, |s| s.amount.unwrap_or(0.0), SortOrder::Desc);
    let amounts: Vec<f64> = desc.iter().map(|s| s.amount.unwrap()).collect();
    assert_eq!(amounts, vec![25.0, 20.0, 15.0, 10.0]);
}

#[test]
fn sort_by_is_stable_for_equal_keys() {
    let data = vec![
        Sale { region: "first", amount: Some(5.0) },
        Sale { region: "second", amount: Some(5.0) },
    ];
    let sorted = sort_by(&data, |s| s.amount.unwrap_or(0.0), SortOrder::Asc);
    assert_eq!(sorted[0].region, "first");
    assert_eq!(sorted[1].region, "second");
}

#[test]
fn filter_by_keeps_matches_in_order() {
    let data = sales();
    let big = filter_by(&data, |s| s.amount.unwrap_or(0.0) > 12.0);
    let regions: Vec<&str> = big.iter().map(|s| s.region).collect();
    assert_eq!(regions, vec!["B", "A", "B"]);
}

#[test]
fn aggregates_work_over_dynamic_records() {
    let rows = vec![
        Record::new().with("c", "A").with("v", 10.0),
        Record::new().with("c", "B").with("v", 20.0),
        Record::new().with("c", "A").with("v", 15.0),
        // non-numeric value field coerces to 0
        Record::new().with("c", "B").with("v", Field::Text("n/a".into())),
    ];
    let points = sum_by(&rows, |r| r.key("c"), |r| r.num("v"));
    assert!((points[0].value - 25.0).abs() < 1e-9);
    assert!((points[1].value - 20.0).abs() < 1e-9);
}
