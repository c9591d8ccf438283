// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ChartAggregator, LoadTicket, RecordStore};
use emp_console_domain::EmployeeRecord;
use rust_decimal::Decimal;

use super::helpers::{create_loaded_store, create_test_record};

fn create_designated(id: i64, designation: &str, salary: i64) -> EmployeeRecord {
    create_test_record(id, "x", salary).with_designation(designation)
}

#[test]
fn test_refresh_builds_series_in_first_appearance_order() {
    let store: RecordStore = create_loaded_store(vec![
        create_designated(1, "QA", 100),
        create_designated(2, "Eng", 300),
        create_designated(3, "QA", 100),
    ]);
    let mut chart: ChartAggregator = ChartAggregator::new();

    assert!(chart.refresh(&store));

    assert_eq!(chart.labels(), vec!["QA", "Eng"]);
    assert_eq!(chart.series().get("QA"), Some(Decimal::from(200)));
    assert_eq!(chart.series().get("Eng"), Some(Decimal::from(300)));
}

#[test]
fn test_refresh_is_skipped_until_store_reloads() {
    let mut store: RecordStore = create_loaded_store(vec![create_designated(1, "QA", 100)]);
    let mut chart: ChartAggregator = ChartAggregator::new();

    assert!(chart.refresh(&store));
    assert!(!chart.refresh(&store));

    let ticket: LoadTicket = store.begin_load();
    assert!(store.apply_load(ticket, vec![create_designated(2, "Ops", 10)]));

    assert!(chart.refresh(&store));
    assert_eq!(chart.labels(), vec!["Ops"]);
}

#[test]
fn test_refresh_on_empty_store_yields_empty_series() {
    let store: RecordStore = create_loaded_store(Vec::new());
    let mut chart: ChartAggregator = ChartAggregator::new();

    assert!(chart.refresh(&store));
    assert!(chart.series().is_empty());
}

#[test]
fn test_share_of_total() {
    let store: RecordStore = create_loaded_store(vec![
        create_designated(1, "QA", 100),
        create_designated(2, "Eng", 300),
    ]);
    let mut chart: ChartAggregator = ChartAggregator::new();
    chart.refresh(&store);

    assert_eq!(chart.share_of_total("QA"), Some(Decimal::from(25)));
    assert_eq!(chart.share_of_total("Eng"), Some(Decimal::from(75)));
    assert_eq!(chart.share_of_total("HR"), None);
}

#[test]
fn test_share_of_zero_payroll_is_zero() {
    let store: RecordStore = create_loaded_store(vec![create_designated(1, "QA", 0)]);
    let mut chart: ChartAggregator = ChartAggregator::new();
    chart.refresh(&store);

    assert_eq!(chart.share_of_total("QA"), Some(Decimal::ZERO));
}

#[test]
fn test_share_of_huge_payroll_does_not_overflow() {
    let huge: Decimal = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
    let store: RecordStore =
        create_loaded_store(vec![create_designated(1, "Board", 0).with_salary(huge)]);
    let mut chart: ChartAggregator = ChartAggregator::new();
    chart.refresh(&store);

    assert_eq!(chart.share_of_total("Board"), Some(Decimal::ONE_HUNDRED));
}

#[test]
fn test_refresh_saturates_group_totals_at_max() {
    let store: RecordStore = create_loaded_store(vec![
        create_designated(1, "Board", 0).with_salary(Decimal::MAX),
        create_designated(2, "Board", 0).with_salary(Decimal::MAX),
    ]);
    let mut chart: ChartAggregator = ChartAggregator::new();

    assert!(chart.refresh(&store));
    assert_eq!(chart.series().get("Board"), Some(Decimal::MAX));
    assert_eq!(chart.share_of_total("Board"), Some(Decimal::ONE_HUNDRED));
}
