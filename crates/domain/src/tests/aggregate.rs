// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DesignationTotal, EmployeeRecord, SalaryByDesignation, UNKNOWN_DESIGNATION,
    aggregate_salary_by_designation, parse_salary, total_salary,
};
use rust_decimal::Decimal;

fn record(designation: &str, salary: Option<i64>) -> EmployeeRecord {
    let mut record: EmployeeRecord = EmployeeRecord::new("x").with_designation(designation);
    record.salary = salary.map(Decimal::from);
    record
}

#[test]
fn test_groups_and_sums_with_unknown_bucket() {
    let records: Vec<EmployeeRecord> = vec![
        record("Eng", Some(100)),
        record("Eng", Some(50)),
        record("", Some(20)),
    ];

    let totals: SalaryByDesignation = aggregate_salary_by_designation(&records);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get("Eng"), Some(Decimal::from(150)));
    assert_eq!(totals.get(UNKNOWN_DESIGNATION), Some(Decimal::from(20)));
}

#[test]
fn test_missing_salary_counts_as_zero() {
    let records: Vec<EmployeeRecord> = vec![record("Ops", None), record("Ops", Some(10))];

    let totals: SalaryByDesignation = aggregate_salary_by_designation(&records);
    assert_eq!(totals.get("Ops"), Some(Decimal::from(10)));
}

#[test]
fn test_whitespace_designation_is_unknown() {
    let records: Vec<EmployeeRecord> = vec![record("   ", Some(5))];

    let totals: SalaryByDesignation = aggregate_salary_by_designation(&records);
    assert_eq!(totals.get(UNKNOWN_DESIGNATION), Some(Decimal::from(5)));
}

#[test]
fn test_groups_follow_first_appearance_order() {
    let records: Vec<EmployeeRecord> = vec![
        record("QA", Some(1)),
        record("Eng", Some(2)),
        record("QA", Some(3)),
        record("HR", Some(4)),
    ];

    let order: Vec<String> = aggregate_salary_by_designation(&records)
        .into_vec()
        .into_iter()
        .map(|entry: DesignationTotal| entry.designation)
        .collect();

    assert_eq!(order, vec!["QA", "Eng", "HR"]);
}

#[test]
fn test_grand_total_and_empty_input() {
    let empty: SalaryByDesignation = aggregate_salary_by_designation(&[]);
    assert!(empty.is_empty());
    assert_eq!(empty.grand_total(), Decimal::ZERO);

    let records: Vec<EmployeeRecord> = vec![record("A", Some(7)), record("B", Some(8))];
    assert_eq!(
        aggregate_salary_by_designation(&records).grand_total(),
        Decimal::from(15)
    );
}

#[test]
fn test_group_total_saturates_instead_of_overflowing() {
    let huge: Decimal = parse_salary("50000000000000000000000000000").unwrap();
    let mut first: EmployeeRecord = record("Board", None);
    first.salary = Some(huge);
    let second: EmployeeRecord = first.clone();

    let totals: SalaryByDesignation = aggregate_salary_by_designation(&[first, second]);

    assert_eq!(totals.get("Board"), Some(Decimal::MAX));
    assert_eq!(totals.grand_total(), Decimal::MAX);
}

#[test]
fn test_total_salary_saturates_and_skips_missing() {
    let mut huge: EmployeeRecord = record("Board", None);
    huge.salary = Some(Decimal::MAX);
    let records: Vec<EmployeeRecord> = vec![huge.clone(), huge, record("Ops", None)];

    assert_eq!(total_salary(&records), Decimal::MAX);
    assert_eq!(
        total_salary(&[record("A", Some(7)), record("B", None)]),
        Decimal::from(7)
    );
}
