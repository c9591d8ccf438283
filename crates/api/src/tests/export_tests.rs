// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use emp_console_domain::EmployeeRecord;

use super::helpers::{TODAY, create_test_record};
use crate::write_employees_csv;

#[test]
fn test_export_writes_header_and_rows_in_order() {
    let anna: EmployeeRecord = create_test_record(1, "Anna", "Engineer", 50_000);
    let bob: EmployeeRecord = create_test_record(2, "Bob, Jr.", "Manager", 70_000);

    let mut output: Vec<u8> = Vec::new();
    write_employees_csv(&mut output, &[&bob, &anna], TODAY).unwrap();
    let text: String = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Id,Name,Designation,DOB,DOJ,Age,Salary,Gender,State");
    assert_eq!(
        lines[1],
        "2,\"Bob, Jr.\",Manager,1990-01-01,2015-06-01,34,70000,Female,Kerala"
    );
    assert_eq!(
        lines[2],
        "1,Anna,Engineer,1990-01-01,2015-06-01,34,50000,Female,Kerala"
    );
}

#[test]
fn test_export_of_nothing_is_just_the_header() {
    let mut output: Vec<u8> = Vec::new();
    write_employees_csv(&mut output, &[], TODAY).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Id,Name,Designation,DOB,DOJ,Age,Salary,Gender,State\n"
    );
}
