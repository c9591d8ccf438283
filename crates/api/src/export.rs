// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the employee list.

use emp_console_domain::{EmployeeRecord, SortField, field_text};
use std::io::Write;
use time::Date;

/// Column headers, in output order.
pub const EXPORT_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Designation",
    "DOB",
    "DOJ",
    "Age",
    "Salary",
    "Gender",
    "State",
];

/// Writes records as CSV, one row per record in the given order.
///
/// # Arguments
///
/// * `writer` - Destination for the CSV text
/// * `records` - Records to write, already filtered and sorted
/// * `today` - Reference date for the age column
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_employees_csv<W: Write>(
    writer: W,
    records: &[&EmployeeRecord],
    today: Date,
) -> Result<(), csv::Error> {
    let mut csv_writer: csv::Writer<W> = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;

    for record in records {
        let id: String = record.id.map(|id| id.to_string()).unwrap_or_default();
        let age: String = record
            .age_as_of(today)
            .map(|age| age.to_string())
            .unwrap_or_default();
        csv_writer.write_record([
            id.as_str(),
            record.name.as_str(),
            record.designation.as_str(),
            field_text(record, SortField::DateOfBirth).as_str(),
            field_text(record, SortField::DateOfJoining).as_str(),
            age.as_str(),
            field_text(record, SortField::Salary).as_str(),
            field_text(record, SortField::Gender).as_str(),
            field_text(record, SortField::State).as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
