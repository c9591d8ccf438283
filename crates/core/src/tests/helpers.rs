// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LoadTicket, RecordStore};
use emp_console_domain::{DraftField, EmployeeDraft, EmployeeId, EmployeeRecord, Gender, StateName};
use rust_decimal::Decimal;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 06 - 15);

pub fn create_test_states() -> Vec<StateName> {
    vec![StateName::new("Karnataka"), StateName::new("Kerala")]
}

pub fn create_test_record(id: i64, name: &str, salary: i64) -> EmployeeRecord {
    EmployeeRecord::new(name)
        .with_id(EmployeeId::new(id))
        .with_designation("Engineer")
        .with_date_of_birth(date!(1990 - 01 - 01))
        .with_date_of_joining(date!(2015 - 06 - 01))
        .with_salary(Decimal::from(salary))
        .with_gender(Gender::Male)
        .with_state(StateName::new("Kerala"))
}

pub fn create_test_draft(name: &str) -> EmployeeDraft {
    EmployeeDraft::new()
        .with(DraftField::Name, name)
        .with(DraftField::Designation, "Analyst")
        .with(DraftField::DateOfBirth, "1992-03-04")
        .with(DraftField::DateOfJoining, "2020-01-01")
        .with(DraftField::Salary, "42000")
        .with(DraftField::Gender, "Female")
        .with(DraftField::State, "Karnataka")
}

pub fn create_loaded_store(records: Vec<EmployeeRecord>) -> RecordStore {
    let mut store: RecordStore = RecordStore::new();
    let ticket: LoadTicket = store.begin_load();
    assert!(store.apply_load(ticket, records));
    store
}
