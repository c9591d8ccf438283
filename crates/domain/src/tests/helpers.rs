// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EmployeeId, EmployeeRecord, Gender, StateName};
use rust_decimal::Decimal;
use time::macros::date;

pub fn create_test_states() -> Vec<StateName> {
    vec![
        StateName::new("Karnataka"),
        StateName::new("Kerala"),
        StateName::new("Tamil Nadu"),
    ]
}

pub fn create_test_record(id: i64, name: &str) -> EmployeeRecord {
    EmployeeRecord::new(name)
        .with_id(EmployeeId::new(id))
        .with_designation("Engineer")
        .with_date_of_birth(date!(1990 - 01 - 01))
        .with_date_of_joining(date!(2015 - 06 - 01))
        .with_salary(Decimal::from(50_000))
        .with_gender(Gender::Female)
        .with_state(StateName::new("Kerala"))
}
