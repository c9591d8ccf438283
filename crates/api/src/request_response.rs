// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire representation of employee records.
//!
//! The service speaks PascalCase (`Id`, `Name`, `DOB`, ...); lowercase and
//! camelCase spellings are accepted on input. Conversion into domain records
//! is lenient: a field that cannot be interpreted is logged and left empty
//! so one bad row never hides the rest of the list.

use emp_console_domain::{
    EmployeeId, EmployeeRecord, Gender, StateName, format_calendar_date, parse_calendar_date,
    parse_salary,
};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use time::Date;
use tracing::warn;

/// An employee as exchanged with the remote service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeDto {
    /// Server-assigned identifier. Omitted when creating.
    #[serde(
        rename = "Id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    /// Employee name.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: Option<String>,
    /// Date of birth, ISO-8601. Only the date portion is read.
    #[serde(rename = "DOB", alias = "dob", alias = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    /// Date of joining, ISO-8601. Only the date portion is read.
    #[serde(rename = "DOJ", alias = "doj", alias = "dateOfJoining", default)]
    pub date_of_joining: Option<String>,
    /// Job title.
    #[serde(rename = "Designation", alias = "designation", default)]
    pub designation: Option<String>,
    /// Salary, as a number or a numeric string.
    #[serde(rename = "Salary", alias = "salary", default)]
    pub salary: Option<Value>,
    /// `Male` or `Female`.
    #[serde(rename = "Gender", alias = "gender", default)]
    pub gender: Option<String>,
    /// State name.
    #[serde(rename = "State", alias = "state", default)]
    pub state: Option<String>,
}

impl EmployeeDto {
    /// Builds the request body for a record.
    ///
    /// Dates are sent as `YYYY-MM-DD` and the salary as a JSON number.
    #[must_use]
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id.map(|id| id.value()),
            name: Some(record.name.clone()),
            date_of_birth: record.date_of_birth.map(format_calendar_date),
            date_of_joining: record.date_of_joining.map(format_calendar_date),
            designation: Some(record.designation.clone()),
            salary: record.salary.map(salary_to_json),
            gender: record.gender.map(|gender| gender.as_str().to_string()),
            state: record.state.as_ref().map(|state| state.value().to_string()),
        }
    }

    /// Converts the wire value into a domain record.
    #[must_use]
    pub fn into_record(self) -> EmployeeRecord {
        let id: Option<EmployeeId> = self.id.map(EmployeeId::new);

        EmployeeRecord {
            id,
            name: self.name.unwrap_or_default(),
            designation: self.designation.unwrap_or_default(),
            date_of_birth: lenient_date(id, "DOB", self.date_of_birth.as_deref()),
            date_of_joining: lenient_date(id, "DOJ", self.date_of_joining.as_deref()),
            salary: lenient_salary(id, self.salary.as_ref()),
            gender: self
                .gender
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .and_then(|raw| {
                    Gender::parse(raw)
                        .inspect_err(|err| warn!(?id, %err, "Ignoring unreadable gender"))
                        .ok()
                }),
            state: self
                .state
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| StateName::new(&raw)),
        }
    }
}

/// Encodes a salary as a JSON number, integral when it has no fraction.
fn salary_to_json(salary: Decimal) -> Value {
    let whole: Option<i64> = if salary.fract().is_zero() {
        salary.to_i64()
    } else {
        None
    };
    whole
        .map(Number::from)
        .or_else(|| salary.to_f64().and_then(Number::from_f64))
        .map_or(Value::Null, Value::Number)
}

fn lenient_date(id: Option<EmployeeId>, field: &str, raw: Option<&str>) -> Option<Date> {
    let raw: &str = raw.filter(|raw| !raw.trim().is_empty())?;
    parse_calendar_date(raw)
        .inspect_err(|err| warn!(?id, field, %err, "Ignoring unreadable date"))
        .ok()
}

fn lenient_salary(id: Option<EmployeeId>, raw: Option<&Value>) -> Option<Decimal> {
    let text: String = match raw? {
        Value::Null => return None,
        Value::Number(number) => number.to_string(),
        Value::String(text) if text.trim().is_empty() => return None,
        Value::String(text) => text.clone(),
        other => {
            warn!(?id, value = %other, "Ignoring salary of unexpected type");
            return None;
        }
    };
    parse_salary(&text)
        .inspect_err(|err| warn!(?id, %err, "Ignoring unreadable salary"))
        .ok()
}
