// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::cargo_common_metadata)]

mod age;
mod aggregate;
mod dates;
mod draft;
mod duplicate;
mod error;
mod query;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use age::compute_age;
pub use aggregate::{
    DesignationTotal, SalaryByDesignation, UNKNOWN_DESIGNATION, aggregate_salary_by_designation,
    total_salary,
};
pub use dates::{format_calendar_date, parse_calendar_date};
pub use draft::{DraftField, EmployeeDraft};
pub use duplicate::{find_duplicate, is_duplicate, validate_not_duplicate};
pub use error::DomainError;
pub use query::{SortDirection, SortField, compare_by, field_text, matches_search};
pub use types::{EmployeeId, EmployeeRecord, Gender, StateName, parse_salary};
pub use validation::{FieldErrors, validate_draft};
