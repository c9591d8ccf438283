// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search predicate and sort comparator for employee lists.
//!
//! Sorting is textual for every column: values are rendered to text, folded
//! to lowercase and compared lexicographically. Dates render as `YYYY-MM-DD`
//! and therefore sort chronologically; salaries sort by their decimal text,
//! so `"1000"` sorts before `"200"`. Missing values render as the empty
//! string and sort first in ascending order.

use crate::dates::format_calendar_date;
use crate::error::DomainError;
use crate::types::EmployeeRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// A sortable employee column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Employee name.
    Name,
    /// Date of birth.
    DateOfBirth,
    /// Date of joining.
    DateOfJoining,
    /// Designation.
    Designation,
    /// Salary.
    Salary,
    /// Gender.
    Gender,
    /// State.
    State,
}

impl SortField {
    /// Every sortable column, in table order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::DateOfBirth,
        Self::DateOfJoining,
        Self::Designation,
        Self::Salary,
        Self::Gender,
        Self::State,
    ];

    /// Parses a column name.
    ///
    /// Both the short table keys (`dob`, `doj`) and the long field names
    /// (`dateOfBirth`, `date_of_joining`) are accepted, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSortField` for any other input.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().replace('_', "").as_str() {
            "name" => Ok(Self::Name),
            "dob" | "dateofbirth" => Ok(Self::DateOfBirth),
            "doj" | "dateofjoining" => Ok(Self::DateOfJoining),
            "designation" => Ok(Self::Designation),
            "salary" => Ok(Self::Salary),
            "gender" => Ok(Self::Gender),
            "state" => Ok(Self::State),
            _ => Err(DomainError::InvalidSortField(s.to_string())),
        }
    }

    /// Returns the short column key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateOfBirth => "dob",
            Self::DateOfJoining => "doj",
            Self::Designation => "designation",
            Self::Salary => "salary",
            Self::Gender => "gender",
            Self::State => "state",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orients an ascending comparison result to this direction.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Renders the named field of a record as text.
///
/// Missing values render as the empty string.
#[must_use]
pub fn field_text(record: &EmployeeRecord, field: SortField) -> String {
    match field {
        SortField::Name => record.name.clone(),
        SortField::DateOfBirth => record
            .date_of_birth
            .map(format_calendar_date)
            .unwrap_or_default(),
        SortField::DateOfJoining => record
            .date_of_joining
            .map(format_calendar_date)
            .unwrap_or_default(),
        SortField::Designation => record.designation.clone(),
        SortField::Salary => record
            .salary
            .map(|salary| salary.to_string())
            .unwrap_or_default(),
        SortField::Gender => record
            .gender
            .map(|gender| gender.as_str().to_string())
            .unwrap_or_default(),
        SortField::State => record
            .state
            .as_ref()
            .map(|state| state.value().to_string())
            .unwrap_or_default(),
    }
}

/// Returns whether the record's name contains `term`, ignoring case.
///
/// An empty term matches every record.
#[must_use]
pub fn matches_search(record: &EmployeeRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(&term.to_lowercase())
}

/// Builds an ascending, case-insensitive comparator over one field.
///
/// Direction is not part of the comparator; callers orient the result with
/// [`SortDirection::apply`].
pub fn compare_by(field: SortField) -> impl Fn(&EmployeeRecord, &EmployeeRecord) -> Ordering {
    move |a: &EmployeeRecord, b: &EmployeeRecord| {
        let left: String = field_text(a, field).to_lowercase();
        let right: String = field_text(b, field).to_lowercase();
        left.cmp(&right)
    }
}
