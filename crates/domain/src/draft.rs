// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::format_calendar_date;
use crate::types::{EmployeeId, EmployeeRecord};

/// An editable field of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    /// Employee name.
    Name,
    /// Designation.
    Designation,
    /// Date of birth.
    DateOfBirth,
    /// Date of joining.
    DateOfJoining,
    /// Salary.
    Salary,
    /// Gender.
    Gender,
    /// State.
    State,
}

impl DraftField {
    /// Every form field, in form order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Designation,
        Self::DateOfBirth,
        Self::DateOfJoining,
        Self::Salary,
        Self::Gender,
        Self::State,
    ];

    /// Returns the key used for this field in error maps.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Designation => "designation",
            Self::DateOfBirth => "dateOfBirth",
            Self::DateOfJoining => "dateOfJoining",
            Self::Salary => "salary",
            Self::Gender => "gender",
            Self::State => "state",
        }
    }

    /// Returns the human-readable label for this field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Designation => "Designation",
            Self::DateOfBirth => "Date of birth",
            Self::DateOfJoining => "Date of joining",
            Self::Salary => "Salary",
            Self::Gender => "Gender",
            Self::State => "State",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The raw, unvalidated contents of the employee form.
///
/// Every field is held exactly as typed. Nothing is parsed until the draft
/// is validated, so a half-typed date or salary never loses input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeDraft {
    id: Option<EmployeeId>,
    name: String,
    designation: String,
    date_of_birth: String,
    date_of_joining: String,
    salary: String,
    gender: String,
    state: String,
}

impl EmployeeDraft {
    /// Creates an empty draft for a new employee.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft pre-filled from a stored record, for editing.
    ///
    /// Dates are rendered in `YYYY-MM-DD` form and missing values become
    /// empty fields.
    #[must_use]
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            designation: record.designation.clone(),
            date_of_birth: record
                .date_of_birth
                .map(format_calendar_date)
                .unwrap_or_default(),
            date_of_joining: record
                .date_of_joining
                .map(format_calendar_date)
                .unwrap_or_default(),
            salary: record
                .salary
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
            gender: record
                .gender
                .map(|gender| gender.as_str().to_string())
                .unwrap_or_default(),
            state: record
                .state
                .as_ref()
                .map(|state| state.value().to_string())
                .unwrap_or_default(),
        }
    }

    /// Returns the identifier of the record being edited, if any.
    #[must_use]
    pub const fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Designation => &self.designation,
            DraftField::DateOfBirth => &self.date_of_birth,
            DraftField::DateOfJoining => &self.date_of_joining,
            DraftField::Salary => &self.salary,
            DraftField::Gender => &self.gender,
            DraftField::State => &self.state,
        }
    }

    /// Replaces the raw value of a field.
    pub fn set(&mut self, field: DraftField, value: &str) {
        let slot: &mut String = match field {
            DraftField::Name => &mut self.name,
            DraftField::Designation => &mut self.designation,
            DraftField::DateOfBirth => &mut self.date_of_birth,
            DraftField::DateOfJoining => &mut self.date_of_joining,
            DraftField::Salary => &mut self.salary,
            DraftField::Gender => &mut self.gender,
            DraftField::State => &mut self.state,
        };
        value.clone_into(slot);
    }

    /// Sets a field and returns the draft, for building drafts inline.
    #[must_use]
    pub fn with(mut self, field: DraftField, value: &str) -> Self {
        self.set(field, value);
        self
    }
}
