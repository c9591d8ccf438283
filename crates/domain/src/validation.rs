// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::parse_calendar_date;
use crate::draft::{DraftField, EmployeeDraft};
use crate::types::{EmployeeRecord, Gender, StateName, parse_salary};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use time::Date;

/// Per-field validation messages for a rejected draft.
///
/// Entries are ordered by [`DraftField`], i.e. in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<DraftField, String>,
}

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clears the message for a field, returning it if there was one.
    pub fn remove(&mut self, field: DraftField) -> Option<String> {
        self.errors.remove(&field)
    }

    /// Returns the message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns the message for the field with the given key (e.g. `"name"`).
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(field, _)| field.key() == key)
            .map(|(_, message)| message.as_str())
    }

    /// Returns whether the field failed.
    #[must_use]
    pub fn contains(&self, field: DraftField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {message}", field.key())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn required_text(
    draft: &EmployeeDraft,
    field: DraftField,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value: &str = draft.get(field).trim();
    if value.is_empty() {
        errors.insert(field, message);
        return None;
    }
    Some(value.to_string())
}

fn required_date(draft: &EmployeeDraft, field: DraftField, errors: &mut FieldErrors) -> Option<Date> {
    let raw: &str = draft.get(field);
    if raw.trim().is_empty() {
        errors.insert(field, format!("{} is required", field.label()));
        return None;
    }
    match parse_calendar_date(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(
                field,
                format!("{} must be a date in YYYY-MM-DD form", field.label()),
            );
            None
        }
    }
}

/// Validates a draft and normalizes it into a record ready to save.
///
/// Every field is checked and every failure is reported, so the caller can
/// show all problems at once. This function is pure; it does not check for
/// duplicates (that requires the loaded record list).
///
/// # Arguments
///
/// * `draft` - The raw form contents
/// * `valid_states` - The state names fetched for this form session
///
/// # Returns
///
/// * `Ok(EmployeeRecord)` with salary as a number and dates parsed
/// * `Err(FieldErrors)` keyed by every failing field
///
/// # Errors
///
/// Returns an error if:
/// - The name or designation is empty
/// - Either date is missing or not a calendar date
/// - The salary is missing, not a number, or negative
/// - The gender is not Male or Female
/// - The state is not one of `valid_states`
pub fn validate_draft(
    draft: &EmployeeDraft,
    valid_states: &[StateName],
) -> Result<EmployeeRecord, FieldErrors> {
    let mut errors: FieldErrors = FieldErrors::new();

    // Rule: name must not be empty
    let name: Option<String> =
        required_text(draft, DraftField::Name, "Please enter name", &mut errors);

    // Rule: designation must not be empty
    let designation: Option<String> = required_text(
        draft,
        DraftField::Designation,
        "Designation is required",
        &mut errors,
    );

    // Rule: both dates must be present calendar dates
    let date_of_birth: Option<Date> = required_date(draft, DraftField::DateOfBirth, &mut errors);
    let date_of_joining: Option<Date> =
        required_date(draft, DraftField::DateOfJoining, &mut errors);

    // Rule: salary must be a non-negative number
    let salary_raw: &str = draft.get(DraftField::Salary);
    let salary: Option<Decimal> = if salary_raw.trim().is_empty() {
        errors.insert(DraftField::Salary, "Salary is required");
        None
    } else {
        match parse_salary(salary_raw) {
            Ok(value) => Some(value),
            Err(_) => {
                errors.insert(
                    DraftField::Salary,
                    "Salary must be a number greater than or equal to 0",
                );
                None
            }
        }
    };

    // Rule: gender must be one of the enumeration
    let gender: Option<Gender> = match Gender::parse(draft.get(DraftField::Gender)) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(DraftField::Gender, "Gender must be Male or Female");
            None
        }
    };

    // Rule: state must be one of the fetched names
    let state_raw: &str = draft.get(DraftField::State).trim();
    let state: Option<StateName> = valid_states
        .iter()
        .find(|candidate| candidate.value() == state_raw)
        .cloned();
    if state.is_none() {
        let message: &str = if state_raw.is_empty() {
            "State is required"
        } else {
            "State must be one of the listed states"
        };
        errors.insert(DraftField::State, message);
    }

    match (
        name,
        designation,
        date_of_birth,
        date_of_joining,
        salary,
        gender,
        state,
    ) {
        (
            Some(name),
            Some(designation),
            Some(date_of_birth),
            Some(date_of_joining),
            Some(salary),
            Some(gender),
            Some(state),
        ) if errors.is_empty() => Ok(EmployeeRecord {
            id: draft.id(),
            name,
            designation,
            date_of_birth: Some(date_of_birth),
            date_of_joining: Some(date_of_joining),
            salary: Some(salary),
            gender: Some(gender),
            state: Some(state),
        }),
        _ => Err(errors),
    }
}
