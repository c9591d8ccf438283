// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::age::compute_age;
use crate::error::DomainError;
use rust_decimal::Decimal;
use std::str::FromStr;
use time::Date;

/// Identifier assigned to an employee by the remote store.
///
/// The client never creates one; drafts carry `None` until the store answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender of an employee.
///
/// Gender values are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Every selectable gender, in display order.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Parses a gender from a string.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not name a gender.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }

    /// Returns the string representation sent to the remote store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A state name from the closed list published by the remote store.
///
/// The value is opaque; it is only ever compared against the fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateName(String);

impl StateName {
    /// Creates a new `StateName`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the state name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee record as held by the client.
///
/// Records arriving from the remote store are accepted leniently, so every
/// attribute other than the textual ones may be missing. An empty `name` or
/// `designation` means the value was absent.
///
/// Age is deliberately not a field: it is derived from `date_of_birth`
/// whenever it is needed (see [`EmployeeRecord::age_as_of`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeRecord {
    /// Store-assigned identifier, `None` for unsaved drafts.
    pub id: Option<EmployeeId>,
    /// Display name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Date of birth.
    pub date_of_birth: Option<Date>,
    /// Date of joining.
    pub date_of_joining: Option<Date>,
    /// Salary.
    pub salary: Option<Decimal>,
    /// Gender.
    pub gender: Option<Gender>,
    /// State of residence.
    pub state: Option<StateName>,
}

impl EmployeeRecord {
    /// Creates a record with only a name set.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Sets the store identifier.
    #[must_use]
    pub const fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the designation.
    #[must_use]
    pub fn with_designation(mut self, designation: &str) -> Self {
        self.designation = designation.to_string();
        self
    }

    /// Sets the date of birth.
    #[must_use]
    pub const fn with_date_of_birth(mut self, date_of_birth: Date) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the date of joining.
    #[must_use]
    pub const fn with_date_of_joining(mut self, date_of_joining: Date) -> Self {
        self.date_of_joining = Some(date_of_joining);
        self
    }

    /// Sets the salary.
    #[must_use]
    pub const fn with_salary(mut self, salary: Decimal) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Sets the gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the state.
    #[must_use]
    pub fn with_state(mut self, state: StateName) -> Self {
        self.state = Some(state);
        self
    }

    /// Derives the employee's age in full years at `as_of`.
    ///
    /// Returns `None` when the birth date is missing or lies after `as_of`.
    #[must_use]
    pub fn age_as_of(&self, as_of: Date) -> Option<u32> {
        self.date_of_birth
            .and_then(|dob| compute_age(dob, as_of).ok())
    }
}

/// Parses a salary from text.
///
/// Accepts plain decimals (`"1500"`, `"1500.75"`) and scientific notation
/// (`"1.5e3"`). Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `DomainError::InvalidSalary` if the text is not a number or the
/// number is negative.
pub fn parse_salary(input: &str) -> Result<Decimal, DomainError> {
    let trimmed: &str = input.trim();
    let value: Decimal = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DomainError::InvalidSalary(format!("'{trimmed}' is not a number")))?;

    // Rule: salary must be non-negative
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::InvalidSalary(format!(
            "{value} is negative; salary must be at least 0"
        )));
    }

    Ok(value)
}
