// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while deriving or validating employee data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date string could not be read as a calendar date.
    InvalidDate {
        /// The offending input.
        input: String,
        /// The parser's description of the problem.
        reason: String,
    },
    /// An age was requested for a birth date that lies after the reference date.
    BirthDateInFuture {
        /// The birth date.
        date_of_birth: Date,
        /// The reference date the age was computed against.
        as_of: Date,
    },
    /// Gender value is not part of the fixed enumeration.
    InvalidGender(String),
    /// Salary is not a non-negative number.
    InvalidSalary(String),
    /// Another employee with the same name and birth date already exists.
    DuplicateEmployee {
        /// The trimmed name of the candidate.
        name: String,
        /// The shared birth date.
        date_of_birth: Date,
    },
    /// A sort column name was not recognised.
    InvalidSortField(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { input, reason } => {
                write!(f, "Invalid date '{input}': {reason}")
            }
            Self::BirthDateInFuture {
                date_of_birth,
                as_of,
            } => {
                write!(
                    f,
                    "Date of birth {date_of_birth} is after the reference date {as_of}"
                )
            }
            Self::InvalidGender(value) => {
                write!(f, "Invalid gender: '{value}'. Must be Male or Female")
            }
            Self::InvalidSalary(msg) => write!(f, "Invalid salary: {msg}"),
            Self::DuplicateEmployee {
                name,
                date_of_birth,
            } => {
                write!(
                    f,
                    "An employee named '{name}' born on {date_of_birth} already exists"
                )
            }
            Self::InvalidSortField(value) => write!(f, "Unknown sort field: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
