// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::form::FormState;
use emp_console_domain::DomainError;

/// Errors that can occur during controller transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The form cannot change while a save is in flight.
    SaveInProgress,
    /// The requested transition is not valid from the current form state.
    InvalidFormTransition {
        /// The state the form was in.
        from: FormState,
        /// The transition that was attempted.
        action: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SaveInProgress => write!(f, "A save is already in progress"),
            Self::InvalidFormTransition { from, action } => {
                write!(f, "Cannot {action} while the form is {from}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
