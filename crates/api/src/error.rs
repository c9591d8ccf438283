// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use emp_console::{CoreError, SaveKind, SaveRejection};
use emp_console_domain::{EmployeeId, FieldErrors};
use thiserror::Error;

/// Errors from the remote employee API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server has no such resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("Request rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A body could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A change the remote service has accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A form save.
    Saved(SaveKind),
    /// A delete.
    Deleted(EmployeeId),
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saved(SaveKind::Create) => write!(f, "Employee added"),
            Self::Saved(SaveKind::Update(id)) => write!(f, "Employee {id} updated"),
            Self::Deleted(id) => write!(f, "Employee {id} deleted"),
        }
    }
}

/// Errors surfaced by the console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// One or more form fields are invalid. Nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The draft duplicates an existing employee. Nothing was sent.
    #[error("{0}")]
    Duplicate(String),

    /// The remote API call failed.
    #[error(transparent)]
    Network(#[from] ApiError),

    /// The form refused the transition.
    #[error(transparent)]
    Form(#[from] CoreError),

    /// The service applied the mutation but the reload after it failed.
    ///
    /// The change must not be retried; only the local list is stale.
    #[error("{mutation}, but reloading employees failed: {source}")]
    ReloadFailed {
        /// What the service applied.
        mutation: Mutation,
        /// Why the reload failed.
        #[source]
        source: ApiError,
    },

    /// A form operation was requested with no form open.
    #[error("No form is open")]
    NoOpenForm,

    /// The requested employee does not exist.
    #[error("Employee {0} not found")]
    EmployeeNotFound(EmployeeId),
}

impl From<SaveRejection> for ConsoleError {
    fn from(rejection: SaveRejection) -> Self {
        match rejection {
            SaveRejection::Invalid(errors) => Self::Validation(errors),
            SaveRejection::Duplicate(err) => Self::Duplicate(err.to_string()),
            SaveRejection::Blocked(err) => Self::Form(err),
        }
    }
}
