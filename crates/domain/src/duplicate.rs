// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duplicate detection.
//!
//! Two records describe the same person when their trimmed, case-folded names
//! and their birth dates match. A record is never a duplicate of itself, so
//! records sharing an identifier are skipped; this is what lets an edited
//! record be saved without tripping over its own stored copy.

use crate::error::DomainError;
use crate::types::EmployeeRecord;

fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}

const fn shares_id(a: &EmployeeRecord, b: &EmployeeRecord) -> bool {
    match (a.id, b.id) {
        (Some(left), Some(right)) => left.value() == right.value(),
        _ => false,
    }
}

/// Finds the first existing record that duplicates `candidate`.
///
/// A candidate without a date of birth has nothing to match on and never
/// finds a duplicate.
#[must_use]
pub fn find_duplicate<'a>(
    candidate: &EmployeeRecord,
    existing: &'a [EmployeeRecord],
) -> Option<&'a EmployeeRecord> {
    let date_of_birth = candidate.date_of_birth?;
    let name: String = normalized_name(&candidate.name);

    existing.iter().find(|record| {
        !shares_id(candidate, record)
            && record.date_of_birth == Some(date_of_birth)
            && normalized_name(&record.name) == name
    })
}

/// Returns whether `candidate` duplicates any record in `existing`.
#[must_use]
pub fn is_duplicate(candidate: &EmployeeRecord, existing: &[EmployeeRecord]) -> bool {
    find_duplicate(candidate, existing).is_some()
}

/// Validates that `candidate` does not duplicate an existing record.
///
/// # Errors
///
/// Returns `DomainError::DuplicateEmployee` naming the candidate if a
/// duplicate is found.
pub fn validate_not_duplicate(
    candidate: &EmployeeRecord,
    existing: &[EmployeeRecord],
) -> Result<(), DomainError> {
    match (find_duplicate(candidate, existing), candidate.date_of_birth) {
        (Some(_), Some(date_of_birth)) => Err(DomainError::DuplicateEmployee {
            name: candidate.name.trim().to_string(),
            date_of_birth,
        }),
        _ => Ok(()),
    }
}
