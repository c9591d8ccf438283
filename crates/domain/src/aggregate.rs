// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EmployeeRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Group label for records without a designation.
pub const UNKNOWN_DESIGNATION: &str = "Unknown";

/// Salary total for one designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignationTotal {
    /// The designation, or [`UNKNOWN_DESIGNATION`].
    pub designation: String,
    /// Sum of the salaries in the group.
    pub total: Decimal,
}

/// Salary totals grouped by designation.
///
/// Groups keep the order in which their designation first appeared in the
/// input, so identical input always yields identical output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SalaryByDesignation {
    totals: Vec<DesignationTotal>,
}

impl SalaryByDesignation {
    /// Returns the total for `designation`, if the group exists.
    #[must_use]
    pub fn get(&self, designation: &str) -> Option<Decimal> {
        self.totals
            .iter()
            .find(|entry| entry.designation == designation)
            .map(|entry| entry.total)
    }

    /// Iterates the groups in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, DesignationTotal> {
        self.totals.iter()
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Returns the sum over every group, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.totals
            .iter()
            .fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.total))
    }

    /// Consumes the aggregate, returning the ordered groups.
    #[must_use]
    pub fn into_vec(self) -> Vec<DesignationTotal> {
        self.totals
    }
}

impl<'a> IntoIterator for &'a SalaryByDesignation {
    type Item = &'a DesignationTotal;
    type IntoIter = std::slice::Iter<'a, DesignationTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.iter()
    }
}

/// Sums salaries per designation.
///
/// Records with an empty or whitespace-only designation are grouped under
/// [`UNKNOWN_DESIGNATION`]. A missing salary contributes zero. Group totals
/// saturate at `Decimal::MAX` rather than overflowing.
#[must_use]
pub fn aggregate_salary_by_designation(records: &[EmployeeRecord]) -> SalaryByDesignation {
    let mut totals: Vec<DesignationTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let designation: &str = if record.designation.trim().is_empty() {
            UNKNOWN_DESIGNATION
        } else {
            &record.designation
        };
        let salary: Decimal = record.salary.unwrap_or(Decimal::ZERO);

        if let Some(&index) = positions.get(designation) {
            totals[index].total = totals[index].total.saturating_add(salary);
        } else {
            positions.insert(designation.to_string(), totals.len());
            totals.push(DesignationTotal {
                designation: designation.to_string(),
                total: salary,
            });
        }
    }

    SalaryByDesignation { totals }
}

/// Sums the salaries of `records`, saturating at the `Decimal` bounds.
///
/// A missing salary contributes zero.
#[must_use]
pub fn total_salary<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    records.into_iter().fold(Decimal::ZERO, |sum, record| {
        sum.saturating_add(record.salary.unwrap_or(Decimal::ZERO))
    })
}
