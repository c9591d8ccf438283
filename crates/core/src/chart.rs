// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::RecordStore;
use emp_console_domain::{DesignationTotal, SalaryByDesignation, aggregate_salary_by_designation};
use rust_decimal::Decimal;
use tracing::debug;

/// Salary-by-designation series backing the chart.
///
/// The series is cached against the store generation it was computed from
/// and only regenerated after the store has been reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartAggregator {
    series: SalaryByDesignation,
    /// Store generation the series reflects, `None` before the first refresh.
    generation: Option<u64>,
}

impl ChartAggregator {
    /// Creates an aggregator with an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerates the series if the store changed since the last refresh.
    ///
    /// # Returns
    ///
    /// `true` if the series was regenerated.
    pub fn refresh(&mut self, store: &RecordStore) -> bool {
        if self.generation == Some(store.generation()) {
            return false;
        }
        self.series = aggregate_salary_by_designation(store.records());
        self.generation = Some(store.generation());
        debug!(
            generation = store.generation(),
            groups = self.series.len(),
            "Regenerated salary chart series"
        );
        true
    }

    /// Returns the `(designation, total)` pairs in first-appearance order.
    #[must_use]
    pub const fn series(&self) -> &SalaryByDesignation {
        &self.series
    }

    /// Returns the designation labels in series order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.series
            .iter()
            .map(|entry| entry.designation.as_str())
            .collect()
    }

    /// Returns a designation's share of the total payroll as a percentage.
    ///
    /// Returns `None` for an unknown designation, or when the share cannot be
    /// represented. When every salary is zero each share is zero.
    #[must_use]
    pub fn share_of_total(&self, designation: &str) -> Option<Decimal> {
        let entry: &DesignationTotal = self
            .series
            .iter()
            .find(|entry| entry.designation == designation)?;
        let grand_total: Decimal = self.series.grand_total();
        if grand_total.is_zero() {
            return Some(Decimal::ZERO);
        }
        entry
            .total
            .checked_div(grand_total)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}
