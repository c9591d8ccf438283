// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The employee table: search, sort, paginate, select.
//!
//! ## Pipeline
//!
//! Every render applies, in this order:
//! 1. Filter by the search term (case-insensitive name substring)
//! 2. Stable sort by the selected column and direction (skipped when unset)
//! 3. Slice the requested page of [`PAGE_SIZE`] rows
//!
//! ## Invariants
//!
//! - `total_pages` is at least 1, even when nothing matches
//! - An out-of-range page is clamped to the nearest valid page when rendered
//! - Changing the search term or the sort never resets the page
//! - "Select all" selects exactly the records passing the filter
//! - The salary total covers the whole filtered set, not just the page

use emp_console_domain::{
    EmployeeId, EmployeeRecord, SortDirection, SortField, compare_by, matches_search,
    total_salary,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use time::Date;
use tracing::debug;

/// Rows per page.
pub const PAGE_SIZE: usize = 5;

/// The table's UI state.
///
/// Read freely; changed only through [`ListView`] transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    search_term: String,
    sort_field: Option<SortField>,
    sort_direction: SortDirection,
    /// Requested page, 1-based. May exceed the page count until rendered.
    current_page: usize,
    selected_ids: BTreeSet<EmployeeId>,
    select_all: bool,
}

impl ListViewState {
    /// Returns the search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the sort column, if any.
    #[must_use]
    pub const fn sort_field(&self) -> Option<SortField> {
        self.sort_field
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Returns the requested page (1-based, unclamped).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the selected identifiers.
    #[must_use]
    pub const fn selected_ids(&self) -> &BTreeSet<EmployeeId> {
        &self.selected_ids
    }

    /// Returns whether the select-all checkbox is checked.
    #[must_use]
    pub const fn is_select_all(&self) -> bool {
        self.select_all
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            selected_ids: BTreeSet::new(),
            select_all: false,
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// The record shown in the row.
    pub record: EmployeeRecord,
    /// Age derived at render time.
    pub age: Option<u32>,
    /// Whether the row's checkbox is ticked.
    pub selected: bool,
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    /// Rows on this page, at most [`PAGE_SIZE`].
    pub rows: Vec<ListRow>,
    /// The page actually shown (clamped), 1-based.
    pub page: usize,
    /// Number of pages over the filtered set, at least 1.
    pub total_pages: usize,
    /// Number of records passing the filter.
    pub filtered_count: usize,
    /// Sum of salaries over every record passing the filter.
    pub salary_total: Decimal,
}

/// Controller for the employee table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    state: ListViewState,
}

/// Computes the page count for a number of filtered records.
#[must_use]
pub const fn total_pages_for(filtered_count: usize) -> usize {
    if filtered_count == 0 {
        1
    } else {
        filtered_count.div_ceil(PAGE_SIZE)
    }
}

impl ListView {
    /// Creates a table with no search, no sort, on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current UI state.
    #[must_use]
    pub const fn state(&self) -> &ListViewState {
        &self.state
    }

    /// Sets the search term. The current page is kept.
    pub fn set_search_term(&mut self, term: &str) {
        term.clone_into(&mut self.state.search_term);
    }

    /// Handles a click on a column header.
    ///
    /// Clicking the sorted column flips the direction; clicking another column
    /// sorts by it ascending. The current page is kept.
    pub fn toggle_sort(&mut self, field: SortField) {
        match self.state.sort_field {
            Some(current) if current == field => {
                self.state.sort_direction = self.state.sort_direction.toggled();
            }
            _ => {
                self.state.sort_field = Some(field);
                self.state.sort_direction = SortDirection::Ascending;
            }
        }
    }

    /// Sorts by a column in an explicit direction.
    pub const fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.state.sort_field = Some(field);
        self.state.sort_direction = direction;
    }

    /// Removes the sort, restoring server order.
    pub const fn clear_sort(&mut self) {
        self.state.sort_field = None;
        self.state.sort_direction = SortDirection::Ascending;
    }

    /// Requests a page. Pages below 1 are treated as 1; pages past the end
    /// are clamped when rendered.
    pub const fn go_to_page(&mut self, page: usize) {
        self.state.current_page = if page == 0 { 1 } else { page };
    }

    /// Moves to the next page, stopping at the last one.
    pub fn next_page(&mut self, records: &[EmployeeRecord]) {
        let total_pages: usize = total_pages_for(self.filtered_count(records));
        let page: usize = self.effective_page(total_pages);
        self.state.current_page = (page + 1).min(total_pages);
    }

    /// Moves to the previous page, stopping at the first one.
    pub fn previous_page(&mut self, records: &[EmployeeRecord]) {
        let total_pages: usize = total_pages_for(self.filtered_count(records));
        let page: usize = self.effective_page(total_pages);
        self.state.current_page = page.saturating_sub(1).max(1);
    }

    /// Ticks or unticks a single row.
    ///
    /// Unticking a row also unticks the select-all checkbox.
    pub fn toggle_selection(&mut self, id: EmployeeId) {
        if self.state.selected_ids.remove(&id) {
            self.state.select_all = false;
        } else {
            self.state.selected_ids.insert(id);
        }
    }

    /// Handles the select-all checkbox.
    ///
    /// When unchecked, selects every record currently passing the filter,
    /// including those on other pages. When checked, clears the selection.
    pub fn toggle_select_all(&mut self, records: &[EmployeeRecord]) {
        if self.state.select_all {
            self.state.selected_ids.clear();
        } else {
            self.state.selected_ids = records
                .iter()
                .filter(|record| matches_search(record, &self.state.search_term))
                .filter_map(|record| record.id)
                .collect();
        }
        self.state.select_all = !self.state.select_all;
    }

    /// Applies filter and sort, returning the full ordered result.
    #[must_use]
    pub fn filtered_sorted<'a>(&self, records: &'a [EmployeeRecord]) -> Vec<&'a EmployeeRecord> {
        let mut visible: Vec<&EmployeeRecord> = records
            .iter()
            .filter(|record| matches_search(record, &self.state.search_term))
            .collect();

        if let Some(field) = self.state.sort_field {
            let compare = compare_by(field);
            let direction: SortDirection = self.state.sort_direction;
            // sort_by is stable, so equal keys keep their filtered order
            visible.sort_by(|a, b| direction.apply(compare(*a, *b)));
        }

        visible
    }

    /// Renders the requested page.
    ///
    /// # Arguments
    ///
    /// * `records` - Every record in the store
    /// * `today` - Reference date for the derived ages
    #[must_use]
    pub fn render(&self, records: &[EmployeeRecord], today: Date) -> ListPage {
        let visible: Vec<&EmployeeRecord> = self.filtered_sorted(records);
        let filtered_count: usize = visible.len();
        let total_pages: usize = total_pages_for(filtered_count);
        let page: usize = self.effective_page(total_pages);

        let salary_total: Decimal = total_salary(visible.iter().copied());

        let rows: Vec<ListRow> = visible
            .iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|record| ListRow {
                record: (*record).clone(),
                age: record.age_as_of(today),
                selected: record
                    .id
                    .is_some_and(|id| self.state.selected_ids.contains(&id)),
            })
            .collect();

        if page != self.state.current_page {
            debug!(
                requested = self.state.current_page,
                shown = page,
                total_pages,
                "Clamped requested page"
            );
        }

        ListPage {
            rows,
            page,
            total_pages,
            filtered_count,
            salary_total,
        }
    }

    fn filtered_count(&self, records: &[EmployeeRecord]) -> usize {
        records
            .iter()
            .filter(|record| matches_search(record, &self.state.search_term))
            .count()
    }

    fn effective_page(&self, total_pages: usize) -> usize {
        self.state.current_page.clamp(1, total_pages)
    }
}
