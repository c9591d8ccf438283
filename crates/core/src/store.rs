// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use emp_console_domain::{EmployeeId, EmployeeRecord};
use tracing::debug;

/// Token identifying one load request against the store.
///
/// Only the most recently issued ticket may replace the records; responses
/// carrying an older ticket arrived after the user moved on and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// The client-side cache of every employee record.
///
/// The store is never patched. Each successful load replaces the whole list,
/// which keeps the remote store authoritative after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
    /// Bumped on every applied load.
    generation: u64,
    /// Most recently issued load ticket.
    latest_ticket: u64,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
            latest_ticket: 0,
        }
    }

    /// Starts a load, invalidating every earlier ticket.
    pub const fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// Replaces the records with a load response.
    ///
    /// # Returns
    ///
    /// `true` if the records were replaced, `false` if the ticket is stale.
    pub fn apply_load(&mut self, ticket: LoadTicket, records: Vec<EmployeeRecord>) -> bool {
        if ticket.0 != self.latest_ticket {
            debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "Ignoring stale employee load"
            );
            return false;
        }
        self.records = records;
        self.generation += 1;
        true
    }

    /// Returns every record in server order.
    #[must_use]
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Finds a record by identifier.
    #[must_use]
    pub fn find(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.id == Some(id))
    }

    /// Returns how many loads have been applied.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
