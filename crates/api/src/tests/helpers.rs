// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use async_trait::async_trait;
use emp_console_domain::{EmployeeId, EmployeeRecord, Gender, StateName};
use rust_decimal::Decimal;
use std::sync::Mutex;
use time::Date;
use time::macros::date;

use crate::{ApiError, ConsoleSession, EmployeeApi};

pub const TODAY: Date = date!(2024 - 06 - 15);

/// How many times each remote operation was invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub states: usize,
}

#[derive(Debug, Default)]
struct FakeState {
    employees: Vec<EmployeeRecord>,
    states: Vec<StateName>,
    next_id: i64,
    fail_mutations: bool,
    fail_reloads_after_mutation: bool,
    calls: CallCounts,
}

impl FakeState {
    const fn mutated(&self) -> bool {
        self.calls.create + self.calls.update + self.calls.delete > 0
    }
}

/// In-memory employee service that assigns identifiers like the real one.
#[derive(Debug, Default)]
pub struct FakeEmployeeApi {
    state: Mutex<FakeState>,
}

impl FakeEmployeeApi {
    pub fn new(employees: Vec<EmployeeRecord>) -> Self {
        let next_id: i64 = employees
            .iter()
            .filter_map(|record| record.id.map(|id| id.value()))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(FakeState {
                employees,
                states: vec![StateName::new("Karnataka"), StateName::new("Kerala")],
                next_id,
                fail_mutations: false,
                fail_reloads_after_mutation: false,
                calls: CallCounts::default(),
            }),
        }
    }

    pub fn fail_mutations(&self) {
        self.state.lock().unwrap().fail_mutations = true;
    }

    /// Makes every list call after the first create, update, or delete fail.
    pub fn fail_reloads_after_mutation(&self) {
        self.state.lock().unwrap().fail_reloads_after_mutation = true;
    }

    pub fn calls(&self) -> CallCounts {
        self.state.lock().unwrap().calls
    }

    pub fn employees(&self) -> Vec<EmployeeRecord> {
        self.state.lock().unwrap().employees.clone()
    }
}

fn server_error() -> ApiError {
    ApiError::Rejected {
        status: 500,
        body: String::from("database unavailable"),
    }
}

#[async_trait]
impl EmployeeApi for FakeEmployeeApi {
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.list += 1;
        if state.fail_reloads_after_mutation && state.mutated() {
            return Err(ApiError::InvalidResponse(String::from("reload down")));
        }
        Ok(state.employees.clone())
    }

    async fn create_employee(
        &self,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRecord>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.create += 1;
        if state.fail_mutations {
            return Err(server_error());
        }
        let created: EmployeeRecord = record.clone().with_id(EmployeeId::new(state.next_id));
        state.next_id += 1;
        state.employees.push(created.clone());
        Ok(Some(created))
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        record: &EmployeeRecord,
    ) -> Result<Option<EmployeeRecord>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.update += 1;
        if state.fail_mutations {
            return Err(server_error());
        }
        let slot: &mut EmployeeRecord = state
            .employees
            .iter_mut()
            .find(|existing| existing.id == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("employee/{id}")))?;
        *slot = record.clone().with_id(id);
        // The real service answers updates with an empty body.
        Ok(None)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.delete += 1;
        if state.fail_mutations {
            return Err(server_error());
        }
        let before: usize = state.employees.len();
        state.employees.retain(|existing| existing.id != Some(id));
        if state.employees.len() == before {
            return Err(ApiError::NotFound(format!("employee/{id}")));
        }
        Ok(())
    }

    async fn list_states(&self) -> Result<Vec<StateName>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.states += 1;
        Ok(state.states.clone())
    }

    fn report_url(&self) -> String {
        String::from("memory://employee/report")
    }

    async fn fetch_report(&self) -> Result<Vec<u8>, ApiError> {
        Ok(b"%PDF-1.4 report".to_vec())
    }
}

pub fn create_test_record(id: i64, name: &str, designation: &str, salary: i64) -> EmployeeRecord {
    EmployeeRecord::new(name)
        .with_id(EmployeeId::new(id))
        .with_designation(designation)
        .with_date_of_birth(date!(1990 - 01 - 01))
        .with_date_of_joining(date!(2015 - 06 - 01))
        .with_salary(Decimal::from(salary))
        .with_gender(Gender::Female)
        .with_state(StateName::new("Kerala"))
}

pub fn create_test_session(employees: Vec<EmployeeRecord>) -> ConsoleSession<FakeEmployeeApi> {
    ConsoleSession::new(FakeEmployeeApi::new(employees))
}
