// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The console session: controllers wired to the remote employee service.
//!
//! Every remote call is awaited before the next step starts. In particular a
//! reload after a create, update, or delete only begins once the mutation's
//! response has arrived, so the reloaded list always reflects it.

use emp_console::{
    ChartAggregator, FormController, ListPage, ListView, LoadTicket, RecordStore, SaveKind,
    SaveTicket,
};
use emp_console_domain::{DraftField, EmployeeId, EmployeeRecord, StateName};
use time::Date;
use tracing::{debug, error, info, warn};

use crate::client::EmployeeApi;
use crate::error::{ApiError, ConsoleError, Mutation};

/// One user's console: the record store, the table, the chart, and at most
/// one open form.
#[derive(Debug)]
pub struct ConsoleSession<A> {
    api: A,
    store: RecordStore,
    list_view: ListView,
    chart: ChartAggregator,
    form: Option<FormController>,
}

impl<A: EmployeeApi> ConsoleSession<A> {
    /// Creates a session with an empty store. Call [`Self::refresh`] to load.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: RecordStore::new(),
            list_view: ListView::new(),
            chart: ChartAggregator::new(),
            form: None,
        }
    }

    /// Returns the remote service.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Returns the loaded records.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the table controller.
    #[must_use]
    pub const fn list_view(&self) -> &ListView {
        &self.list_view
    }

    /// Returns the table controller for search, sort, paging, and selection.
    pub const fn list_view_mut(&mut self) -> &mut ListView {
        &mut self.list_view
    }

    /// Renders the current table page.
    #[must_use]
    pub fn render_list(&self, today: Date) -> ListPage {
        self.list_view.render(self.store.records(), today)
    }

    /// Returns the filtered and sorted records across every page.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&EmployeeRecord> {
        self.list_view.filtered_sorted(self.store.records())
    }

    /// Returns the chart series.
    #[must_use]
    pub const fn chart(&self) -> &ChartAggregator {
        &self.chart
    }

    /// Returns the open form, if any.
    #[must_use]
    pub const fn form(&self) -> Option<&FormController> {
        self.form.as_ref()
    }

    /// Reloads every employee, replacing the store and refreshing the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails; the store is unchanged.
    pub async fn refresh(&mut self) -> Result<(), ConsoleError> {
        self.reload().await.map_err(ConsoleError::from)
    }

    async fn reload(&mut self) -> Result<(), ApiError> {
        let ticket: LoadTicket = self.store.begin_load();
        let records: Vec<EmployeeRecord> = self
            .api
            .list_employees()
            .await
            .inspect_err(|err| error!(%err, "Failed to load employees"))?;

        let count: usize = records.len();
        if self.store.apply_load(ticket, records) {
            self.chart.refresh(&self.store);
            info!(count, generation = self.store.generation(), "Loaded employees");
        }
        Ok(())
    }

    /// Reloads after `mutation` was applied by the service.
    async fn reload_after(&mut self, mutation: Mutation) -> Result<(), ConsoleError> {
        self.reload()
            .await
            .map_err(|source| ConsoleError::ReloadFailed { mutation, source })
    }

    /// Opens an empty form for a new employee.
    ///
    /// The state names and the employee list (for the duplicate check) are
    /// fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails; no form is opened.
    pub async fn open_create_form(&mut self) -> Result<&FormController, ConsoleError> {
        let (states, employees): (Vec<StateName>, Vec<EmployeeRecord>) =
            self.fetch_form_inputs().await?;
        debug!(states = states.len(), "Opening create form");
        Ok(self.form.insert(FormController::new(states, Some(employees))))
    }

    /// Opens the form on the employee with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if a fetch fails or no such employee exists.
    pub async fn open_edit_form(
        &mut self,
        id: EmployeeId,
        today: Date,
    ) -> Result<&FormController, ConsoleError> {
        let (states, employees): (Vec<StateName>, Vec<EmployeeRecord>) =
            self.fetch_form_inputs().await?;
        let record: EmployeeRecord = employees
            .iter()
            .find(|record| record.id == Some(id))
            .cloned()
            .ok_or(ConsoleError::EmployeeNotFound(id))?;
        debug!(%id, states = states.len(), "Opening edit form");
        Ok(self
            .form
            .insert(FormController::edit(&record, states, Some(employees), today)))
    }

    async fn fetch_form_inputs(
        &self,
    ) -> Result<(Vec<StateName>, Vec<EmployeeRecord>), ConsoleError> {
        futures::try_join!(self.api.list_states(), self.api.list_employees())
            .inspect_err(|err| error!(%err, "Failed to fetch form inputs"))
            .map_err(ConsoleError::from)
    }

    /// Changes a field of the open form.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open or the form is saving.
    pub fn change_field(
        &mut self,
        field: DraftField,
        value: &str,
        today: Date,
    ) -> Result<(), ConsoleError> {
        let form: &mut FormController = self.form.as_mut().ok_or(ConsoleError::NoOpenForm)?;
        form.change_field(field, value, today)?;
        Ok(())
    }

    /// Saves the open form.
    ///
    /// The draft is validated and checked for duplicates first; nothing is
    /// sent if either fails. After a successful create or update the list is
    /// reloaded. After a failed one the form stays open with the draft intact.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No form is open
    /// - The draft is invalid or a duplicate
    /// - The create or update fails
    /// - The reload after a successful save fails, as
    ///   `ConsoleError::ReloadFailed`; the save itself stands
    pub async fn save_form(&mut self) -> Result<SaveKind, ConsoleError> {
        let form: &mut FormController = self.form.as_mut().ok_or(ConsoleError::NoOpenForm)?;
        let ticket: SaveTicket = form.begin_save().map_err(|rejection| {
            warn!(%rejection, "Save rejected");
            ConsoleError::from(rejection)
        })?;

        let outcome: Result<Option<EmployeeRecord>, ApiError> = match ticket.kind() {
            SaveKind::Create => self.api.create_employee(ticket.record()).await,
            SaveKind::Update(id) => self.api.update_employee(id, ticket.record()).await,
        };

        match outcome {
            Ok(echoed) => {
                form.finish_save(&ticket, Ok(()));
                info!(
                    kind = ?ticket.kind(),
                    name = %ticket.record().name,
                    assigned_id = ?echoed.and_then(|record| record.id),
                    "Saved employee"
                );
                self.reload_after(Mutation::Saved(ticket.kind())).await?;
                Ok(ticket.kind())
            }
            Err(err) => {
                error!(%err, kind = ?ticket.kind(), "Failed to save employee");
                form.finish_save(&ticket, Err(err.to_string()));
                Err(ConsoleError::Network(err))
            }
        }
    }

    /// Discards the open form.
    ///
    /// # Errors
    ///
    /// Returns an error if no form is open or the form is saving.
    pub fn cancel_form(&mut self) -> Result<(), ConsoleError> {
        let form: &mut FormController = self.form.as_mut().ok_or(ConsoleError::NoOpenForm)?;
        form.cancel()?;
        self.form = None;
        Ok(())
    }

    /// Deletes the employee with identifier `id`, then reloads the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails, leaving the store untouched, or
    /// `ConsoleError::ReloadFailed` if only the reload after it fails.
    pub async fn delete_employee(&mut self, id: EmployeeId) -> Result<(), ConsoleError> {
        self.api
            .delete_employee(id)
            .await
            .inspect_err(|err| error!(%err, %id, "Failed to delete employee"))?;
        info!(%id, "Deleted employee");
        self.reload_after(Mutation::Deleted(id)).await
    }

    /// Fetches the selectable state names.
    ///
    /// # Errors
    ///
    /// Returns an error if the service call fails.
    pub async fn list_states(&self) -> Result<Vec<StateName>, ConsoleError> {
        Ok(self.api.list_states().await?)
    }

    /// Returns the address of the server-rendered report.
    #[must_use]
    pub fn report_url(&self) -> String {
        self.api.report_url()
    }

    /// Downloads the server-rendered report.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails.
    pub async fn fetch_report(&self) -> Result<Vec<u8>, ConsoleError> {
        let report: Vec<u8> = self
            .api
            .fetch_report()
            .await
            .inspect_err(|err| error!(%err, "Failed to fetch report"))?;
        info!(bytes = report.len(), "Fetched report");
        Ok(report)
    }
}
