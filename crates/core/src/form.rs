// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The create/edit employee form.
//!
//! ## States
//!
//! ```text
//! Empty ──change──▶ Editing ──begin_save──▶ Validating ──ok──▶ Saving
//!                     ▲                        │                 │
//!                     └──invalid / duplicate───┘        ┌────────┴────────┐
//!                                                       ▼                 ▼
//!                                                     Saved            Failed
//! ```
//!
//! - `cancel` returns to Empty from every state except Saving
//! - Failed keeps the draft so the user can retry without retyping
//! - Saved discards the draft
//!
//! The duplicate check only runs when the form was given the loaded employee
//! list. Without one the check is skipped and the caller is responsible for
//! it; [`FormController::duplicate_check_enabled`] reports which applies.

use crate::error::CoreError;
use emp_console_domain::{
    DomainError, DraftField, EmployeeDraft, EmployeeId, EmployeeRecord, FieldErrors, StateName,
    compute_age, parse_calendar_date, validate_draft, validate_not_duplicate,
};
use time::Date;
use tracing::{debug, warn};

/// Lifecycle state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormState {
    /// Nothing entered yet.
    Empty,
    /// The user is changing fields.
    Editing,
    /// The draft is being checked.
    Validating,
    /// The normalized record has been handed to the save collaborator.
    Saving,
    /// The save succeeded; the form is closed.
    Saved,
    /// The save collaborator reported an error; the draft is intact.
    Failed,
}

impl FormState {
    /// Returns the string representation of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Editing => "Editing",
            Self::Validating => "Validating",
            Self::Saving => "Saving",
            Self::Saved => "Saved",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a save creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    /// The draft has no identifier; the store will assign one.
    Create,
    /// The draft edits the record with this identifier.
    Update(EmployeeId),
}

/// A validated record handed to the save collaborator.
///
/// The ticket must be returned to [`FormController::finish_save`] with the
/// collaborator's outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    session: u64,
    kind: SaveKind,
    record: EmployeeRecord,
}

impl SaveTicket {
    /// Returns whether this is a create or an update.
    #[must_use]
    pub const fn kind(&self) -> SaveKind {
        self.kind
    }

    /// Returns the normalized record to send.
    #[must_use]
    pub const fn record(&self) -> &EmployeeRecord {
        &self.record
    }
}

/// Why a save did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRejection {
    /// One or more fields failed validation.
    Invalid(FieldErrors),
    /// The draft duplicates a loaded record. The form stays open.
    Duplicate(DomainError),
    /// The form is not in a state that allows saving.
    Blocked(CoreError),
}

impl std::fmt::Display for SaveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "Validation failed: {errors}"),
            Self::Duplicate(err) => write!(f, "{err}"),
            Self::Blocked(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SaveRejection {}

/// What happened when a save outcome was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveCompletion {
    /// The save succeeded and the form closed.
    Saved,
    /// The save failed and the form is open with the draft intact.
    Failed,
    /// The outcome belongs to an abandoned form session and was dropped.
    Ignored,
}

/// Controller for the employee form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    state: FormState,
    draft: EmployeeDraft,
    age: Option<u32>,
    valid_states: Vec<StateName>,
    existing: Option<Vec<EmployeeRecord>>,
    errors: FieldErrors,
    warning: Option<String>,
    failure: Option<String>,
    /// Bumped whenever the form is reset, so late outcomes can be recognised.
    session: u64,
}

impl FormController {
    /// Opens an empty form for a new employee.
    ///
    /// # Arguments
    ///
    /// * `valid_states` - The state names fetched for this form session
    /// * `existing` - The loaded employee list, enabling the duplicate check
    #[must_use]
    pub fn new(valid_states: Vec<StateName>, existing: Option<Vec<EmployeeRecord>>) -> Self {
        Self {
            state: FormState::Empty,
            draft: EmployeeDraft::new(),
            age: None,
            valid_states,
            existing,
            errors: FieldErrors::new(),
            warning: None,
            failure: None,
            session: 0,
        }
    }

    /// Opens the form on an existing record.
    ///
    /// The draft is pre-filled and the age derived against `today`.
    #[must_use]
    pub fn edit(
        record: &EmployeeRecord,
        valid_states: Vec<StateName>,
        existing: Option<Vec<EmployeeRecord>>,
        today: Date,
    ) -> Self {
        let mut form: Self = Self::new(valid_states, existing);
        form.draft = EmployeeDraft::from_record(record);
        form.age = record.age_as_of(today);
        form.state = FormState::Editing;
        form
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Returns the draft.
    #[must_use]
    pub const fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Returns the age derived from the draft's date of birth.
    #[must_use]
    pub const fn age(&self) -> Option<u32> {
        self.age
    }

    /// Returns the field errors from the last validation.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the duplicate warning from the last save attempt.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Returns the save collaborator's error from the last save attempt.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Returns the selectable state names.
    #[must_use]
    pub fn valid_states(&self) -> &[StateName] {
        &self.valid_states
    }

    /// Returns whether saves are checked against a loaded employee list.
    #[must_use]
    pub const fn duplicate_check_enabled(&self) -> bool {
        self.existing.is_some()
    }

    /// Returns whether the form edits an existing record.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.draft.id().is_some()
    }

    /// Returns the dialog title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Employee"
        } else {
            "Add Employee"
        }
    }

    /// Applies a field change.
    ///
    /// Changing the date of birth recomputes the age; a date that does not
    /// parse, or lies after `today`, leaves no age.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SaveInProgress` while the form is Saving.
    pub fn change_field(
        &mut self,
        field: DraftField,
        value: &str,
        today: Date,
    ) -> Result<(), CoreError> {
        if self.state == FormState::Saving {
            return Err(CoreError::SaveInProgress);
        }

        self.draft.set(field, value);
        self.errors.remove(field);
        self.warning = None;

        if field == DraftField::DateOfBirth {
            self.age = parse_calendar_date(value)
                .and_then(|dob| compute_age(dob, today))
                .ok();
        }

        self.state = FormState::Editing;
        Ok(())
    }

    /// Validates the draft and, if it passes, starts a save.
    ///
    /// On success the form is Saving and the returned ticket carries the
    /// normalized record. On rejection the form is back in Editing with the
    /// field errors or duplicate warning recorded.
    ///
    /// # Errors
    ///
    /// Returns a `SaveRejection` if:
    /// - Any field is invalid
    /// - The draft duplicates a loaded record (only when a list was supplied)
    /// - The form is Saving, Saved, or otherwise unable to save
    pub fn begin_save(&mut self) -> Result<SaveTicket, SaveRejection> {
        match self.state {
            FormState::Empty | FormState::Editing | FormState::Failed => {}
            FormState::Saving => return Err(SaveRejection::Blocked(CoreError::SaveInProgress)),
            from @ (FormState::Validating | FormState::Saved) => {
                return Err(SaveRejection::Blocked(CoreError::InvalidFormTransition {
                    from,
                    action: "save",
                }));
            }
        }

        self.state = FormState::Validating;
        self.warning = None;
        self.failure = None;

        let record: EmployeeRecord = match validate_draft(&self.draft, &self.valid_states) {
            Ok(record) => record,
            Err(errors) => {
                debug!(failed_fields = errors.len(), "Draft failed validation");
                self.errors = errors.clone();
                self.state = FormState::Editing;
                return Err(SaveRejection::Invalid(errors));
            }
        };
        self.errors = FieldErrors::new();

        if let Some(existing) = &self.existing {
            if let Err(err) = validate_not_duplicate(&record, existing) {
                warn!(%err, "Draft duplicates a loaded employee");
                self.warning = Some(err.to_string());
                self.state = FormState::Editing;
                return Err(SaveRejection::Duplicate(err));
            }
        } else {
            debug!("No employee list supplied; skipping duplicate check");
        }

        let kind: SaveKind = record.id.map_or(SaveKind::Create, SaveKind::Update);
        self.state = FormState::Saving;

        Ok(SaveTicket {
            session: self.session,
            kind,
            record,
        })
    }

    /// Reports the save collaborator's outcome.
    ///
    /// # Arguments
    ///
    /// * `ticket` - The ticket returned by [`FormController::begin_save`]
    /// * `outcome` - `Ok(())` on success, or the error message to show
    pub fn finish_save(&mut self, ticket: &SaveTicket, outcome: Result<(), String>) -> SaveCompletion {
        if ticket.session != self.session || self.state != FormState::Saving {
            debug!(
                ticket_session = ticket.session,
                session = self.session,
                state = %self.state,
                "Ignoring save outcome for an abandoned form"
            );
            return SaveCompletion::Ignored;
        }

        match outcome {
            Ok(()) => {
                self.draft = EmployeeDraft::new();
                self.age = None;
                self.state = FormState::Saved;
                SaveCompletion::Saved
            }
            Err(message) => {
                self.failure = Some(message);
                self.state = FormState::Failed;
                SaveCompletion::Failed
            }
        }
    }

    /// Discards the draft and returns to Empty.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SaveInProgress` while the form is Saving.
    pub fn cancel(&mut self) -> Result<(), CoreError> {
        if self.state == FormState::Saving {
            return Err(CoreError::SaveInProgress);
        }
        self.reset();
        Ok(())
    }

    /// Abandons the current form session, even mid-save, and starts over.
    ///
    /// Used when the user navigates away. Any outstanding ticket becomes
    /// stale and its outcome will be ignored.
    pub fn abandon(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = EmployeeDraft::new();
        self.age = None;
        self.errors = FieldErrors::new();
        self.warning = None;
        self.failure = None;
        self.state = FormState::Empty;
        self.session += 1;
    }
}
