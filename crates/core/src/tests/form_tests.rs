// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CoreError, FormController, FormState, SaveCompletion, SaveKind, SaveRejection, SaveTicket,
};
use emp_console_domain::{DomainError, DraftField, EmployeeDraft, EmployeeId, EmployeeRecord};
use rust_decimal::Decimal;
use time::macros::date;

use super::helpers::{TODAY, create_test_draft, create_test_record, create_test_states};

/// Builds a create form whose draft matches `create_test_draft(name)`.
fn create_filled_form(name: &str, existing: Option<Vec<EmployeeRecord>>) -> FormController {
    let mut form: FormController = FormController::new(create_test_states(), existing);
    let draft: EmployeeDraft = create_test_draft(name);
    for field in DraftField::ALL {
        form.change_field(field, draft.get(field), TODAY).unwrap();
    }
    form
}

#[test]
fn test_new_form_starts_empty() {
    let form: FormController = FormController::new(create_test_states(), None);

    assert_eq!(form.state(), FormState::Empty);
    assert_eq!(form.title(), "Add Employee");
    assert!(form.age().is_none());
    assert!(!form.duplicate_check_enabled());
}

#[test]
fn test_edit_form_is_prefilled() {
    let record: EmployeeRecord = create_test_record(7, "Anna", 50_000);
    let form: FormController = FormController::edit(&record, create_test_states(), None, TODAY);

    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.title(), "Edit Employee");
    assert_eq!(form.draft().get(DraftField::DateOfBirth), "1990-01-01");
    assert_eq!(form.draft().get(DraftField::Salary), "50000");
    assert_eq!(form.age(), Some(34));
}

#[test]
fn test_changing_birth_date_recomputes_age() {
    let mut form: FormController = FormController::new(create_test_states(), None);

    form.change_field(DraftField::DateOfBirth, "2000-06-16", TODAY)
        .unwrap();
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.age(), Some(23));

    form.change_field(DraftField::DateOfBirth, "2000-06-15", TODAY)
        .unwrap();
    assert_eq!(form.age(), Some(24));

    form.change_field(DraftField::DateOfBirth, "not a date", TODAY)
        .unwrap();
    assert!(form.age().is_none());

    form.change_field(DraftField::DateOfBirth, "2030-01-01", TODAY)
        .unwrap();
    assert!(form.age().is_none());
}

#[test]
fn test_missing_name_is_rejected_without_ticket() {
    let mut form: FormController = create_filled_form("Dana", None);
    form.change_field(DraftField::Name, "   ", TODAY).unwrap();

    let result: Result<SaveTicket, SaveRejection> = form.begin_save();

    let Err(SaveRejection::Invalid(errors)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert_eq!(errors.get_by_key("name"), Some("Please enter name"));
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.errors(), &errors);
}

#[test]
fn test_empty_form_reports_every_field() {
    let mut form: FormController = FormController::new(create_test_states(), None);

    let Err(SaveRejection::Invalid(errors)) = form.begin_save() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), DraftField::ALL.len());
}

#[test]
fn test_changing_a_field_clears_its_error() {
    let mut form: FormController = FormController::new(create_test_states(), None);
    assert!(form.begin_save().is_err());
    assert!(form.errors().contains(DraftField::Name));

    form.change_field(DraftField::Name, "Dana", TODAY).unwrap();

    assert!(!form.errors().contains(DraftField::Name));
    assert!(form.errors().contains(DraftField::Salary));
}

#[test]
fn test_valid_create_produces_normalized_ticket() {
    let mut form: FormController = create_filled_form("  Dana  ", None);

    let ticket: SaveTicket = form.begin_save().unwrap();

    assert_eq!(form.state(), FormState::Saving);
    assert_eq!(ticket.kind(), SaveKind::Create);
    assert_eq!(ticket.record().name, "Dana");
    assert_eq!(ticket.record().salary, Some(Decimal::from(42_000)));
    assert_eq!(ticket.record().date_of_birth, Some(date!(1992 - 03 - 04)));
}

#[test]
fn test_edit_produces_update_ticket() {
    let record: EmployeeRecord = create_test_record(7, "Anna", 50_000);
    let mut form: FormController = FormController::edit(&record, create_test_states(), None, TODAY);

    let ticket: SaveTicket = form.begin_save().unwrap();
    assert_eq!(ticket.kind(), SaveKind::Update(EmployeeId::new(7)));
}

#[test]
fn test_duplicate_is_a_warning_when_list_supplied() {
    let existing: Vec<EmployeeRecord> = vec![
        create_test_record(1, "dana", 1).with_date_of_birth(date!(1992 - 03 - 04)),
    ];
    let mut form: FormController = create_filled_form("Dana", Some(existing));
    assert!(form.duplicate_check_enabled());

    let result: Result<SaveTicket, SaveRejection> = form.begin_save();

    assert!(matches!(
        result,
        Err(SaveRejection::Duplicate(DomainError::DuplicateEmployee { .. }))
    ));
    assert_eq!(form.state(), FormState::Editing);
    assert!(form.warning().is_some());
    assert_eq!(form.draft().get(DraftField::Name), "Dana");
}

#[test]
fn test_duplicate_check_skipped_without_list() {
    let mut form: FormController = create_filled_form("Dana", None);
    assert!(form.begin_save().is_ok());
}

#[test]
fn test_successful_save_discards_draft() {
    let mut form: FormController = create_filled_form("Dana", None);
    let ticket: SaveTicket = form.begin_save().unwrap();

    assert_eq!(form.finish_save(&ticket, Ok(())), SaveCompletion::Saved);
    assert_eq!(form.state(), FormState::Saved);
    assert_eq!(form.draft().get(DraftField::Name), "");
}

#[test]
fn test_failed_save_keeps_draft_and_allows_retry() {
    let mut form: FormController = create_filled_form("Dana", None);
    let ticket: SaveTicket = form.begin_save().unwrap();

    let completion: SaveCompletion =
        form.finish_save(&ticket, Err(String::from("server unavailable")));

    assert_eq!(completion, SaveCompletion::Failed);
    assert_eq!(form.state(), FormState::Failed);
    assert_eq!(form.failure(), Some("server unavailable"));
    assert_eq!(form.draft().get(DraftField::Name), "Dana");

    assert!(form.begin_save().is_ok());
    assert!(form.failure().is_none());
}

#[test]
fn test_form_is_locked_while_saving() {
    let mut form: FormController = create_filled_form("Dana", None);
    let _ticket: SaveTicket = form.begin_save().unwrap();

    assert_eq!(
        form.change_field(DraftField::Name, "Other", TODAY),
        Err(CoreError::SaveInProgress)
    );
    assert_eq!(form.cancel(), Err(CoreError::SaveInProgress));
    assert_eq!(
        form.begin_save(),
        Err(SaveRejection::Blocked(CoreError::SaveInProgress))
    );
    assert_eq!(form.state(), FormState::Saving);
}

#[test]
fn test_saved_form_cannot_be_saved_again() {
    let mut form: FormController = create_filled_form("Dana", None);
    let ticket: SaveTicket = form.begin_save().unwrap();
    form.finish_save(&ticket, Ok(()));

    assert_eq!(
        form.begin_save(),
        Err(SaveRejection::Blocked(CoreError::InvalidFormTransition {
            from: FormState::Saved,
            action: "save",
        }))
    );
}

#[test]
fn test_cancel_returns_to_empty() {
    let mut form: FormController = create_filled_form("Dana", None);

    form.cancel().unwrap();

    assert_eq!(form.state(), FormState::Empty);
    assert_eq!(form.draft().get(DraftField::Name), "");
    assert!(form.age().is_none());
}

#[test]
fn test_outcome_for_abandoned_session_is_ignored() {
    let mut form: FormController = create_filled_form("Dana", None);
    let ticket: SaveTicket = form.begin_save().unwrap();

    form.abandon();
    form.change_field(DraftField::Name, "Eve", TODAY).unwrap();

    assert_eq!(form.finish_save(&ticket, Ok(())), SaveCompletion::Ignored);
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.draft().get(DraftField::Name), "Eve");
}

#[test]
fn test_outcome_reported_twice_is_ignored() {
    let mut form: FormController = create_filled_form("Dana", None);
    let ticket: SaveTicket = form.begin_save().unwrap();

    assert_eq!(form.finish_save(&ticket, Ok(())), SaveCompletion::Saved);
    assert_eq!(
        form.finish_save(&ticket, Err(String::from("late"))),
        SaveCompletion::Ignored
    );
    assert_eq!(form.state(), FormState::Saved);
}
