//! # Roster controller
//!
//! The async flows behind each user gesture. Every function reads the current
//! state through a [`Dispatch`] handle, talks to a [`StudentApi`], and reports
//! the outcome back as [`Action`]s. The reducer decides whether a late result
//! still applies, so these functions never inspect the state after an await.
//!
//! Failures are logged with `tracing` and returned to the caller, which is
//! expected to surface them (the UI appends them to its activity log).

use store::{Action, Dispatch, Field, FieldParseError, StudentId, StudentRecord, ValidationError};
use thiserror::Error;

use crate::client::StudentApi;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submit is already in progress")]
    Busy,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetch the collection into the store. Returns the number of records.
pub async fn load<A: StudentApi, D: Dispatch>(api: &A, store: &mut D) -> Result<usize, ApiError> {
    store.dispatch(Action::LoadStarted);
    let generation = store.snapshot().load_generation;

    match api.list().await {
        Ok(students) => {
            let count = students.len();
            tracing::info!(count, "Loaded students");
            store.dispatch(Action::Loaded {
                generation,
                students,
            });
            Ok(count)
        }
        Err(e) => {
            tracing::error!("There was an error fetching students: {}", e);
            store.dispatch(Action::LoadFailed { generation });
            Err(e)
        }
    }
}

/// Update one draft field by its input name.
pub fn set_field<D: Dispatch>(store: &mut D, name: &str, value: String) -> Result<(), FieldParseError> {
    let field: Field = name.parse()?;
    store.dispatch(Action::FieldChanged { field, value });
    Ok(())
}

/// Load a listed record into the form for editing. No request is made.
pub fn edit<D: Dispatch>(store: &mut D, id: StudentId) {
    store.dispatch(Action::EditRequested(id));
}

pub fn cancel_edit<D: Dispatch>(store: &mut D) {
    store.dispatch(Action::EditCancelled);
}

/// Validate the draft and create or update depending on the form mode.
///
/// Nothing is sent when validation fails or another submit is still running.
pub async fn submit<A: StudentApi, D: Dispatch>(
    api: &A,
    store: &mut D,
) -> Result<StudentRecord, SubmitError> {
    let state = store.snapshot();
    if state.submitting {
        return Err(SubmitError::Busy);
    }
    let payload = state.draft.validate().inspect_err(|e| {
        tracing::warn!(missing = ?e.missing, "Rejected incomplete student form");
    })?;
    let ticket = state.ticket();
    store.dispatch(Action::SubmitStarted);

    let result = match &ticket.target {
        Some(id) => api.update(id, &payload).await,
        None => api.create(&payload).await,
    };

    match (result, ticket.target.is_some()) {
        (Ok(record), false) => {
            tracing::info!(id = %record.id, "Added student");
            store.dispatch(Action::Created {
                ticket,
                record: record.clone(),
            });
            Ok(record)
        }
        (Ok(record), true) => {
            tracing::info!(id = %record.id, "Updated student");
            store.dispatch(Action::Updated {
                ticket,
                record: record.clone(),
            });
            Ok(record)
        }
        (Err(e), editing) => {
            if editing {
                tracing::error!("There was an error updating the student: {}", e);
            } else {
                tracing::error!("There was an error adding the student: {}", e);
            }
            store.dispatch(Action::SubmitFailed { ticket });
            Err(e.into())
        }
    }
}

/// Delete a record on the server, then drop it from the list.
pub async fn remove<A: StudentApi, D: Dispatch>(
    api: &A,
    store: &mut D,
    id: StudentId,
) -> Result<(), ApiError> {
    store.dispatch(Action::RemoveStarted(id.clone()));

    match api.remove(&id).await {
        Ok(()) => {
            tracing::info!(%id, "Deleted student");
            store.dispatch(Action::Removed(id));
            Ok(())
        }
        Err(e) => {
            tracing::error!(%id, "There was an error deleting the student: {}", e);
            store.dispatch(Action::RemoveFailed(id));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStudentApi;
    use store::{Draft, Mode, RosterState};

    fn record(id: i64, name: &str, age: i64) -> StudentRecord {
        StudentRecord {
            id: id.into(),
            name: name.to_string(),
            age,
            address: "X".to_string(),
            guardian_name: "G".to_string(),
            guardian_contact: "C".to_string(),
        }
    }

    fn fill(state: &mut RosterState, name: &str, age: &str) {
        set_field(state, "name", name.to_string()).unwrap();
        set_field(state, "age", age.to_string()).unwrap();
        set_field(state, "address", "1 Main St".to_string()).unwrap();
        set_field(state, "guardianName", "Grace".to_string()).unwrap();
        set_field(state, "guardianContact", "555-0100".to_string()).unwrap();
    }

    #[tokio::test]
    async fn test_load_populates_list() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10), record(2, "B", 11)]);
        let mut state = RosterState::default();

        assert_eq!(load(&api, &mut state).await, Ok(2));
        assert_eq!(state.students.len(), 2);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_list() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();

        api.set_offline(true);
        assert!(load(&api, &mut state).await.is_err());
        assert_eq!(state.students, vec![record(1, "A", 10)]);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let api = MemoryStudentApi::new();
        let mut state = RosterState::default();

        for missing in Field::ALL {
            fill(&mut state, "Ada", "12");
            set_field(&mut state, missing.as_str(), String::new()).unwrap();
            let err = submit(&api, &mut state).await.unwrap_err();
            assert_eq!(
                err,
                SubmitError::Invalid(ValidationError {
                    missing: vec![missing]
                })
            );
        }
        assert_eq!(api.requests(), 0);
        assert!(!state.submitting);
    }

    #[tokio::test]
    async fn test_create_appends_server_record() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();

        fill(&mut state, "Ada", "12");
        let created = submit(&api, &mut state).await.unwrap();

        assert_eq!(created.id, StudentId::Number(2));
        assert_eq!(state.students.len(), 2);
        assert_eq!(state.students[1], created);
        assert_eq!(state.draft, Draft::default());
        assert_eq!(state.mode, Mode::Adding);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10), record(2, "B", 11)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();

        edit(&mut state, 1.into());
        assert_eq!(api.requests(), 1);
        assert_eq!(state.draft.name, "A");
        assert_eq!(state.draft.age, "10");

        set_field(&mut state, "name", "Alice".to_string()).unwrap();
        let updated = submit(&api, &mut state).await.unwrap();

        assert_eq!(updated.id, StudentId::Number(1));
        assert_eq!(state.students[0].name, "Alice");
        assert_eq!(state.students[1], record(2, "B", 11));
        assert_eq!(state.mode, Mode::Adding);
        assert_eq!(api.students()[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let api = MemoryStudentApi::new();
        let mut state = RosterState::default();
        fill(&mut state, "Ada", "12");
        let draft = state.draft.clone();

        api.set_offline(true);
        let err = submit(&api, &mut state).await.unwrap_err();
        assert!(matches!(err, SubmitError::Api(ApiError::Network(_))));
        assert_eq!(state.draft, draft);
        assert!(state.students.is_empty());
        assert!(!state.submitting);
    }

    #[tokio::test]
    async fn test_busy_submit_is_rejected() {
        let api = MemoryStudentApi::new();
        let mut state = RosterState::default();
        fill(&mut state, "Ada", "12");
        state.dispatch(Action::SubmitStarted);

        assert_eq!(submit(&api, &mut state).await, Err(SubmitError::Busy));
        assert_eq!(api.requests(), 0);
    }

    #[tokio::test]
    async fn test_edit_during_submit_stays_busy() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();
        fill(&mut state, "Ada", "12");
        state.dispatch(Action::SubmitStarted);

        edit(&mut state, 1.into());
        assert!(state.submitting);
        assert_eq!(submit(&api, &mut state).await, Err(SubmitError::Busy));

        cancel_edit(&mut state);
        fill(&mut state, "Ada", "12");
        assert_eq!(submit(&api, &mut state).await, Err(SubmitError::Busy));
        assert_eq!(api.requests(), 1);
    }

    #[tokio::test]
    async fn test_non_numeric_age_is_still_sent() {
        let api = MemoryStudentApi::new();
        let mut state = RosterState::default();
        fill(&mut state, "Ada", "abc");

        let created = submit(&api, &mut state).await.unwrap();
        assert_eq!(api.requests(), 1);
        assert_eq!(created.age, 0);
    }

    #[tokio::test]
    async fn test_remove_then_reload_empty() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();

        remove(&api, &mut state, 1.into()).await.unwrap();
        assert!(state.students.is_empty());

        load(&api, &mut state).await.unwrap();
        assert!(state.students.is_empty());
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_list() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10), record(2, "B", 11)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();

        assert_eq!(
            remove(&api, &mut state, 3.into()).await,
            Err(ApiError::Status(404))
        );
        assert_eq!(state.students.len(), 2);
        assert!(state.removing.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_field_name() {
        let mut state = RosterState::default();
        assert!(set_field(&mut state, "email", "x".to_string()).is_err());
        assert_eq!(state.draft, Draft::default());
    }

    #[tokio::test]
    async fn test_cancel_edit() {
        let api = MemoryStudentApi::with_students(vec![record(1, "A", 10)]);
        let mut state = RosterState::default();
        load(&api, &mut state).await.unwrap();

        edit(&mut state, 1.into());
        cancel_edit(&mut state);
        assert_eq!(state.mode, Mode::Adding);
        assert_eq!(state.draft, Draft::default());
        assert_eq!(api.requests(), 1);
    }
}
