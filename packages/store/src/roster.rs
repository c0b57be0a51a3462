//! # Roster state container
//!
//! [`RosterState`] is the single source of truth for the student screen: the
//! list mirrored from the server, the form [`Draft`], and whether the form is
//! adding a new student or editing an existing one. It is only ever changed by
//! [`reduce`], a pure `(state, action) -> state` function, so every transition
//! can be tested without a renderer or a network.
//!
//! ## Stale results
//!
//! Requests complete in any order, and the user keeps working while they run.
//! Two counters let [`reduce`] recognise results that no longer apply:
//!
//! | Counter | Bumped when | Guards |
//! |---------|-------------|--------|
//! | `form_generation` | the form changes mode: edit, cancel, successful submit, edited record deleted or gone after reload | whether a create/update result may reset the form |
//! | `load_generation` | a list request starts | only the newest list response replaces the list |
//!
//! A create that finishes late still appends its record, since the record
//! exists on the server. An update only replaces a record that is still listed.
//!
//! `submitting` is not tied to a form session. At most one submit is in flight,
//! so any completion clears it, and a mode change while it runs leaves it set.
//!
//! ## Invariant
//!
//! In [`Mode::Editing`] the id always names a record in `students`.

use crate::models::{Draft, Field, StudentId, StudentRecord};

/// Whether the form creates a new record or updates an existing one.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Mode {
    #[default]
    Adding,
    Editing(StudentId),
}

impl Mode {
    pub fn editing_id(&self) -> Option<&StudentId> {
        match self {
            Mode::Adding => None,
            Mode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing(_))
    }
}

/// Identifies the form session a submit belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct FormTicket {
    pub generation: u64,
    /// Record being updated, `None` for a create.
    pub target: Option<StudentId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterState {
    pub students: Vec<StudentRecord>,
    pub draft: Draft,
    pub mode: Mode,
    pub form_generation: u64,
    pub load_generation: u64,
    pub loading: bool,
    pub submitting: bool,
    /// Ids with a delete request in flight.
    pub removing: Vec<StudentId>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    FieldChanged { field: Field, value: String },
    EditRequested(StudentId),
    EditCancelled,
    LoadStarted,
    Loaded { generation: u64, students: Vec<StudentRecord> },
    LoadFailed { generation: u64 },
    SubmitStarted,
    Created { ticket: FormTicket, record: StudentRecord },
    Updated { ticket: FormTicket, record: StudentRecord },
    SubmitFailed { ticket: FormTicket },
    RemoveStarted(StudentId),
    Removed(StudentId),
    RemoveFailed(StudentId),
}

impl RosterState {
    pub fn find(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.students.iter().find(|s| &s.id == id)
    }

    /// Ticket for a submit issued from the current form.
    pub fn ticket(&self) -> FormTicket {
        FormTicket {
            generation: self.form_generation,
            target: self.mode.editing_id().cloned(),
        }
    }

    pub fn is_current(&self, ticket: &FormTicket) -> bool {
        ticket.generation == self.form_generation
    }

    pub fn is_removing(&self, id: &StudentId) -> bool {
        self.removing.contains(id)
    }

    fn reset_form(&mut self) {
        self.draft = Draft::default();
        self.mode = Mode::Adding;
        self.form_generation += 1;
    }
}

/// Apply one action to the state.
pub fn reduce(mut state: RosterState, action: Action) -> RosterState {
    match action {
        Action::FieldChanged { field, value } => {
            state.draft.set(field, value);
        }
        Action::EditRequested(id) => {
            if let Some(record) = state.find(&id) {
                let draft = Draft::from(record);
                state.reset_form();
                state.draft = draft;
                state.mode = Mode::Editing(id);
            }
        }
        Action::EditCancelled => {
            if state.mode.is_editing() {
                state.reset_form();
            }
        }
        Action::LoadStarted => {
            state.load_generation += 1;
            state.loading = true;
        }
        Action::Loaded {
            generation,
            students,
        } => {
            if generation == state.load_generation {
                state.students = students;
                state.loading = false;
                let orphaned = state
                    .mode
                    .editing_id()
                    .is_some_and(|id| state.find(id).is_none());
                if orphaned {
                    state.reset_form();
                }
            }
        }
        Action::LoadFailed { generation } => {
            if generation == state.load_generation {
                state.loading = false;
            }
        }
        Action::SubmitStarted => {
            state.submitting = true;
        }
        Action::Created { ticket, record } => {
            state.submitting = false;
            state.students.push(record);
            if state.is_current(&ticket) {
                state.reset_form();
            }
        }
        Action::Updated { ticket, record } => {
            state.submitting = false;
            if let Some(target) = &ticket.target {
                if let Some(slot) = state.students.iter_mut().find(|s| &s.id == target) {
                    *slot = record;
                }
            }
            if state.is_current(&ticket) {
                state.reset_form();
            }
        }
        Action::SubmitFailed { .. } => {
            state.submitting = false;
        }
        Action::RemoveStarted(id) => {
            if !state.removing.contains(&id) {
                state.removing.push(id);
            }
        }
        Action::Removed(id) => {
            state.students.retain(|s| s.id != id);
            state.removing.retain(|r| r != &id);
            if state.mode.editing_id() == Some(&id) {
                state.reset_form();
            }
        }
        Action::RemoveFailed(id) => {
            state.removing.retain(|r| r != &id);
        }
    }
    state
}

/// Something that holds a [`RosterState`] and accepts actions.
///
/// Implemented for the plain state (tests, headless use) and by the UI for its
/// reactive signal.
pub trait Dispatch {
    fn snapshot(&self) -> RosterState;
    fn dispatch(&mut self, action: Action);
}

impl Dispatch for RosterState {
    fn snapshot(&self) -> RosterState {
        self.clone()
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(self);
        *self = reduce(state, action);
    }
}
