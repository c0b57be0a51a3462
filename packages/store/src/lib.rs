//! Framework-free core of the student roster: models, form validation, the
//! state reducer and client configuration.

pub mod config;
pub mod models;
pub mod roster;

pub use config::RosterConfig;
pub use models::{
    parse_age, Draft, Field, FieldParseError, StudentId, StudentPayload, StudentRecord,
    ValidationError,
};
pub use roster::{reduce, Action, Dispatch, FormTicket, Mode, RosterState};
