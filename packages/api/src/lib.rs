//! # API crate — REST access to the students resource
//!
//! Everything the roster needs to talk to the service, independent of any UI
//! framework.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`StudentApi`] trait and its `reqwest` implementation [`HttpStudentApi`] |
//! | [`memory`] | [`MemoryStudentApi`], an in-process stand-in for the service |
//! | [`controller`] | Async flows (`load`, `submit`, `remove`, ...) that drive a [`store::RosterState`] |
//! | [`error`] | [`ApiError`] |

pub mod client;
pub mod controller;
pub mod error;
pub mod memory;

pub use client::{HttpStudentApi, StudentApi};
pub use controller::SubmitError;
pub use error::ApiError;
pub use memory::MemoryStudentApi;

pub use store::{StudentId, StudentPayload, StudentRecord};
