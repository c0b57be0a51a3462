//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{load_config, make_client};

pub mod views;
pub use views::RosterView;

pub const BASE_CSS: Asset = asset!("/assets/styling/base.css");

mod alert;
pub use alert::show_alert;

mod roster;
pub use roster::{reload, use_roster, use_student_api, RosterHandle, RosterProvider};

mod student_form;
pub use student_form::StudentForm;

mod student_list;
pub use student_list::{StudentList, StudentRow};

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel, log_activity, log_failure, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
