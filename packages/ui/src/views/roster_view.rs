use dioxus::prelude::*;

use crate::activity_log::use_activity_log;
use crate::icons::FaRotateRight;
use crate::roster::{reload, use_roster, use_student_api};
use crate::{ActivityLogPanel, ActivityLogToggle, Icon, StudentForm, StudentList};

const ROSTER_CSS: Asset = asset!("/assets/styling/roster.css");

/// The student management screen: form on the left, list on the right.
#[component]
pub fn RosterView() -> Element {
    let roster = use_roster();
    let api = use_student_api();
    let log = use_activity_log();
    let loading = roster().loading;

    let on_reload = move |_| {
        spawn(reload(api.clone(), roster, log));
    };

    rsx! {
        document::Stylesheet { href: ROSTER_CSS }

        div {
            class: "roster-layout",
            div {
                class: "roster-card roster-form-card",
                h1 { "Student Management" }
                StudentForm {}
            }
            div {
                class: "roster-card roster-list-card",
                div {
                    class: "roster-list-header",
                    h2 { "Students List" }
                    button {
                        class: "reload",
                        title: "Reload",
                        disabled: loading,
                        onclick: on_reload,
                        Icon { icon: FaRotateRight, width: 12, height: 12 }
                    }
                    ActivityLogToggle {}
                }
                StudentList {}
            }
        }
        ActivityLogPanel {}
    }
}
