use api::controller;
use dioxus::prelude::*;
use store::{StudentId, StudentRecord};

use crate::activity_log::{log_activity, log_failure, use_activity_log, LogLevel};
use crate::icons::{FaPenToSquare, FaTrash};
use crate::roster::{use_roster, use_student_api, RosterHandle};
use crate::Icon;

/// The roster's students, one row each, in list order.
#[component]
pub fn StudentList() -> Element {
    let roster = use_roster();
    let api = use_student_api();
    let mut log = use_activity_log();

    let state = roster();
    let editing_id = state.mode.editing_id().cloned();

    let on_edit = use_callback(move |id: StudentId| {
        let mut handle = RosterHandle(roster);
        controller::edit(&mut handle, id);
    });

    let on_delete = use_callback(move |id: StudentId| {
        let api = api.clone();
        spawn(async move {
            let mut handle = RosterHandle(roster);
            match controller::remove(&api, &mut handle, id.clone()).await {
                Ok(()) => log_activity(
                    &mut log,
                    LogLevel::Success,
                    &format!("Deleted student {id}"),
                ),
                Err(e) => log_failure(
                    &mut log,
                    &format!("There was an error deleting the student: {e}"),
                    api.describe("DELETE", Some(&id)),
                ),
            }
        });
    });

    rsx! {
        if state.loading && state.students.is_empty() {
            p { class: "student-list-empty", "Loading..." }
        } else if state.students.is_empty() {
            p { class: "student-list-empty", "No students yet." }
        }
        ul {
            class: "student-list",
            for student in state.students.iter() {
                StudentRow {
                    key: "{student.id}",
                    student: student.clone(),
                    active: editing_id.as_ref() == Some(&student.id),
                    removing: state.is_removing(&student.id),
                    on_edit: on_edit,
                    on_delete: on_delete,
                }
            }
        }
    }
}

#[component]
pub fn StudentRow(
    student: StudentRecord,
    active: bool,
    removing: bool,
    on_edit: EventHandler<StudentId>,
    on_delete: EventHandler<StudentId>,
) -> Element {
    let edit_id = student.id.clone();
    let delete_id = student.id.clone();

    rsx! {
        li {
            class: if active { "student-row active" } else { "student-row" },
            div {
                class: "student-details",
                p { class: "student-name", "{student.name}" }
                p { "Age: {student.age}" }
                p { "Address: {student.address}" }
                p { "Guardian: {student.guardian_name} ({student.guardian_contact})" }
            }
            div {
                class: "student-actions",
                button {
                    class: "edit",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "delete",
                    title: "Delete",
                    disabled: removing,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
