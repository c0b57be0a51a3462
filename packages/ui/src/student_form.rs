use api::controller;
use api::SubmitError;
use dioxus::prelude::*;
use store::{Dispatch, Field};

use crate::activity_log::{log_activity, log_failure, use_activity_log, LogLevel};
use crate::alert::show_alert;
use crate::roster::{use_roster, use_student_api, RosterHandle};

/// Create/update form bound to the roster draft.
///
/// The button adds a student while the roster is in adding mode and updates
/// the edited one otherwise. Empty fields block submission with an alert.
#[component]
pub fn StudentForm() -> Element {
    let roster = use_roster();
    let api = use_student_api();
    let mut log = use_activity_log();
    let mut missing = use_signal(Vec::<Field>::new);

    let state = roster();
    let editing = state.mode.is_editing();
    let submitting = state.submitting;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let mut handle = RosterHandle(roster);
            let target = handle.snapshot().mode.editing_id().cloned();
            let editing = target.is_some();
            match controller::submit(&api, &mut handle).await {
                Ok(record) => {
                    missing.set(Vec::new());
                    let verb = if editing { "Updated" } else { "Added" };
                    log_activity(
                        &mut log,
                        LogLevel::Success,
                        &format!("{verb} {}", record.name),
                    );
                }
                Err(SubmitError::Invalid(e)) => {
                    missing.set(e.missing.clone());
                    log_activity(&mut log, LogLevel::Warning, &e.to_string());
                    show_alert(&e.to_string());
                }
                Err(SubmitError::Busy) => {
                    log_activity(
                        &mut log,
                        LogLevel::Warning,
                        "Still saving the previous submission",
                    );
                }
                Err(SubmitError::Api(e)) => {
                    let (action, method) = if editing {
                        ("updating", "PUT")
                    } else {
                        ("adding", "POST")
                    };
                    log_failure(
                        &mut log,
                        &format!("There was an error {action} the student: {e}"),
                        api.describe(method, target.as_ref()),
                    );
                }
            }
        });
    };

    let on_cancel = move |_| {
        let mut handle = RosterHandle(roster);
        controller::cancel_edit(&mut handle);
        missing.set(Vec::new());
    };

    rsx! {
        form {
            class: "student-form",
            onsubmit: on_submit,

            for field in Field::ALL {
                div {
                    key: "{field}",
                    class: if missing().contains(&field) { "form-field missing" } else { "form-field" },
                    label { r#for: "student-{field}", "{field.label()}" }
                    input {
                        id: "student-{field}",
                        name: field.as_str(),
                        r#type: field.input_type(),
                        value: state.draft.get(field).to_string(),
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            if missing.peek().contains(&field) {
                                unmark_filled(&mut missing.write(), field, &value);
                            }
                            let mut handle = RosterHandle(roster);
                            if let Err(e) = controller::set_field(&mut handle, field.as_str(), value) {
                                tracing::error!("{}", e);
                            }
                        },
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    r#type: "submit",
                    class: if editing { "submit editing" } else { "submit" },
                    disabled: submitting,
                    if editing { "Update Student" } else { "Add Student" }
                }
                if editing {
                    button {
                        r#type: "button",
                        class: "cancel",
                        onclick: on_cancel,
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Drop the highlight from a field once it has a value again.
fn unmark_filled(missing: &mut Vec<Field>, field: Field, value: &str) {
    if !value.is_empty() {
        missing.retain(|f| *f != field);
    }
}
