use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating list of roster activity, newest first. Failed requests show the
/// request they sent underneath the message.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let errors_only = log().errors_only;
    let entries = log().shown();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Roster activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        class: if errors_only { "active" } else { "" },
                        onclick: move |_| log.write().errors_only = !errors_only,
                        if errors_only { "All" } else { "Errors only" }
                    }
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div {
                        class: "activity-log-empty",
                        if errors_only { "No failed requests." } else { "Nothing yet." }
                    }
                }
                for entry in entries {
                    ActivityLogRow { entry }
                }
            }
        }
    }
}

#[component]
fn ActivityLogRow(entry: LogEntry) -> Element {
    let tag = entry.level.tag();

    rsx! {
        div {
            class: "activity-log-entry {tag}",
            span { class: "activity-log-time", "{entry.timestamp}" }
            span { class: "activity-log-tag", " [{tag}]" }
            span { " {entry.message}" }
            if let Some(request) = &entry.request {
                div { class: "activity-log-request", "{request}" }
            }
        }
    }
}

/// Opens the panel. Shows the number of failed requests when there are any.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log().error_count();
    let label = match errors {
        0 => "Log".to_string(),
        1 => "1 error".to_string(),
        n => format!("{n} errors"),
    };

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Activity log",
            "{label}"
        }
    }
}
