//! Roster context and hooks for the UI.

use api::controller;
use api::HttpStudentApi;
use dioxus::prelude::*;
use store::{reduce, Action, Dispatch, RosterState};

use crate::activity_log::{log_activity, log_failure, use_activity_log, ActivityLog, LogLevel};

/// [`Dispatch`] over the roster signal, for use inside spawned tasks.
#[derive(Clone, Copy)]
pub struct RosterHandle(pub Signal<RosterState>);

impl Dispatch for RosterHandle {
    // Peek so that async loaders never subscribe to the state they write.
    fn snapshot(&self) -> RosterState {
        self.0.peek().clone()
    }

    fn dispatch(&mut self, action: Action) {
        let mut state = self.0.write();
        let current = std::mem::take(&mut *state);
        *state = reduce(current, action);
    }
}

/// Get the roster state signal.
pub fn use_roster() -> Signal<RosterState> {
    use_context::<Signal<RosterState>>()
}

/// Get the REST client provided by [`RosterProvider`].
pub fn use_student_api() -> HttpStudentApi {
    use_context::<HttpStudentApi>()
}

/// Fetch the student list into the roster, reporting to the activity log.
pub async fn reload(
    api: HttpStudentApi,
    roster: Signal<RosterState>,
    mut log: Signal<ActivityLog>,
) {
    let mut handle = RosterHandle(roster);
    match controller::load(&api, &mut handle).await {
        Ok(count) => log_activity(&mut log, LogLevel::Info, &format!("Loaded {count} students")),
        Err(e) => log_failure(
            &mut log,
            &format!("There was an error fetching students: {e}"),
            api.describe("GET", None),
        ),
    }
}

/// Provider component that owns the roster state and the REST client.
/// Wrap the roster views with this component. Loads the student list on mount.
#[component]
pub fn RosterProvider(children: Element) -> Element {
    let client = use_hook(|| {
        crate::make_client()
            .inspect_err(|e| tracing::error!("Cannot create students client: {}", e))
    });

    match client {
        Ok(api) => rsx! {
            RosterScope { api, {children} }
        },
        Err(e) => rsx! {
            div {
                class: "roster-fatal",
                h2 { "Student Management" }
                p { "The students service is misconfigured: {e}" }
            }
        },
    }
}

#[component]
fn RosterScope(api: HttpStudentApi, children: Element) -> Element {
    let roster = use_context_provider(|| Signal::new(RosterState::default()));
    let log = use_activity_log();

    use_context_provider({
        let api = api.clone();
        move || api
    });

    let _loader = use_resource(move || reload(api.clone(), roster, log));

    rsx! {
        {children}
    }
}
