use dioxus::prelude::*;

use ui::{ActivityLog, RosterProvider, RosterView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Roster {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::BASE_CSS }
        RosterProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Roster() -> Element {
    rsx! {
        RosterView {}
    }
}
