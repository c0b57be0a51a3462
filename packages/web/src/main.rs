use dioxus::prelude::*;

use ui::{ActivityLog, RosterProvider, RosterView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Roster {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
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

/// Redirect unknown paths to `/`
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Roster {});
    rsx! {}
}
