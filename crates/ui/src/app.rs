use dioxus::prelude::*;

use quiz_core::{Session, Status};

use crate::views::{GameView, IntroView, LoadingView, MapView, ResultView};

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Sauce Chef Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Le four a pris feu" }
                        pre { "{errors:?}" }
                    }
                },
                Screen {}
            }
        }
    }
}

/// The screen for the current status. Expects a `Signal<Session>` in context.
#[component]
pub fn Screen() -> Element {
    let game = use_context::<Signal<Session>>();
    let status = game.read().status();

    match status {
        Status::Intro => rsx! { IntroView {} },
        Status::SelectingRegion => rsx! { MapView {} },
        Status::Loading => rsx! { LoadingView {} },
        Status::Playing => rsx! { GameView {} },
        Status::Won | Status::Lost => rsx! { ResultView {} },
    }
}
