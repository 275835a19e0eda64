use dioxus::prelude::*;
use tracing::debug;

use quiz_core::model::Difficulty;
use quiz_core::{GameAction, Session};

use crate::actions::dispatch;
use crate::views::LegalModal;

fn difficulty_icon(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "🥣",
        Difficulty::Medium => "🍲",
        Difficulty::Hard => "👑",
    }
}

fn choose_difficulty(game: Signal<Session>, difficulty: Difficulty) {
    debug!(%difficulty, "difficulty chosen");
    dispatch(game, GameAction::BeginSelection(difficulty));
}

#[component]
pub fn IntroView() -> Element {
    let game = use_context::<Signal<Session>>();
    let mut legal_open = use_signal(|| false);

    rsx! {
        div { class: "screen screen--intro",
            button {
                class: "compliance-button",
                r#type: "button",
                onclick: move |_| legal_open.set(true),
                "⚖️ Conformité"
            }

            div { class: "panel",
                div { class: "hero-emoji", "🥘" }
                h1 { class: "title", "Sauce Chef Quiz" }
                p { class: "subtitle", "Choisis ton niveau, Chef !" }

                div { class: "difficulty-list",
                    for difficulty in Difficulty::ALL {
                        button {
                            key: "{difficulty.id()}",
                            class: "difficulty",
                            r#type: "button",
                            onclick: move |_| choose_difficulty(game, difficulty),
                            span { "{difficulty.label()}" }
                            span { class: "difficulty__icon", "{difficulty_icon(difficulty)}" }
                        }
                    }
                }

                p { class: "legal-footer",
                    "En jouant, vous acceptez notre "
                    button {
                        class: "link-button link-button--inline",
                        r#type: "button",
                        onclick: move |_| legal_open.set(true),
                        "Politique de Lanceur d'Alerte"
                    }
                    "."
                }
            }

            LegalModal { open: legal_open }
        }
    }
}
