use dioxus::prelude::*;

use quiz_core::{GameAction, Session};

use crate::actions::dispatch;
use crate::vm::map_result;

#[component]
pub fn ResultView() -> Element {
    let game = use_context::<Signal<Session>>();
    let Some(result) = map_result(&game.read()) else {
        return rsx! {};
    };
    let screen_class = if result.won {
        "screen screen--won"
    } else {
        "screen screen--lost"
    };

    rsx! {
        div { class: screen_class,
            div { class: "panel",
                div { class: "hero-emoji", "{result.emoji}" }
                h2 { class: "title", "{result.headline}" }
                p { class: "subtitle", "{result.tagline}" }

                div { class: "rewards",
                    p { class: "rewards__heading", "Récompenses & Score" }
                    div { class: "rewards__score",
                        span { "Score" }
                        span { class: "rewards__points", "{result.score} pts" }
                    }
                    div { class: "rewards__badges",
                        if result.badges.is_empty() {
                            span { class: "rewards__empty", "Aucun badge gagné..." }
                        }
                        for badge in result.badges.iter() {
                            span { key: "{badge}", class: "badge", "🏅 {badge}" }
                        }
                    }
                }

                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| dispatch(game, GameAction::Reset),
                    "Nouvelle Partie 🔄"
                }
            }
        }
    }
}
