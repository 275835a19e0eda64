use dioxus::prelude::*;
use tracing::debug;

use quiz_core::{GameAction, Session};
use quiz_core::model::Region;

use crate::actions::dispatch;
use crate::context::AppContext;

/// Spinner shown while questions are supplied. Mounting this view starts the
/// fetch; unmounting it drops the result.
#[component]
pub fn LoadingView() -> Element {
    let ctx = use_context::<AppContext>();
    let game = use_context::<Signal<Session>>();
    let game_loop = ctx.game_loop();

    let _load = use_resource(move || {
        let game_loop = game_loop.clone();
        async move {
            // `peek` keeps the resource from re-running on every session change.
            let loading = game.peek().clone();
            if let Some(questions) = game_loop.load_questions(&loading).await {
                debug!(questions = questions.len(), "questions ready");
                dispatch(game, GameAction::QuestionsLoaded(questions));
            }
        }
    });

    let destination = game
        .read()
        .selected_region()
        .map_or(Region::World.id(), Region::id);

    rsx! {
        div { class: "screen screen--loading",
            div { class: "spinner" }
            p { class: "loading-text",
                "Le chef prépare le menu..."
                span { class: "loading-text__detail", "Recherche de plats pour {destination}" }
            }
        }
    }
}
