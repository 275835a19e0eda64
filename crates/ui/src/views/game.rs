#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use quiz_core::{GameAction, Session};

use crate::actions::{answer_turn, dispatch};
use crate::context::AppContext;
use crate::views::SauceTrap;
use crate::vm::map_game;

/// Record the answer, then advance once the feedback has been on screen for
/// `delay`.
///
/// Clicks after the first answer of a turn are ignored so only one advance is
/// ever scheduled per turn.
fn answer_and_schedule(mut game: Signal<Session>, option: &str, delay: Duration) {
    let Some(answered) = answer_turn(&game.peek(), option) else {
        return;
    };
    debug!(answer = ?answered.answer(), "answer submitted");
    game.set(answered);

    spawn(async move {
        tokio::time::sleep(delay).await;
        dispatch(game, GameAction::AdvanceTurn);
    });
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let game = use_context::<Signal<Session>>();
    let delay = ctx.auto_advance_delay();
    let answer = use_callback(move |option: String| answer_and_schedule(game, &option, delay));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(answer);
            }
        }
    }

    let Some(vm) = map_game(&game.read()) else {
        return rsx! {};
    };

    let screen_class = if vm.alarmed {
        "screen screen--game screen--alarmed"
    } else {
        "screen screen--game"
    };

    let options = vm.options.into_iter().map(move |option| {
        let label = option.label.clone();
        rsx! {
            button {
                key: "{option.label}",
                class: option.style.class(),
                r#type: "button",
                disabled: option.disabled,
                onclick: move |_| answer.call(label.clone()),
                span { "{option.label}" }
                if option.show_check {
                    span { class: "option__check", "✅" }
                }
            }
        }
    });

    rsx! {
        div { class: screen_class,
            header { class: "game-header",
                div { class: "game-header__progress",
                    span { "🌍" }
                    span { "{vm.progress_label}" }
                }
                div { class: "game-header__score", "{vm.score_label}" }
            }

            div { class: "panel panel--game",
                SauceTrap { trap: vm.trap }

                div { class: "tags",
                    span { class: "tag tag--country", "📍 {vm.country}" }
                    span { class: "tag tag--difficulty", "{vm.difficulty_label}" }
                }

                h2 { class: "question", "{vm.description}" }

                div { class: "options", {options} }

                if let Some(feedback) = vm.feedback {
                    div {
                        class: if feedback.correct { "feedback feedback--correct" } else { "feedback feedback--incorrect" },
                        p { class: "feedback__message", "{feedback.message}" }
                        p { class: "feedback__fact", "💡 Saviez-vous ? {feedback.fun_fact}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    answer: Rc<RefCell<Option<Callback<String>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, answer: Callback<String>) {
        *self.answer.borrow_mut() = Some(answer);
    }

    pub(crate) fn answer(&self) -> Callback<String> {
        (*self.answer.borrow()).expect("game answer registered")
    }
}
