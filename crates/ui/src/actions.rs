use dioxus::prelude::*;
use tracing::debug;

use quiz_core::{GameAction, Session};

/// Reduce `action` into the shared session signal.
pub fn dispatch(mut game: Signal<Session>, action: GameAction) {
    debug!(?action, "game action");
    let next = game.peek().apply(action);
    game.set(next);
}

/// Answer the current question, or `None` when the turn already has an answer
/// or no question is on screen.
///
/// A `Some` result is the only case in which the caller should schedule an
/// advance, which keeps a double click from skipping a question.
#[must_use]
pub fn answer_turn(session: &Session, option: &str) -> Option<Session> {
    if session.current_question().is_none() || !session.answer().is_pending() {
        return None;
    }
    Some(session.apply(GameAction::SubmitAnswer(option.to_string())))
}
