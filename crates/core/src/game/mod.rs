mod action;
mod session;

pub use action::GameAction;
pub use session::{
    AnswerState, CHEF_SCORE_THRESHOLD, MAX_MISTAKES, POINTS_PER_ANSWER, QUESTIONS_PER_GAME,
    Session, Status, TurnProgress,
};
