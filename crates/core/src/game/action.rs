use crate::model::{Difficulty, QuestionSet, Region};

use super::session::Session;

/// Player or loader intent, dispatched through [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    BeginSelection(Difficulty),
    ReturnToMenu,
    BeginSession(Region),
    QuestionsLoaded(QuestionSet),
    SubmitAnswer(String),
    AdvanceTurn,
    Reset,
}

impl Session {
    /// Apply a single action and return the next snapshot.
    #[must_use]
    pub fn apply(&self, action: GameAction) -> Session {
        match action {
            GameAction::BeginSelection(difficulty) => self.begin_selection(difficulty),
            GameAction::ReturnToMenu => self.return_to_menu(),
            GameAction::BeginSession(region) => self.begin_session(region),
            GameAction::QuestionsLoaded(questions) => self.questions_loaded(questions),
            GameAction::SubmitAnswer(option) => self.submit_answer(&option),
            GameAction::AdvanceTurn => self.advance_turn(),
            GameAction::Reset => self.reset(),
        }
    }
}
