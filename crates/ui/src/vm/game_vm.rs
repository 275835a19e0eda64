use quiz_core::game::AnswerState;
use quiz_core::{Session, Status};

use super::trap_vm::{TrapVm, map_trap};

const CORRECT_FEEDBACK: &str = "C'est validé ! 👨‍🍳✨";
const INCORRECT_FEEDBACK: &str = "Aïe ! C'est chaud ! 🔥";

/// Visual treatment of one answer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    /// Still selectable.
    Idle,
    /// The right answer, revealed after the player chose.
    Correct,
    /// A wrong answer after a mistake.
    Dimmed,
    /// A wrong answer after a correct choice.
    Neutral,
}

impl OptionStyle {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            OptionStyle::Idle => "option option--idle",
            OptionStyle::Correct => "option option--correct",
            OptionStyle::Dimmed => "option option--dimmed",
            OptionStyle::Neutral => "option option--neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub style: OptionStyle,
    pub disabled: bool,
    pub show_check: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub message: &'static str,
    pub fun_fact: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameVm {
    pub progress_label: String,
    pub score_label: String,
    pub country: String,
    pub difficulty_label: &'static str,
    pub description: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub trap: TrapVm,
    /// The last answer was wrong and the screen flashes red.
    pub alarmed: bool,
}

/// Project a playing snapshot into what the question screen displays.
///
/// Returns `None` outside `Playing`.
#[must_use]
pub fn map_game(session: &Session) -> Option<GameVm> {
    if session.status() != Status::Playing {
        return None;
    }
    let question = session.current_question()?;
    let progress = session.progress();
    let answer = session.answer();

    let options = question
        .options()
        .iter()
        .map(|option| {
            let is_answer = question.is_correct(option);
            let style = match answer {
                AnswerState::Pending => OptionStyle::Idle,
                _ if is_answer => OptionStyle::Correct,
                AnswerState::Incorrect => OptionStyle::Dimmed,
                AnswerState::Correct => OptionStyle::Neutral,
            };
            OptionVm {
                label: option.clone(),
                style,
                disabled: !answer.is_pending(),
                show_check: style == OptionStyle::Correct,
            }
        })
        .collect();

    let feedback = match answer {
        AnswerState::Pending => None,
        AnswerState::Correct | AnswerState::Incorrect => {
            let correct = answer == AnswerState::Correct;
            Some(FeedbackVm {
                correct,
                message: if correct {
                    CORRECT_FEEDBACK
                } else {
                    INCORRECT_FEEDBACK
                },
                fun_fact: question.fun_fact().to_string(),
            })
        }
    };

    Some(GameVm {
        progress_label: format!("Question {}/{}", progress.number(), progress.total),
        score_label: format!("{} pts", progress.score),
        country: question.country().to_string(),
        difficulty_label: session.difficulty().short_label(),
        description: question.description().to_string(),
        options,
        feedback,
        trap: map_trap(progress.mistakes, progress.max_mistakes),
        alarmed: answer == AnswerState::Incorrect,
    })
}
