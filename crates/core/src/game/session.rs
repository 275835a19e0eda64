use crate::model::{Badge, BadgeSet, Difficulty, Question, QuestionSet, Region};

/// Mistakes allowed before the playthrough is lost.
pub const MAX_MISTAKES: u32 = 4;
/// Questions requested from the supplier for each playthrough.
pub const QUESTIONS_PER_GAME: usize = 5;
/// Base points for a correct answer, scaled by the difficulty multiplier.
pub const POINTS_PER_ANSWER: u32 = 100;
/// Final score needed to earn the `Chef` badge.
pub const CHEF_SCORE_THRESHOLD: u32 = 500;

//
// ─── STATUS ───────────────────────────────────────────────────────────────────
//

/// Game progression state. Also selects the screen shown to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Intro,
    SelectingRegion,
    Loading,
    Playing,
    Won,
    Lost,
}

impl Status {
    /// `Won` and `Lost` end the playthrough; only `reset` leaves them.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

/// Outcome of the answer submitted for the current question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnswerState {
    /// Waiting for the player to pick an option.
    #[default]
    Pending,
    Correct,
    Incorrect,
}

impl AnswerState {
    #[must_use]
    pub const fn from_correct(correct: bool) -> Self {
        if correct {
            AnswerState::Correct
        } else {
            AnswerState::Incorrect
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, AnswerState::Pending)
    }
}

/// Aggregated view of turn progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnProgress {
    /// Zero-based index of the current question.
    pub index: usize,
    pub total: usize,
    pub score: u32,
    pub mistakes: u32,
    pub max_mistakes: u32,
}

impl TurnProgress {
    /// One-based question number for display.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub const fn remaining_mistakes(&self) -> u32 {
        self.max_mistakes.saturating_sub(self.mistakes)
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Immutable snapshot of the game.
///
/// Every transition borrows the current snapshot and returns the next one. Calls
/// made outside a transition's guard return an unchanged copy, so callers never need
/// to handle an error for a button pressed at the wrong moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    status: Status,
    difficulty: Difficulty,
    selected_region: Option<Region>,
    questions: Option<QuestionSet>,
    current_index: usize,
    score: u32,
    mistakes: u32,
    answer: AnswerState,
    earned_badges: BadgeSet,
}

impl Session {
    /// Fresh session on the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn selected_region(&self) -> Option<Region> {
        self.selected_region
    }

    /// Questions for the current playthrough; empty outside of one.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        self.questions.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub fn answer(&self) -> AnswerState {
        self.answer
    }

    #[must_use]
    pub fn earned_badges(&self) -> &BadgeSet {
        &self.earned_badges
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.status {
            Status::Playing => self.questions().get(self.current_index),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> TurnProgress {
        TurnProgress {
            index: self.current_index,
            total: self.questions().len(),
            score: self.score,
            mistakes: self.mistakes,
            max_mistakes: MAX_MISTAKES,
        }
    }

    /// Pick a difficulty on the intro screen and move to the region picker.
    #[must_use]
    pub fn begin_selection(&self, difficulty: Difficulty) -> Self {
        if self.status != Status::Intro {
            return self.clone();
        }
        Self {
            status: Status::SelectingRegion,
            difficulty,
            ..self.clone()
        }
    }

    /// Leave the region picker without starting a playthrough.
    #[must_use]
    pub fn return_to_menu(&self) -> Self {
        if self.status != Status::SelectingRegion {
            return self.clone();
        }
        Self {
            status: Status::Intro,
            ..self.clone()
        }
    }

    /// Fix the region and enter `Loading` until questions arrive.
    ///
    /// The caller fetches questions for the returned snapshot and hands them to
    /// [`Session::questions_loaded`].
    #[must_use]
    pub fn begin_session(&self, region: Region) -> Self {
        if self.status != Status::SelectingRegion {
            return self.clone();
        }
        Self {
            status: Status::Loading,
            selected_region: Some(region),
            questions: None,
            ..self.clone()
        }
    }

    /// Start the playthrough with the supplied questions.
    ///
    /// Ignored unless the session is still `Loading`, so a late batch for an
    /// abandoned load is dropped.
    #[must_use]
    pub fn questions_loaded(&self, questions: QuestionSet) -> Self {
        if self.status != Status::Loading {
            return self.clone();
        }
        Self {
            status: Status::Playing,
            questions: Some(questions),
            current_index: 0,
            score: 0,
            mistakes: 0,
            answer: AnswerState::Pending,
            ..self.clone()
        }
    }

    /// Lock in an answer for the current question.
    ///
    /// Score and mistakes are left untouched until [`Session::advance_turn`].
    #[must_use]
    pub fn submit_answer(&self, option: &str) -> Self {
        if !self.answer.is_pending() {
            return self.clone();
        }
        let Some(question) = self.current_question() else {
            return self.clone();
        };
        Self {
            answer: AnswerState::from_correct(question.is_correct(option)),
            ..self.clone()
        }
    }

    /// Resolve the answered turn: score it, then lose, win, or move on.
    #[must_use]
    pub fn advance_turn(&self) -> Self {
        if self.status != Status::Playing || self.answer.is_pending() {
            return self.clone();
        }
        let Some(questions) = self.questions.as_ref() else {
            return self.clone();
        };

        let mut next = self.clone();
        next.answer = AnswerState::Pending;

        if self.answer == AnswerState::Correct {
            let points = POINTS_PER_ANSWER * self.difficulty.multiplier();
            next.score = self.score.saturating_add(points);
        } else {
            next.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
        }

        // A losing mistake on the final question is still a loss.
        if next.mistakes >= MAX_MISTAKES {
            next.status = Status::Lost;
        } else if self.current_index >= questions.last_index() {
            next.status = Status::Won;
            next.award_badges();
        } else {
            next.current_index = self.current_index + 1;
        }

        next
    }

    /// Leave a finished playthrough and return to the intro screen.
    ///
    /// Difficulty and earned badges carry over to the next playthrough.
    #[must_use]
    pub fn reset(&self) -> Self {
        if !self.status.is_terminal() {
            return self.clone();
        }
        Self {
            status: Status::Intro,
            difficulty: self.difficulty,
            earned_badges: self.earned_badges.clone(),
            ..Self::default()
        }
    }

    fn award_badges(&mut self) {
        if self.score >= CHEF_SCORE_THRESHOLD {
            self.earned_badges.insert(Badge::Chef);
        }
        if let Some(region) = self.selected_region.and_then(Region::filter) {
            self.earned_badges.insert(Badge::Explorer(region));
        }
    }
}
