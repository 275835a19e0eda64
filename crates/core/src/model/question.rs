use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

/// Number of answer options carried by every question.
pub const OPTIONS_PER_QUESTION: usize = 3;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("expected 3 options, got {0}")]
    OptionCount(usize),

    #[error("correct answer `{answer}` appears {count} times among the options")]
    AnswerNotUnique { answer: String, count: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("a question set needs at least one question")]
    Empty,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice riddle about a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    country: String,
    description: String,
    correct_answer: String,
    options: Vec<String>,
    fun_fact: String,
}

impl Question {
    /// Build a question, checking that the correct answer is exactly one of the options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyField` for blank text fields,
    /// `QuestionError::OptionCount` when there are not exactly three options, and
    /// `QuestionError::AnswerNotUnique` when the correct answer is missing from the
    /// options or listed more than once.
    pub fn new(
        country: impl Into<String>,
        description: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
        fun_fact: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let country = required(country.into(), "country")?;
        let description = required(description.into(), "description")?;
        let correct_answer = required(correct_answer.into(), "correctAnswer")?;
        let fun_fact = required(fun_fact.into(), "funFact")?;
        let options: Vec<String> = options
            .into_iter()
            .map(|option| option.trim().to_string())
            .collect();

        if options.len() != OPTIONS_PER_QUESTION {
            return Err(QuestionError::OptionCount(options.len()));
        }

        let count = options
            .iter()
            .filter(|option| **option == correct_answer)
            .count();
        if count != 1 {
            return Err(QuestionError::AnswerNotUnique {
                answer: correct_answer,
                count,
            });
        }

        Ok(Self {
            country,
            description,
            correct_answer,
            options,
            fun_fact,
        })
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Riddle text; it never names the dish.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn fun_fact(&self) -> &str {
        &self.fun_fact
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

fn required(value: String, field: &'static str) -> Result<String, QuestionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuestionError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

//
// ─── QUESTION SET ─────────────────────────────────────────────────────────────
//

/// Ordered, non-empty batch of questions for one playthrough.
///
/// Backed by an `Arc` so session snapshots can be cloned on every transition
/// without copying the questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet(Arc<[Question]>);

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self(questions.into()))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.0
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }
}

impl Deref for QuestionSet {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
