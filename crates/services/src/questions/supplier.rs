use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use quiz_core::model::{Difficulty, Question, QuestionSet, Region};

use super::fallback::fallback_questions;
use crate::error::SupplyError;

/// What to ask the generator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyRequest {
    count: NonZeroUsize,
    difficulty: Difficulty,
    region: Option<Region>,
}

impl SupplyRequest {
    /// `Region::World` is stored as "no filter".
    #[must_use]
    pub fn new(count: NonZeroUsize, difficulty: Difficulty, region: Option<Region>) -> Self {
        Self {
            count,
            difficulty,
            region: region.and_then(Region::filter),
        }
    }

    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Region filter; `None` means worldwide.
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        self.region
    }
}

/// A fallible producer of questions, typically a remote text generator.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `SupplyError` when the questions cannot be produced.
    async fn generate(&self, request: &SupplyRequest) -> Result<QuestionSet, SupplyError>;
}

/// Infallible question supply for the game.
///
/// Any error from the underlying source is logged and replaced by the built-in
/// fallback batch, which may hold fewer questions than requested.
#[derive(Clone)]
pub struct QuestionSupplier {
    source: Arc<dyn QuestionSource>,
    shuffle_options: bool,
}

impl QuestionSupplier {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            shuffle_options: false,
        }
    }

    /// Shuffle the option order of generated questions.
    ///
    /// Generators tend to list the correct answer first. The fallback batch is never
    /// shuffled.
    #[must_use]
    pub fn with_shuffle_options(mut self, shuffle_options: bool) -> Self {
        self.shuffle_options = shuffle_options;
        self
    }

    /// Produce at most `request.count()` questions, or the fallback batch.
    pub async fn supply(&self, request: &SupplyRequest) -> QuestionSet {
        debug!(
            count = request.count().get(),
            difficulty = %request.difficulty(),
            region = request.region().map_or("worldwide", Region::id),
            "requesting questions"
        );

        match self.source.generate(request).await {
            Ok(questions) => {
                let questions = limit(questions, request.count());
                let questions = if self.shuffle_options {
                    shuffle_options(questions)
                } else {
                    questions
                };
                info!(count = questions.len(), "questions supplied");
                questions
            }
            Err(err) => {
                warn!(error = %err, "question generation failed, using fallback questions");
                fallback_questions()
            }
        }
    }
}

fn limit(questions: QuestionSet, count: NonZeroUsize) -> QuestionSet {
    if questions.len() <= count.get() {
        return questions;
    }
    QuestionSet::new(questions[..count.get()].to_vec()).unwrap_or(questions)
}

fn shuffle_options(questions: QuestionSet) -> QuestionSet {
    let mut rng = rand::rng();
    let shuffled: Option<Vec<Question>> = questions
        .iter()
        .map(|question| {
            let mut options = question.options().to_vec();
            options.shuffle(&mut rng);
            Question::new(
                question.country(),
                question.description(),
                question.correct_answer(),
                options,
                question.fun_fact(),
            )
            .ok()
        })
        .collect();

    shuffled
        .and_then(|shuffled| QuestionSet::new(shuffled).ok())
        .unwrap_or(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(QuestionSet);

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn generate(&self, _request: &SupplyRequest) -> Result<QuestionSet, SupplyError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl QuestionSource for BrokenSource {
        async fn generate(&self, _request: &SupplyRequest) -> Result<QuestionSet, SupplyError> {
            Err(SupplyError::EmptyResponse)
        }
    }

    fn generated(len: usize) -> QuestionSet {
        let questions = (0..len)
            .map(|idx| {
                Question::new(
                    "Pérou",
                    "Poisson cru mariné au citron vert.",
                    format!("Plat {idx}"),
                    vec![format!("Plat {idx}"), "Lomo".into(), "Causa".into()],
                    "Servi avec de la patate douce.",
                )
                .unwrap()
            })
            .collect();
        QuestionSet::new(questions).unwrap()
    }

    fn request(count: usize) -> SupplyRequest {
        SupplyRequest::new(
            NonZeroUsize::new(count).unwrap(),
            Difficulty::Medium,
            Some(Region::Americas),
        )
    }

    #[test]
    fn world_region_means_no_filter() {
        let request = SupplyRequest::new(NonZeroUsize::MIN, Difficulty::Easy, Some(Region::World));
        assert_eq!(request.region(), None);
    }

    #[tokio::test]
    async fn passes_through_generated_questions() {
        let supplier = QuestionSupplier::new(Arc::new(FixedSource(generated(5))));
        let questions = supplier.supply(&request(5)).await;
        assert_eq!(questions, generated(5));
    }

    #[tokio::test]
    async fn drops_questions_beyond_the_requested_count() {
        let supplier = QuestionSupplier::new(Arc::new(FixedSource(generated(8))));
        let questions = supplier.supply(&request(5)).await;
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[4].correct_answer(), "Plat 4");
    }

    #[tokio::test]
    async fn failure_yields_fallback_batch() {
        let supplier = QuestionSupplier::new(Arc::new(BrokenSource));
        let questions = supplier.supply(&request(5)).await;
        assert_eq!(questions, fallback_questions());
        assert_eq!(questions.len(), 3);
    }

    #[tokio::test]
    async fn shuffling_keeps_answers_valid() {
        let supplier =
            QuestionSupplier::new(Arc::new(FixedSource(generated(5)))).with_shuffle_options(true);
        let questions = supplier.supply(&request(5)).await;

        for (idx, question) in questions.iter().enumerate() {
            let answer = format!("Plat {idx}");
            assert_eq!(question.correct_answer(), answer);
            assert!(question.options().contains(&answer));
            assert_eq!(question.options().len(), 3);
        }
    }
}
