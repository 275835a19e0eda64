use std::num::NonZeroUsize;

use tracing::info;

use quiz_core::game::QUESTIONS_PER_GAME;
use quiz_core::model::{QuestionSet, Region};
use quiz_core::{Session, Status};

use crate::questions::{QuestionSupplier, SupplyRequest};

const DEFAULT_QUESTION_COUNT: NonZeroUsize = match NonZeroUsize::new(QUESTIONS_PER_GAME) {
    Some(count) => count,
    None => NonZeroUsize::MIN,
};

/// Orchestrates session start: the only step of the game that waits on I/O.
#[derive(Clone)]
pub struct GameLoopService {
    supplier: QuestionSupplier,
    question_count: NonZeroUsize,
}

impl GameLoopService {
    #[must_use]
    pub fn new(supplier: QuestionSupplier) -> Self {
        Self {
            supplier,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: NonZeroUsize) -> Self {
        self.question_count = question_count;
        self
    }

    /// Supply request for a `Loading` snapshot, `None` for any other status.
    #[must_use]
    pub fn supply_request(&self, session: &Session) -> Option<SupplyRequest> {
        if session.status() != Status::Loading {
            return None;
        }
        Some(SupplyRequest::new(
            self.question_count,
            session.difficulty(),
            session.selected_region(),
        ))
    }

    /// Fetch questions for a `Loading` snapshot.
    ///
    /// Returns `None` when the snapshot is not loading. Supplier failures are
    /// already absorbed into the fallback batch.
    pub async fn load_questions(&self, session: &Session) -> Option<QuestionSet> {
        let request = self.supply_request(session)?;
        Some(self.supplier.supply(&request).await)
    }

    /// Run `begin_session` end to end: enter `Loading`, await the supplier, start
    /// playing.
    ///
    /// A snapshot that is not on the region picker is returned unchanged.
    pub async fn begin_session(&self, session: &Session, region: Region) -> Session {
        let loading = session.begin_session(region);
        let Some(questions) = self.load_questions(&loading).await else {
            return loading;
        };

        info!(
            difficulty = %loading.difficulty(),
            region = %region,
            questions = questions.len(),
            "playthrough started"
        );
        loading.questions_loaded(questions)
    }
}
