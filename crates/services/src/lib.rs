#![forbid(unsafe_code)]

pub mod error;
pub mod game_loop;
pub mod questions;

pub use error::SupplyError;
pub use game_loop::GameLoopService;
pub use questions::{
    API_KEY_VAR, BASE_URL_VAR, ChatQuestionSource, MODEL_VAR, QuestionSource, QuestionSupplier,
    SupplyRequest, fallback_questions,
};
