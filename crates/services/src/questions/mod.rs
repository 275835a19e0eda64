mod chat_source;
mod fallback;
mod prompt;
mod supplier;
mod wire;

pub use chat_source::{
    API_KEY_VAR, BASE_URL_VAR, ChatQuestionSource, MODEL_VAR, ai_settings_from_env,
};
pub use fallback::fallback_questions;
pub use supplier::{QuestionSource, QuestionSupplier, SupplyRequest};
