mod ai_settings;
mod badge;
mod difficulty;
mod question;
mod region;

pub use ai_settings::{
    AiSettings, AiSettingsDraft, AiSettingsError, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL,
};
pub use badge::{Badge, BadgeSet};
pub use difficulty::{Difficulty, DifficultyError};
pub use question::{OPTIONS_PER_QUESTION, Question, QuestionError, QuestionSet, QuestionSetError};
pub use region::{Region, RegionError};
