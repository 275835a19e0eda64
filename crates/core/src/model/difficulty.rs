use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("unknown difficulty: {0}")]
    Unknown(String),
}

/// Difficulty tier chosen on the intro screen.
///
/// The tier controls how obscure the generated dishes are and scales the points
/// awarded for each correct answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Score multiplier applied to every correct answer.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Player-facing label shown on the intro screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Apprenti (Facile)",
            Difficulty::Medium => "Sous-Chef (Moyen)",
            Difficulty::Hard => "Chef Étoilé (Difficile)",
        }
    }

    /// First word of the label, used for the compact tag on the play screen.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyError::Unknown(s.to_string())),
        }
    }
}
