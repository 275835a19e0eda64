use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("unknown region: {0}")]
    Unknown(String),
}

/// Region picked on the map screen.
///
/// `World` is the "no filter" choice: questions may come from any country and no
/// explorer badge is tied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Europe,
    Asia,
    Americas,
    Oceania,
    World,
}

impl Region {
    /// Continents offered individually by the picker, in display order.
    pub const PICKABLE: [Region; 5] = [
        Region::Africa,
        Region::Europe,
        Region::Asia,
        Region::Americas,
        Region::Oceania,
    ];

    /// Player-facing identifier. Also used in prompts and badge names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Region::Africa => "Afrique",
            Region::Europe => "Europe",
            Region::Asia => "Asie",
            Region::Americas => "Amériques",
            Region::Oceania => "Océanie",
            Region::World => "Monde",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Region::Africa => "Afrique 🌍",
            Region::Europe => "Europe 🏰",
            Region::Asia => "Asie 🥢",
            Region::Americas => "Amériques 🌽",
            Region::Oceania => "Océanie 🦘",
            Region::World => "Surprise (Monde Entier) 🌎",
        }
    }

    /// The region as a question filter; `None` means worldwide.
    #[must_use]
    pub const fn filter(self) -> Option<Region> {
        match self {
            Region::World => None,
            other => Some(other),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let by_id = Region::PICKABLE
            .into_iter()
            .chain([Region::World])
            .find(|region| region.id().eq_ignore_ascii_case(needle));
        if let Some(region) = by_id {
            return Ok(region);
        }

        match needle.to_ascii_lowercase().as_str() {
            "africa" => Ok(Region::Africa),
            "europe" => Ok(Region::Europe),
            "asia" => Ok(Region::Asia),
            "americas" | "ameriques" => Ok(Region::Americas),
            "oceania" | "oceanie" => Ok(Region::Oceania),
            "world" | "monde" => Ok(Region::World),
            _ => Err(RegionError::Unknown(s.to_string())),
        }
    }
}
