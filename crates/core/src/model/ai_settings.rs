use thiserror::Error;
use url::Url;

pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the question generator.
///
/// A missing API key means the generator is disabled and every playthrough uses the
/// built-in fallback questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiSettings {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct AiSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AiSettingsError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl AiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// Blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AiSettingsError::InvalidBaseUrl` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AiSettings, AiSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model).unwrap_or_else(|| DEFAULT_AI_MODEL.into());
        let base_url =
            normalize_optional(self.base_url).unwrap_or_else(|| DEFAULT_AI_BASE_URL.into());

        if Url::parse(&base_url).is_err() {
            return Err(AiSettingsError::InvalidBaseUrl(base_url));
        }

        Ok(AiSettings {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl AiSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_AI_MODEL.into(),
            base_url: DEFAULT_AI_BASE_URL.into(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
