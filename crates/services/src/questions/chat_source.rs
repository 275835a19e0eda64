use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use quiz_core::model::{AiSettings, AiSettingsDraft, AiSettingsError, QuestionSet};

use super::prompt::build_prompt;
use super::supplier::{QuestionSource, SupplyRequest};
use super::wire::{parse_questions, response_schema};
use crate::error::SupplyError;

pub const API_KEY_VAR: &str = "QUIZ_AI_API_KEY";
pub const BASE_URL_VAR: &str = "QUIZ_AI_BASE_URL";
pub const MODEL_VAR: &str = "QUIZ_AI_MODEL";

const TEMPERATURE: f32 = 0.9;

/// Read generator settings from `QUIZ_AI_*` environment variables.
///
/// # Errors
///
/// Returns `AiSettingsError` if `QUIZ_AI_BASE_URL` is set but invalid.
pub fn ai_settings_from_env() -> Result<AiSettings, AiSettingsError> {
    ai_settings_from_lookup(|name| env::var(name).ok())
}

fn ai_settings_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AiSettings, AiSettingsError> {
    AiSettingsDraft {
        api_key: lookup(API_KEY_VAR),
        model: lookup(MODEL_VAR),
        base_url: lookup(BASE_URL_VAR),
    }
    .validate()
}

/// Questions generated by an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct ChatQuestionSource {
    client: Client,
    settings: AiSettings,
}

impl ChatQuestionSource {
    #[must_use]
    pub fn new(settings: AiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// # Errors
    ///
    /// Returns `SupplyError::Settings` for an invalid base URL.
    pub fn from_env() -> Result<Self, SupplyError> {
        Ok(Self::new(ai_settings_from_env()?))
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.settings.enabled()
    }

    async fn complete(&self, request: &SupplyRequest) -> Result<String, SupplyError> {
        let api_key = self.settings.api_key().ok_or(SupplyError::Disabled)?;

        let url = format!("{}/chat/completions", self.settings.base_url());
        let prompt = build_prompt(request);
        let payload = ChatRequest {
            model: self.settings.model().to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt.user,
                },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: "quiz_questions",
                    strict: true,
                    schema: response_schema(),
                },
            },
        };

        debug!(model = %payload.model, "question generator request");

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupplyError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(SupplyError::EmptyResponse)
    }
}

#[async_trait]
impl QuestionSource for ChatQuestionSource {
    async fn generate(&self, request: &SupplyRequest) -> Result<QuestionSet, SupplyError> {
        let content = self.complete(request).await?;
        parse_questions(&content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::num::NonZeroUsize;

    use quiz_core::model::{DEFAULT_AI_BASE_URL, Difficulty};

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn settings_default_without_variables() {
        let settings = ai_settings_from_lookup(lookup(&[])).unwrap();
        assert!(!settings.enabled());
        assert_eq!(settings.base_url(), DEFAULT_AI_BASE_URL);
    }

    #[test]
    fn settings_read_all_variables() {
        let settings = ai_settings_from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (MODEL_VAR, "mistral-small"),
            (BASE_URL_VAR, "http://localhost:8080/v1"),
        ]))
        .unwrap();

        assert_eq!(settings.api_key(), Some("sk-test"));
        assert_eq!(settings.model(), "mistral-small");
        assert_eq!(settings.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn settings_reject_bad_base_url() {
        let result = ai_settings_from_lookup(lookup(&[(BASE_URL_VAR, "::nope")]));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn disabled_source_fails_without_network() {
        let source = ChatQuestionSource::new(AiSettings::default());
        assert!(!source.enabled());

        let request = SupplyRequest::new(NonZeroUsize::MIN, Difficulty::Easy, None);
        let err = source.generate(&request).await.unwrap_err();
        assert!(matches!(err, SupplyError::Disabled));
    }

    #[test]
    fn request_serializes_response_format() {
        let format = ResponseFormat {
            format_type: "json_schema",
            json_schema: JsonSchemaFormat {
                name: "quiz_questions",
                strict: true,
                schema: response_schema(),
            },
        };
        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(value["type"], "json_schema");
        assert_eq!(value["json_schema"]["strict"], true);
    }
}
