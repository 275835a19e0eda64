//! Wire format of the generator's JSON answer.

use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde::Deserialize;
use serde_json::Value;

use quiz_core::model::{Question, QuestionSet};

use crate::error::SupplyError;

/// One question as produced by the generator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeneratedQuestion {
    /// Le pays d'origine du plat
    country: String,
    /// Une description appétissante ou un indice sur le plat sans le nommer
    description: String,
    /// Le nom correct du plat
    correct_answer: String,
    /// Liste de 3 plats possibles incluant la bonne réponse
    options: Vec<String>,
    /// Une petite anecdote culturelle sur ce plat
    fun_fact: String,
}

/// Top-level object requested through `response_format`.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct GeneratedBatch {
    questions: Vec<GeneratedQuestion>,
}

/// Generators honour the schema unevenly, so both the wrapped object and a bare
/// array are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Batch(GeneratedBatch),
    List(Vec<GeneratedQuestion>),
}

impl TryFrom<GeneratedQuestion> for Question {
    type Error = SupplyError;

    fn try_from(value: GeneratedQuestion) -> Result<Self, Self::Error> {
        Ok(Question::new(
            value.country,
            value.description,
            value.correct_answer,
            value.options,
            value.fun_fact,
        )?)
    }
}

/// Strip markdown code fences some models wrap around JSON.
fn strip_code_fences(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parse the generator's text into a validated question set.
///
/// # Errors
///
/// Returns `SupplyError::Payload` for malformed JSON, `SupplyError::Question` for a
/// record that breaks the question rules and `SupplyError::QuestionSet` for an empty
/// batch.
pub(crate) fn parse_questions(text: &str) -> Result<QuestionSet, SupplyError> {
    let payload: Payload = serde_json::from_str(strip_code_fences(text))?;
    let generated = match payload {
        Payload::Batch(batch) => batch.questions,
        Payload::List(list) => list,
    };
    let questions = generated
        .into_iter()
        .map(Question::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionSet::new(questions)?)
}

/// JSON schema for `GeneratedBatch` in the strict form expected by
/// OpenAI-compatible structured output: inlined, every property required, no
/// additional properties.
pub(crate) fn response_schema() -> Value {
    let generator = SchemaSettings::draft07()
        .with(|settings| {
            settings.inline_subschemas = true;
            settings.meta_schema = None;
        })
        .into_generator();
    let schema = generator.into_root_schema_for::<GeneratedBatch>();
    let mut value = serde_json::to_value(schema).unwrap_or_default();

    close_objects(&mut value);
    if let Value::Object(map) = &mut value {
        map.remove("$schema");
        map.remove("definitions");
        map.remove("title");
    }
    value
}

fn close_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type") == Some(&Value::String("object".into())) {
                map.insert("additionalProperties".into(), Value::Bool(false));
                if let Some(Value::Object(props)) = map.get("properties") {
                    let required = props.keys().cloned().map(Value::String).collect();
                    map.insert("required".into(), Value::Array(required));
                }
            }
            for child in map.values_mut() {
                close_objects(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                close_objects(item);
            }
        }
        _ => {}
    }
}
