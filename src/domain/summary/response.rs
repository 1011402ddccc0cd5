//! Normalization of summarization service responses
//!
//! The inference service answers with several unrelated JSON shapes. Each
//! body is classified into a [`SummarizerResponse`] first and then turned into
//! a synopsis, so every shape ends up as plain text.

use serde_json::Value;

use super::placeholder;

/// Shapes a summarization service body can take
#[derive(Debug, Clone, PartialEq)]
pub enum SummarizerResponse {
    /// Object carrying a non-empty `error` field
    Error(String),
    /// Non-empty array of results
    Results(Vec<Value>),
    /// Bare JSON string
    Text(String),
    /// Valid JSON in a shape we do not understand
    Unrecognized,
    /// Body is not JSON at all
    Unparseable,
}

impl SummarizerResponse {
    /// Classify a raw response body
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::Unparseable,
        }
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove("error") {
                Some(error) if is_truthy(&error) => Self::Error(value_text(&error)),
                _ => Self::Unrecognized,
            },
            Value::Array(items) if !items.is_empty() => Self::Results(items),
            Value::String(text) => Self::Text(text),
            _ => Self::Unrecognized,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Turn the response into the synopsis shown to users
    pub fn into_synopsis(self) -> String {
        match self {
            Self::Error(message) => placeholder::summarizer_error(&message),
            Self::Results(items) => first_result_text(&items[0]),
            Self::Text(text) => text,
            Self::Unrecognized => placeholder::UNRECOGNIZED_RESPONSE.to_string(),
            Self::Unparseable => placeholder::NON_JSON_RESPONSE.to_string(),
        }
    }
}

fn first_result_text(first: &Value) -> String {
    match first {
        Value::Object(map) => ["summary_text", "generated_text"]
            .iter()
            .filter_map(|field| map.get(*field))
            .find_map(|value| match value {
                Value::String(text) if !text.is_empty() => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| first.to_string()),
        other => value_text(other),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
