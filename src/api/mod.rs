//! Wire payloads exchanged with the warehouse query service.
//!
//! The service's success body has carried the answer under several field
//! names over its lifetime, so the body is normalized into [`ResponseBody`]
//! instead of being deserialized into a fixed struct.

use serde::Serialize;
use serde_json::Value;

pub const QUERY_ENDPOINT: &str = "query";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    /// Passed through untouched; serialized as `null` when unset.
    pub top_k: Option<u32>,
}

/// Field names that may carry the answer, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    NaturalLanguageResponse,
    NlResponse,
    Answer,
}

impl AnswerField {
    pub const PRIORITY: [AnswerField; 3] = [
        AnswerField::NaturalLanguageResponse,
        AnswerField::NlResponse,
        AnswerField::Answer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AnswerField::NaturalLanguageResponse => "natural_language_response",
            AnswerField::NlResponse => "nl_response",
            AnswerField::Answer => "answer",
        }
    }
}

/// A parsed success body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// One of the known answer fields was present.
    Recognized { field: AnswerField, text: String },
    /// None of them were; the raw body is kept for display.
    Unrecognized(Value),
}

impl ResponseBody {
    pub fn from_value(value: Value) -> Self {
        if let Value::Object(map) = &value {
            for field in AnswerField::PRIORITY {
                match map.get(field.key()) {
                    None | Some(Value::Null) => continue,
                    Some(Value::String(text)) => {
                        return ResponseBody::Recognized {
                            field,
                            text: text.clone(),
                        }
                    }
                    Some(other) => {
                        return ResponseBody::Recognized {
                            field,
                            text: other.to_string(),
                        }
                    }
                }
            }
        }
        ResponseBody::Unrecognized(value)
    }

    pub fn into_display_text(self) -> String {
        match self {
            ResponseBody::Recognized { text, .. } => text,
            ResponseBody::Unrecognized(raw) => raw.to_string(),
        }
    }
}

/// Pull a usable `detail` message out of an error body.
///
/// FastAPI validation failures put a list of objects here, which is rendered
/// as compact JSON. Blank strings count as absent.
pub fn extract_error_detail(value: &Value) -> Option<String> {
    match value.get("detail")? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
