/*---------- Imports ----------*/
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/*---------- Enums ----------*/
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: '{0}'")]
    MissingField(&'static str),

    #[error("invalid type for field '{0}'")]
    InvalidFieldType(&'static str),
}

impl PayloadError {
    /// Only an absent required field is reported back as a bad request; any
    /// other malformed payload is an internal error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, PayloadError::MissingField(_))
    }
}

/*---------- Structs ----------*/
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizRecord {
    pub id: String,
    pub quiz_name: String,
    pub prompt: String,
    pub quiz_data: Value,
    pub created_at: String,
}

fn required<'a>(body: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, PayloadError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(PayloadError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn required_string(body: &Map<String, Value>, field: &'static str) -> Result<String, PayloadError> {
    match required(body, field)? {
        Value::String(value) => Ok(value.to_owned()),
        _ => Err(PayloadError::InvalidFieldType(field)),
    }
}

fn resolve_id(body: &Map<String, Value>) -> Result<String, PayloadError> {
    match body.get("id") {
        None | Some(Value::Null) => Ok(Uuid::new_v4().to_string()),
        Some(Value::String(id)) => Ok(id.to_owned()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(_) => Err(PayloadError::InvalidFieldType("id")),
    }
}

/// ISO-8601 UTC with microseconds and a trailing `Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl QuizRecord {
    /// Validates a request payload and builds the record to persist. Fields
    /// are checked in the order `quiz_name`, `prompt`, `quiz_data`.
    pub fn from_body(body: &Value, created_at: DateTime<Utc>) -> Result<Self, PayloadError> {
        let body = body.as_object().ok_or(PayloadError::NotAnObject)?;

        let quiz_name = required_string(body, "quiz_name")?;
        let prompt = required_string(body, "prompt")?;
        let quiz_data = required(body, "quiz_data")?.to_owned();
        let id = resolve_id(body)?;

        Ok(Self {
            id,
            quiz_name,
            prompt,
            quiz_data,
            created_at: format_timestamp(created_at),
        })
    }
}
