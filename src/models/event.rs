/*---------- Imports ----------*/
use base64::{engine::general_purpose, Engine};
use serde_json::Value;
use std::borrow::Cow;
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("headers must be an object")]
    NotAMap,

    #[error("header {0} is not a string")]
    NotAString(String),
}

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Looks up a header by name, ignoring ASCII case. An exact match wins over a
/// case-folded one when both spellings are present.
pub fn find_header<'a>(event: &'a Value, name: &str) -> Result<Option<&'a str>, HeaderError> {
    let headers = match event.get("headers") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(HeaderError::NotAMap),
    };

    let header_value = headers.get(name).or_else(|| {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });

    match header_value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(HeaderError::NotAString(name.to_owned())),
    }
}

/// Resolves the request payload. A string body is JSON text, a non-null
/// structured body is already parsed, and without a body the event itself is
/// the payload.
pub fn extract_body(event: &Value) -> Result<Cow<'_, Value>, BodyError> {
    match event.get("body") {
        Some(Value::String(raw)) => {
            let is_base64 = event
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);

            let parsed: Value = if is_base64 {
                let decoded = general_purpose::STANDARD.decode(raw)?;
                serde_json::from_str(&String::from_utf8(decoded)?)?
            } else {
                serde_json::from_str(raw)?
            };

            Ok(Cow::Owned(parsed))
        }

        None | Some(Value::Null) => Ok(Cow::Borrowed(event)),

        Some(parsed) => Ok(Cow::Borrowed(parsed)),
    }
}
