/*---------- Imports ----------*/
use crate::models::event::{self, HeaderError};
use crate::utils::config::Credentials;
use base64::{engine::general_purpose, Engine};
use serde_json::Value;
use thiserror::Error;

/*---------- Constants ----------*/
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const SCHEME_PREFIX: &str = "Basic ";
pub const CHALLENGE: &str = "Basic realm=\"Restricted Area\"";

/*---------- Enums ----------*/
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing or non-Basic authorization header")]
    Missing,

    #[error("malformed Basic credentials: {0}")]
    InvalidFormat(String),

    #[error("credentials do not match")]
    InvalidCredentials,

    #[error("unreadable authorization header: {0}")]
    Unexpected(#[from] HeaderError),
}

pub struct BasicAuth;

impl BasicAuth {
    /// Splits a `Basic <token>` header into username and password. Only the
    /// first colon separates the two, so passwords may contain colons.
    pub fn decode_credentials(header: &str) -> Result<(String, String), AuthError> {
        let encoded = match header.strip_prefix(SCHEME_PREFIX) {
            Some(rest) => rest.split(' ').next().unwrap_or_default(),
            None => return Err(AuthError::Missing),
        };

        let decoded = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|error| AuthError::InvalidFormat(error.to_string()))?;

        let credentials = String::from_utf8(decoded)
            .map_err(|error| AuthError::InvalidFormat(error.to_string()))?;

        match credentials.split_once(':') {
            Some((username, password)) => Ok((username.to_owned(), password.to_owned())),
            None => Err(AuthError::InvalidFormat(
                "expected username:password".to_owned(),
            )),
        }
    }

    /// Checks the event's Authorization header against the expected
    /// credentials and returns the authenticated username.
    pub fn authenticate(event: &Value, expected: &Credentials) -> Result<String, AuthError> {
        let header = match event::find_header(event, AUTHORIZATION_HEADER)? {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthError::Missing),
        };

        let (username, password) = Self::decode_credentials(header)?;

        if username != expected.username || password != expected.password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn basic(raw: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }

    fn event_with(header: &str) -> Value {
        json!({"headers": {"Authorization": header}})
    }

    #[test]
    fn test_decode_splits_on_first_colon() {
        let decoded = BasicAuth::decode_credentials(&basic("admin:pa:ss:word")).unwrap();

        assert_eq!(decoded, ("admin".to_owned(), "pa:ss:word".to_owned()));
    }

    #[test]
    fn test_decode_empty_password() {
        let decoded = BasicAuth::decode_credentials(&basic("admin:")).unwrap();

        assert_eq!(decoded, ("admin".to_owned(), "".to_owned()));
    }

    #[rstest]
    #[case::not_base64("Basic !!!notbase64!!!")]
    #[case::no_colon(&basic("adminpassword"))]
    #[case::empty_token("Basic ")]
    #[case::not_utf8(&format!("Basic {}", general_purpose::STANDARD.encode([0xffu8, 0xfe, 0x3a])))]
    fn test_decode_invalid_format(#[case] header: &str) {
        let result = BasicAuth::decode_credentials(header);

        assert!(matches!(result, Err(AuthError::InvalidFormat(_))));
    }

    #[rstest]
    #[case::bearer("Bearer abc.def.ghi")]
    #[case::lowercase_scheme("basic YWRtaW46cGFzcw==")]
    #[case::empty("")]
    fn test_authenticate_requires_basic_scheme(#[case] header: &str) {
        let expected = Credentials::new("admin", "pass");

        let result = BasicAuth::authenticate(&event_with(header), &expected);

        assert_eq!(result, Err(AuthError::Missing));
    }

    #[test]
    fn test_authenticate_without_header() {
        let expected = Credentials::new("admin", "pass");

        let result = BasicAuth::authenticate(&json!({"headers": {}}), &expected);

        assert_eq!(result, Err(AuthError::Missing));
    }

    #[test]
    fn test_authenticate_success() {
        let expected = Credentials::new("admin", "pass");

        let result = BasicAuth::authenticate(&event_with(&basic("admin:pass")), &expected);

        assert_eq!(result, Ok("admin".to_owned()));
    }

    #[rstest]
    #[case::wrong_password("admin:wrongpass")]
    #[case::wrong_username("root:pass")]
    #[case::case_sensitive("Admin:pass")]
    fn test_authenticate_mismatch(#[case] raw: &str) {
        let expected = Credentials::new("admin", "pass");

        let result = BasicAuth::authenticate(&event_with(&basic(raw)), &expected);

        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_non_string_header() {
        let expected = Credentials::new("admin", "pass");
        let event = json!({"headers": {"authorization": ["Basic YWRtaW46cGFzcw=="]}});

        let result = BasicAuth::authenticate(&event, &expected);

        assert!(matches!(result, Err(AuthError::Unexpected(_))));
    }
}
