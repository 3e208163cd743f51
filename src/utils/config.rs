/*---------- Imports ----------*/
use std::{env, fmt};
use thiserror::Error;

/*---------- Constants ----------*/
pub const USERNAME_VAR: &str = "BASIC_AUTH_USERNAME";
pub const PASSWORD_VAR: &str = "BASIC_AUTH_PASSWORD";
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const DEFAULT_TABLE_NAME: &str = "quiz";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Expected Basic auth credentials. Re-read on every invocation so that a
/// rotated secret takes effect without a cold start.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::Missing(key)),
        };

        let username = read(USERNAME_VAR)?;
        let password = read(PASSWORD_VAR)?;

        Ok(Self { username, password })
    }
}

/// Startup settings for the Lambda binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub table_name: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_owned());

        Self { table_name }
    }
}
