use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::AvatarError;

/// Session key holding a picture URL supplied by the identity provider.
pub const AVATAR_URL_KEY: &str = "avatar_url";
/// Session key holding the user identifier.
pub const USER_ID_KEY: &str = "userid";

/// Per-client session data handed over by the chat layer.
///
/// Values are untyped, so lookups go through [`SessionData::get_str`] which
/// reports why a value could not be used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionData(HashMap<String, Value>);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionValueError {
    #[error("session key '{0}' is missing")]
    Missing(String),
    #[error("session key '{key}' is a {found}, expected a string")]
    NotAString { key: String, found: &'static str },
    #[error("session key '{0}' is empty")]
    Empty(String),
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Looks up `key` and returns it as a non-empty string.
    pub fn get_str(&self, key: &str) -> Result<&str, SessionValueError> {
        let value = self
            .0
            .get(key)
            .ok_or_else(|| SessionValueError::Missing(key.to_string()))?;

        let value = value.as_str().ok_or_else(|| SessionValueError::NotAString {
            key: key.to_string(),
            found: value_kind(value),
        })?;

        if value.is_empty() {
            return Err(SessionValueError::Empty(key.to_string()));
        }

        Ok(value)
    }

    pub fn avatar_url(&self) -> Result<&str, SessionValueError> {
        self.get_str(AVATAR_URL_KEY)
    }

    pub fn user_id(&self) -> Result<&str, SessionValueError> {
        self.get_str(USER_ID_KEY)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<HashMap<String, Value>> for SessionData {
    fn from(values: HashMap<String, Value>) -> Self {
        Self(values)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SessionData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<SessionValueError> for AvatarError {
    fn from(_: SessionValueError) -> Self {
        AvatarError::NoAvatarUrl
    }
}
