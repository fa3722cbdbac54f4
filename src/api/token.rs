//! Auth token sources.
//!
//! The client never reads ambient state for its bearer token. A
//! [`TokenProvider`] is injected at construction time and asked for the token
//! at the moment each request is built, so a token stored after the client was
//! created is picked up by the next call.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AdminError, AdminResult};

/// Supplies the bearer token for outgoing requests.
pub trait TokenProvider: Send + Sync + fmt::Debug {
    /// Returns the current token, or `None` when the user has none.
    fn token(&self) -> AdminResult<Option<String>>;
}

/// A fixed token, or none at all.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Always supplies `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Never supplies a token.
    pub fn none() -> Self {
        Self(None)
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.0.is_some() { "Some(<redacted>)" } else { "None" };
        write!(f, "StaticToken({})", shown)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> AdminResult<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Reads the token from a JSON key-value storage file on every call.
///
/// The file is a flat JSON object, e.g. `{"token": "eyJ..."}`. A missing
/// file, a missing key, a non-string value or an empty string all mean "no
/// token". A file that exists but is not a JSON object is an error.
///
/// # Example
///
/// ```no_run
/// use evaluation_admin::api::{StorageToken, TokenProvider};
///
/// let tokens = StorageToken::new("/home/me/.config/evaluation/storage.json", "token");
/// if let Some(token) = tokens.token()? {
///     println!("token has {} chars", token.len());
/// }
/// # Ok::<(), evaluation_admin::error::AdminError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageToken {
    path: PathBuf,
    key: String,
}

impl StorageToken {
    /// Reads `key` from the storage file at `path`.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// The storage file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The key the token is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage_error(&self, message: impl Into<String>) -> AdminError {
        AdminError::Storage {
            path: self.path.display().to_string(),
            message: message.into(),
        }
    }
}

impl TokenProvider for StorageToken {
    fn token(&self) -> AdminResult<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.storage_error(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let storage: Value =
            serde_json::from_str(&content).map_err(|e| self.storage_error(e.to_string()))?;
        let Value::Object(entries) = storage else {
            return Err(self.storage_error("storage is not a JSON object"));
        };

        Ok(entries
            .get(&self.key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string))
    }
}
