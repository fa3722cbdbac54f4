//! Error types for the evaluation admin client.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the client can surface: HTTP and envelope failures from
//! the backend, client-side validation, configuration and token storage.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Field-level validation messages collected while checking a form.
///
/// Keys are payload field names (e.g. `"weight"`, `"criteria[2].weight"`),
/// values are the message shown inline next to that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Returns true when no field failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts the collected messages into a result.
    ///
    /// # Example
    ///
    /// ```
    /// use evaluation_admin::error::ValidationErrors;
    ///
    /// let mut errors = ValidationErrors::new();
    /// assert!(errors.clone().into_result().is_ok());
    ///
    /// errors.add("name", "Name is required");
    /// assert!(errors.into_result().is_err());
    /// ```
    pub fn into_result(self) -> AdminResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AdminError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// The main error type for the evaluation admin client.
///
/// # Example
///
/// ```
/// use evaluation_admin::error::AdminError;
///
/// let error = AdminError::Http {
///     status: 404,
///     body: "not found".to_string(),
/// };
/// assert_eq!(error.to_string(), "Request failed with status 404: not found");
/// ```
#[derive(Debug, Error)]
pub enum AdminError {
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The backend answered 2xx but its envelope reported `success: false`.
    #[error("API error: {message}")]
    Api {
        /// The message carried by the envelope.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// A description of the decode failure.
        message: String,
    },

    /// Client-side validation rejected a form before it was sent.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The client-side token storage could not be read.
    #[error("Failed to read token storage '{path}': {message}")]
    Storage {
        /// Path of the storage file.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

impl AdminError {
    /// Returns the human-readable text to show the user for this error.
    ///
    /// HTTP failures prefer the `message` (or `error`) field of a JSON body,
    /// then the raw body, then a status-based fallback.
    ///
    /// # Example
    ///
    /// ```
    /// use evaluation_admin::error::AdminError;
    ///
    /// let error = AdminError::Http {
    ///     status: 400,
    ///     body: r#"{"success":false,"message":"invalid category"}"#.to_string(),
    /// };
    /// assert_eq!(error.user_message(), "invalid category");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Http { status, body } => {
                message_from_body(body).unwrap_or_else(|| {
                    let trimmed = body.trim();
                    if trimmed.is_empty() {
                        format!("The server answered with status {}", status)
                    } else {
                        trimmed.to_string()
                    }
                })
            }
            AdminError::Api { message } => message.clone(),
            AdminError::Request(_) => "Could not reach the server".to_string(),
            AdminError::Decode { .. } => "The server sent an unexpected response".to_string(),
            AdminError::Validation(errors) => errors
                .iter()
                .next()
                .map(|(_, message)| message.to_string())
                .unwrap_or_else(|| "The form contains invalid values".to_string()),
            other => other.to_string(),
        }
    }

    /// Returns the HTTP status for [`AdminError::Http`], if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// A type alias for Results that return AdminError.
pub type AdminResult<T> = Result<T, AdminError>;
