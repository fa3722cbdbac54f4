//! Configuration types for the evaluation admin client.

use std::path::PathBuf;

use serde::Deserialize;

use crate::calculation::GapPolicy;

/// Base URL of the shipped backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Storage key the auth token is kept under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Client configuration.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Client-side storage file holding the auth token.
    #[serde(default)]
    pub token_storage: Option<PathBuf>,
    /// Key the token is stored under.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// How periods between their end and due dates are labelled.
    #[serde(default = "default_gap_policy")]
    pub gap_policy: GapPolicy,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_gap_policy() -> GapPolicy {
    GapPolicy::Unavailable
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_storage: None,
            token_key: default_token_key(),
            gap_policy: default_gap_policy(),
        }
    }
}

impl ClientConfig {
    /// Returns a copy with a trailing `/` removed from `base_url`.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        self.base_url = trimmed;
        self
    }
}
