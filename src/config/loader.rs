//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type, which reads a YAML file
//! and applies environment overrides on top of it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::calculation::GapPolicy;
use crate::error::{AdminError, AdminResult};

use super::types::ClientConfig;

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "EVALUATION_API_URL";
/// Overrides `token_storage`.
pub const ENV_TOKEN_STORAGE: &str = "EVALUATION_TOKEN_STORAGE";
/// Overrides `token_key`.
pub const ENV_TOKEN_KEY: &str = "EVALUATION_TOKEN_KEY";
/// Overrides `gap_policy` (`draft` or `unavailable`).
pub const ENV_GAP_POLICY: &str = "EVALUATION_GAP_POLICY";

/// Loads [`ClientConfig`] from a YAML file and/or the environment.
///
/// # Example
///
/// ```no_run
/// use evaluation_admin::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./admin.yaml")?;
/// println!("Backend: {}", config.base_url);
/// # Ok::<(), evaluation_admin::error::AdminError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from a YAML file, then applies environment overrides.
    ///
    /// Returns `ConfigNotFound` when the file cannot be read and
    /// `ConfigParseError` when it is not valid YAML for [`ClientConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> AdminResult<ClientConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AdminError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ClientConfig =
            serde_yaml::from_str(&content).map_err(|e| AdminError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "Loaded client configuration file");
        Self::apply_overrides(config, |key| env::var(key).ok())
    }

    /// Builds the default configuration and applies environment overrides.
    pub fn from_env() -> AdminResult<ClientConfig> {
        Self::apply_overrides(ClientConfig::default(), |key| env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`, then normalizes the result.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(mut config: ClientConfig, lookup: F) -> AdminResult<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(storage) = get(ENV_TOKEN_STORAGE) {
            config.token_storage = Some(PathBuf::from(storage));
        }
        if let Some(key) = get(ENV_TOKEN_KEY) {
            config.token_key = key;
        }
        if let Some(policy) = get(ENV_GAP_POLICY) {
            config.gap_policy =
                policy
                    .parse::<GapPolicy>()
                    .map_err(|message| AdminError::ConfigParseError {
                        path: ENV_GAP_POLICY.to_string(),
                        message,
                    })?;
        }

        Ok(config.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::config::DEFAULT_BASE_URL;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "evaluation-admin-config-{}-{}.yaml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_file(
            "valid",
            "base_url: http://eval.internal/api/v1/\ntoken_key: authToken\ngap_policy: draft\n",
        );
        let config = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.base_url, "http://eval.internal/api/v1");
        assert_eq!(config.token_key, "authToken");
        assert_eq!(config.gap_policy, GapPolicy::Draft);
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        match ConfigLoader::load("/nonexistent/admin.yaml") {
            Err(AdminError::ConfigNotFound { path }) => assert!(path.contains("admin.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file_returns_parse_error() {
        let path = temp_file("malformed", "gap_policy: [not, a, policy]\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AdminError::ConfigParseError { .. })));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_URL, "https://eval.example.com/api/v1"),
            (ENV_TOKEN_STORAGE, "/tmp/storage.json"),
            (ENV_GAP_POLICY, "draft"),
        ]);
        let config = ConfigLoader::apply_overrides(ClientConfig::default(), |key| {
            vars.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.base_url, "https://eval.example.com/api/v1");
        assert_eq!(config.token_storage, Some(PathBuf::from("/tmp/storage.json")));
        assert_eq!(config.gap_policy, GapPolicy::Draft);
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = ConfigLoader::apply_overrides(ClientConfig::default(), |key| {
            (key == ENV_BASE_URL).then(|| "  ".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_gap_policy_override_is_rejected() {
        let result = ConfigLoader::apply_overrides(ClientConfig::default(), |key| {
            (key == ENV_GAP_POLICY).then(|| "maybe".to_string())
        });
        match result {
            Err(AdminError::ConfigParseError { path, .. }) => assert_eq!(path, ENV_GAP_POLICY),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
