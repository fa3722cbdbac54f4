//! Configuration loading for the evaluation admin client.
//!
//! Configuration comes from an optional YAML file plus environment
//! overrides. It names the backend base URL, where the auth token is stored,
//! and how the period status resolver labels the end-to-due gap.
//!
//! # Example
//!
//! ```no_run
//! use evaluation_admin::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_env().unwrap();
//! println!("Talking to {}", config.base_url);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, ENV_BASE_URL, ENV_GAP_POLICY, ENV_TOKEN_KEY, ENV_TOKEN_STORAGE};
pub use types::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TOKEN_KEY};
