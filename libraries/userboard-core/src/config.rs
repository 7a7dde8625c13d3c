/// Application configuration
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "userboard.toml";

/// Explicit configuration handed to the controller at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Base URL of the users service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Environment label, display only
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            environment: environment.into(),
        }
    }

    /// Load configuration from `userboard.toml` (if present) and the process
    /// environment (`USERBOARD_API_URL`, `USERBOARD_ENVIRONMENT`).
    pub fn load() -> Result<Self> {
        Self::load_from(Some(PathBuf::from(CONFIG_FILE).as_path()), None)
    }

    /// Load configuration from an optional file and an environment map.
    ///
    /// When `env` is `None` the process environment is read.
    pub fn load_from(file: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = file {
            if path.exists() {
                settings = settings.add_source(config::File::from(path));
            }
        }

        // Override with environment variables (prefixed with USERBOARD_)
        settings = settings.add_source(
            config::Environment::with_prefix("USERBOARD")
                .prefix_separator("_")
                .source(env),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(CoreError::config(
                "API URL is required (set USERBOARD_API_URL)",
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(CoreError::config(format!(
                "API URL must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }

        Ok(())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            environment: default_environment(),
        }
    }
}
