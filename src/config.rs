//! Configuration handling for the registration form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Spreadsheet web app receiving registrations
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbyHQa0U0sVBKjLtOsNpJtSoZvV5VH0Z_eMqszumyQlEpKfYfD0Tuhpju-yCjT7uce5x/exec";

/// Environment variable overriding the endpoint URL
const ENDPOINT_ENV_VAR: &str = "CLASS_REGISTRATION_ENDPOINT";

/// User configuration, read from `config.json` in the platform config dir.
/// Only read, never written: registrations are not stored locally.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    /// Registration endpoint URL
    pub endpoint_url: Option<String>,
    /// Program name submitted with every class
    pub program_name: Option<String>,
}

impl RegistrationConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "class-registration", "class-registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RegistrationConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Endpoint to submit to: environment, then config file, then default
    pub fn endpoint_url(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    fn resolve_endpoint(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.endpoint_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string())
    }

    /// Program name, falling back to the shared default
    pub fn program_name(&self) -> &str {
        self.program_name
            .as_deref()
            .unwrap_or(crate::state::DEFAULT_PROGRAM_NAME)
    }
}
