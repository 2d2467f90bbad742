//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Region used when only a project id is configured
const DEFAULT_REGION: &str = "us-central1";
/// Callable function that delivers the message
const DEFAULT_FUNCTION_NAME: &str = "sendEmail";
/// How long the success notification stays up
const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 2000;

/// Connection parameters for the send operation's provider
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactConfig {
    /// Cloud project hosting the callable function
    pub project_id: Option<String>,
    /// Region the function is deployed to
    pub region: Option<String>,
    /// Name of the callable function
    pub function_name: Option<String>,
    /// Full endpoint URL, takes precedence over the parts above
    pub function_url: Option<String>,
    /// Success notification auto-dismiss delay
    pub notification_timeout_ms: Option<u64>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Read a config file; a missing file yields defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `CONTACT_*` overrides looked up through `lookup`
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("CONTACT_FUNCTION_URL") {
            self.function_url = Some(url);
        }
        if let Some(project_id) = lookup("CONTACT_PROJECT_ID") {
            self.project_id = Some(project_id);
        }
        if let Some(region) = lookup("CONTACT_REGION") {
            self.region = Some(region);
        }
        self
    }

    /// Resolve the endpoint of the callable function, if enough is configured
    pub fn function_url(&self) -> Option<String> {
        if let Some(url) = self.function_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }

        let project_id = self.project_id.as_deref().filter(|p| !p.is_empty())?;
        let region = self.region.as_deref().unwrap_or(DEFAULT_REGION);
        let function = self
            .function_name
            .as_deref()
            .unwrap_or(DEFAULT_FUNCTION_NAME);

        Some(format!(
            "https://{region}-{project_id}.cloudfunctions.net/{function}"
        ))
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(
            self.notification_timeout_ms
                .unwrap_or(DEFAULT_NOTIFICATION_TIMEOUT_MS),
        )
    }
}
