//! Configuration handling
//!
//! Relay credentials come from `config.json` in the platform config
//! directory, overridden by `AGROVITA_EMAILJS_*` environment variables.
//! The resolved [`RelayConfig`] is handed to each submission controller.

use crate::i18n::{Language, LocaleError};
use crate::leads::ConfigurationError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Relay send timeout when none is configured
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(20);

/// Literal left behind by an unresolved build-time substitution
const UNRESOLVED_PLACEHOLDER: &str = "undefined";

const ENV_SERVICE_ID: &str = "AGROVITA_EMAILJS_SERVICE_ID";
const ENV_ADMIN_TEMPLATE: &str = "AGROVITA_EMAILJS_ADMIN_TEMPLATE";
const ENV_USER_TEMPLATE: &str = "AGROVITA_EMAILJS_USER_TEMPLATE";
const ENV_PUBLIC_KEY: &str = "AGROVITA_EMAILJS_PUBLIC_KEY";
const ENV_LANGUAGE: &str = "AGROVITA_LANG";

/// Email relay credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub service_id: String,
    /// Template for the internal lead alert
    pub admin_template_id: String,
    /// Template for the acknowledgment sent to the lead
    pub user_template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Check that every credential is present and resolved
    pub fn ensure_ready(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("service_id", &self.service_id),
            ("admin_template_id", &self.admin_template_id),
            ("user_template_id", &self.user_template_id),
            ("public_key", &self.public_key),
        ];
        for (name, value) in fields {
            let value = value.trim();
            if value.is_empty() || value == UNRESOLVED_PLACEHOLDER {
                return Err(ConfigurationError::MissingRelayCredentials(name));
            }
        }
        Ok(())
    }
}

/// User configuration for the landing page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Relay credentials
    #[serde(default)]
    pub relay: RelayConfig,
    /// Relay endpoint override
    pub relay_endpoint: Option<String>,
    /// Per-send relay timeout in seconds
    pub relay_timeout_secs: Option<u64>,
    /// Language tag the page opens in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("in", "agrovita", "agrovita-leads")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::info!(path = %path.display(), "loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Overlay relay credentials from `lookup` (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (ENV_SERVICE_ID, &mut self.relay.service_id),
            (ENV_ADMIN_TEMPLATE, &mut self.relay.admin_template_id),
            (ENV_USER_TEMPLATE, &mut self.relay.user_template_id),
            (ENV_PUBLIC_KEY, &mut self.relay.public_key),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key) {
                *slot = value;
            }
        }
        if let Some(tag) = lookup(ENV_LANGUAGE) {
            self.language = Some(tag);
        }
    }

    /// Initial page language; an unknown tag fails startup
    pub fn initial_language(&self) -> Result<Language, LocaleError> {
        match self.language.as_deref() {
            Some(tag) => Language::from_code(tag),
            None => Ok(Language::default()),
        }
    }

    pub fn relay_timeout(&self) -> Duration {
        self.relay_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RELAY_TIMEOUT)
    }
}
