//! Configuration handling for the landing page
//!
//! Values come from `config.json` in the platform config directory and can be
//! overridden through `LEADFORM_*` environment variables.

use crate::state::FormVariant;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Base URL used when nothing is configured
pub const DEFAULT_WEBHOOK_BASE: &str = "http://localhost:5678";

/// Webhook name shared by the test and production paths
const WEBHOOK_NAME: &str = "course-lead-webhook";

const ENV_WEBHOOK_BASE: &str = "LEADFORM_WEBHOOK_BASE";
const ENV_WEBHOOK_ENV: &str = "LEADFORM_WEBHOOK_ENV";
const ENV_FORM_VARIANT: &str = "LEADFORM_FORM_VARIANT";

/// Which webhook path leads are posted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEnv {
    #[default]
    Test,
    Production,
}

impl WebhookEnv {
    fn path_prefix(&self) -> &'static str {
        match self {
            Self::Test => "webhook-test",
            Self::Production => "webhook",
        }
    }
}

impl fmt::Display for WebhookEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => f.write_str("test"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl FromStr for WebhookEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" | "development" | "dev" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(anyhow!(
                "unknown webhook environment '{other}' (expected test or production)"
            )),
        }
    }
}

/// User configuration for the landing page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeadformConfig {
    /// Webhook base URL, without the webhook path
    pub webhook_base: Option<String>,
    /// Test or production webhook path
    pub webhook_env: Option<WebhookEnv>,
    /// Field set shown on the form
    pub form_variant: Option<FormVariant>,
}

impl LeadformConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "leadform", "leadform")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                config = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", path.display()))?;
                tracing::debug!("Loaded config from {}", path.display());
            }
        }

        let config = config.with_overrides(|name| std::env::var(name).ok())?;
        tracing::debug!(
            url = %config.webhook_url(),
            variant = %config.form_variant(),
            "Resolved configuration"
        );
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(base) = lookup(ENV_WEBHOOK_BASE) {
            self.webhook_base = Some(base);
        }
        if let Some(env) = lookup(ENV_WEBHOOK_ENV) {
            let env = env.parse::<WebhookEnv>().with_context(|| ENV_WEBHOOK_ENV)?;
            self.webhook_env = Some(env);
        }
        if let Some(variant) = lookup(ENV_FORM_VARIANT) {
            let variant = variant
                .parse::<FormVariant>()
                .with_context(|| ENV_FORM_VARIANT)?;
            self.form_variant = Some(variant);
        }
        Ok(self)
    }

    pub fn webhook_env(&self) -> WebhookEnv {
        self.webhook_env.unwrap_or_default()
    }

    pub fn form_variant(&self) -> FormVariant {
        self.form_variant.unwrap_or_default()
    }

    /// Full webhook URL: `{base}/webhook[-test]/course-lead-webhook`
    pub fn webhook_url(&self) -> String {
        let base = self
            .webhook_base
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_WEBHOOK_BASE)
            .trim_end_matches('/');
        format!(
            "{base}/{}/{WEBHOOK_NAME}",
            self.webhook_env().path_prefix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LeadformConfig::default();
        assert!(config.webhook_base.is_none());
        assert!(config.webhook_env.is_none());
        assert!(config.form_variant.is_none());
        assert_eq!(config.webhook_env(), WebhookEnv::Test);
        assert_eq!(config.form_variant(), FormVariant::Business);
    }

    #[test]
    fn test_default_webhook_url_is_test_path() {
        let config = LeadformConfig::default();
        assert_eq!(
            config.webhook_url(),
            "http://localhost:5678/webhook-test/course-lead-webhook"
        );
    }

    #[test]
    fn test_production_webhook_url() {
        let config = LeadformConfig {
            webhook_base: Some("https://hooks.example.com/".to_string()),
            webhook_env: Some(WebhookEnv::Production),
            ..Default::default()
        };
        assert_eq!(
            config.webhook_url(),
            "https://hooks.example.com/webhook/course-lead-webhook"
        );
    }

    #[test]
    fn test_blank_base_falls_back_to_default() {
        let config = LeadformConfig {
            webhook_base: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.webhook_url().starts_with(DEFAULT_WEBHOOK_BASE));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = LeadformConfig {
            webhook_base: Some("http://from-file:5678".to_string()),
            ..Default::default()
        }
        .with_overrides(env(&[
            (ENV_WEBHOOK_BASE, "http://n8n.internal:5678"),
            (ENV_WEBHOOK_ENV, "production"),
            (ENV_FORM_VARIANT, "trading"),
        ]))
        .unwrap();

        assert_eq!(config.webhook_base.as_deref(), Some("http://n8n.internal:5678"));
        assert_eq!(config.webhook_env(), WebhookEnv::Production);
        assert_eq!(config.form_variant(), FormVariant::Trading);
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = LeadformConfig::default()
            .with_overrides(env(&[(ENV_WEBHOOK_BASE, ""), (ENV_WEBHOOK_ENV, " ")]))
            .unwrap();
        assert!(config.webhook_base.is_none());
        assert!(config.webhook_env.is_none());
    }

    #[test]
    fn test_invalid_env_value_is_error() {
        let result =
            LeadformConfig::default().with_overrides(env(&[(ENV_WEBHOOK_ENV, "staging")]));
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("staging"));
    }

    #[test]
    fn test_webhook_env_aliases() {
        assert_eq!("prod".parse::<WebhookEnv>().unwrap(), WebhookEnv::Production);
        assert_eq!("DEV".parse::<WebhookEnv>().unwrap(), WebhookEnv::Test);
        assert_eq!(WebhookEnv::Production.to_string(), "production");
    }

    #[test]
    fn test_serialization() {
        let config = LeadformConfig {
            webhook_base: Some("http://localhost:5678".to_string()),
            webhook_env: Some(WebhookEnv::Production),
            form_variant: Some(FormVariant::Course),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"production\""));
        let parsed: LeadformConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.webhook_base, config.webhook_base);
        assert_eq!(parsed.webhook_env, Some(WebhookEnv::Production));
        assert_eq!(parsed.form_variant, Some(FormVariant::Course));
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"form_variant": "course", "unknown_field": "value"}"#;
        let parsed: LeadformConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.form_variant, Some(FormVariant::Course));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = LeadformConfig::config_path();
    }
}
