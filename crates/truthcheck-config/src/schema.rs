//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use truthcheck_protocols::Settings;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub hover: HoverConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,
}

/// Initial values for the settings store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_true")]
    pub enable_hover: bool,

    #[serde(default)]
    pub enable_deep_search: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            enable_hover: true,
            enable_deep_search: false,
        }
    }
}

impl SettingsConfig {
    pub fn to_settings(&self) -> Settings {
        Settings {
            api_key: self.api_key.trim().to_string(),
            enable_hover: self.enable_hover,
            enable_deep_search: self.enable_deep_search,
        }
    }
}

/// Classification endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_classifier_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_classifier_timeout(),
        }
    }
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_classifier_timeout() -> u64 {
    30
}

/// Hover controller tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl HoverConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Deep-search page fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_metadata_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_metadata_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl MetadataConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_metadata_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (truthcheck)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.settings.api_key.is_empty());
        assert!(config.settings.enable_hover);
        assert!(!config.settings.enable_deep_search);
        assert_eq!(config.classifier.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.classifier.model, "claude-sonnet-4-6");
        assert_eq!(config.classifier.max_tokens, 300);
        assert_eq!(config.hover.debounce(), Duration::from_millis(800));
        assert_eq!(config.metadata.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_to_settings_trims_key() {
        let settings_config = SettingsConfig {
            api_key: "  sk-ant-abc \n".to_string(),
            enable_hover: false,
            enable_deep_search: true,
        };
        let settings = settings_config.to_settings();
        assert_eq!(settings.api_key, "sk-ant-abc");
        assert!(!settings.enable_hover);
        assert!(settings.enable_deep_search);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let config: Config = toml::from_str(
            r#"
            [classifier]
            model = "claude-haiku-4-5"
            "#,
        )
        .unwrap();
        assert_eq!(config.classifier.model, "claude-haiku-4-5");
        assert_eq!(config.classifier.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.classifier.endpoint, DEFAULT_ENDPOINT);
    }
}
