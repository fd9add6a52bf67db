use super::*;
use crate::loader::ConfigLoader;

fn valid_config() -> Config {
    let mut config = Config::default();
    config.settings.api_key = "sk-ant-api03-test".to_string();
    config
}

#[test]
fn test_valid_config() {
    let result = ConfigValidator::validate(&valid_config());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_default_config_warns_about_missing_key() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path, "settings.api_key");
    assert!(result.warnings[0].message.contains("disabled"));
}

#[test]
fn test_key_prefix_warning() {
    let mut config = valid_config();
    config.settings.api_key = "sk-proj-123".to_string();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.message.contains("sk-ant-")));
}

#[test]
fn test_invalid_endpoint() {
    let mut config = valid_config();
    config.classifier.endpoint = "not a url".to_string();
    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert_eq!(result.errors[0].path, "classifier.endpoint");
}

#[test]
fn test_non_http_endpoint() {
    let mut config = valid_config();
    config.classifier.endpoint = "ftp://api.example.com/messages".to_string();
    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors[0].message.contains("http"));
}

#[test]
fn test_zero_max_tokens() {
    let mut config = valid_config();
    config.classifier.max_tokens = 0;
    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "classifier.max_tokens"));
}

#[test]
fn test_empty_model() {
    let mut config = valid_config();
    config.classifier.model = "  ".to_string();
    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "classifier.model"));
}

#[test]
fn test_zero_timeouts() {
    let mut config = valid_config();
    config.classifier.timeout_seconds = 0;
    config.metadata.timeout_seconds = 0;
    let result = ConfigValidator::validate(&config);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_debounce_warnings() {
    let mut config = valid_config();
    config.hover.debounce_ms = 0;
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "hover.debounce_ms"));

    config.hover.debounce_ms = 10_000;
    let result = ConfigValidator::validate(&config);
    assert!(result.warnings.iter().any(|w| w.message.contains(">5000")));
}

#[test]
fn test_validate_loaded_config() {
    let content = r#"
        [settings]
        api_key = "sk-ant-loaded"

        [classifier]
        endpoint = "http://127.0.0.1:8080/v1/messages"
    "#;
    let config = ConfigLoader::load_str(content).unwrap();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}
