//! Configuration validation.

use crate::schema::Config;

/// Debounce delays above this are accepted but warned about.
const MAX_REASONABLE_DEBOUNCE_MS: u64 = 5000;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_settings(config, &mut result);
        Self::validate_classifier(config, &mut result);
        Self::validate_hover(config, &mut result);
        Self::validate_metadata(config, &mut result);

        result
    }

    fn validate_settings(config: &Config, result: &mut ValidationResult) {
        let key = config.settings.api_key.trim();
        if key.is_empty() {
            result.add_warning(ValidationWarning::new(
                "settings.api_key",
                "API key is not set, hover checks stay disabled",
            ));
        } else if !key.starts_with("sk-ant-") {
            result.add_warning(ValidationWarning::new(
                "settings.api_key",
                "Key should start with sk-ant-",
            ));
        }
    }

    fn validate_classifier(config: &Config, result: &mut ValidationResult) {
        let classifier = &config.classifier;

        match url::Url::parse(&classifier.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(_) => result.add_error(ValidationError::new(
                "classifier.endpoint",
                "Endpoint must be an http:// or https:// URL",
            )),
            Err(e) => result.add_error(ValidationError::new(
                "classifier.endpoint",
                format!("Invalid URL: {}", e),
            )),
        }

        if classifier.model.trim().is_empty() {
            result.add_error(ValidationError::new(
                "classifier.model",
                "Model cannot be empty",
            ));
        }

        if classifier.max_tokens == 0 {
            result.add_error(ValidationError::new(
                "classifier.max_tokens",
                "max_tokens must be greater than 0",
            ));
        }

        if classifier.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "classifier.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }

    fn validate_hover(config: &Config, result: &mut ValidationResult) {
        if config.hover.debounce_ms == 0 {
            result.add_warning(ValidationWarning::new(
                "hover.debounce_ms",
                "debounce_ms is 0, every pointer movement over a title will trigger a check",
            ));
        }

        if config.hover.debounce_ms > MAX_REASONABLE_DEBOUNCE_MS {
            result.add_warning(ValidationWarning::new(
                "hover.debounce_ms",
                "debounce_ms is very high (>5000), checks will feel unresponsive",
            ));
        }
    }

    fn validate_metadata(config: &Config, result: &mut ValidationResult) {
        if config.metadata.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "metadata.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
