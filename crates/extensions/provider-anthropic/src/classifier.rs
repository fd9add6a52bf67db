//! Anthropic classifier implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use truthcheck_protocols::{Classifier, ClassifierError, Verdict, VideoMeta};

use crate::api::{ApiMessage, ApiRequest, ApiResponse};
use crate::parser::{collect_text, parse_verdict};
use crate::prompt::{SYSTEM_PROMPT, build_user_message};

pub const API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Classifies titles with one Messages API call each.
pub struct AnthropicClassifier {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl AnthropicClassifier {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request(&self, title: &str, meta: Option<&VideoMeta>) -> ApiRequest {
        ApiRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: SYSTEM_PROMPT.to_string(),
            messages: vec![ApiMessage::user(build_user_message(title, meta))],
        }
    }

    async fn send_request(
        &self,
        api_key: &str,
        api_request: &ApiRequest,
    ) -> Result<String, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::from_api_response(status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))
    }
}

impl Default for AnthropicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Classifier for AnthropicClassifier {
    async fn classify(
        &self,
        title: &str,
        api_key: &str,
        meta: Option<&VideoMeta>,
    ) -> Result<Verdict, ClassifierError> {
        let api_request = self.build_request(title, meta);
        debug!(model = %self.model, with_meta = meta.is_some(), "Sending classification request");

        let body = self.send_request(api_key, &api_request).await?;
        let api_response: ApiResponse =
            serde_json::from_str(&body).map_err(|e| ClassifierError::Parse(e.to_string()))?;
        parse_verdict(&collect_text(&api_response.content))
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
