use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;

use crate::config::ModelConfig;
use crate::error::ModelError;

use super::{GenerateContentRequest, GenerateContentResponse, GenerativeModel};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` over REST.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GeminiClient {
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ModelError::InvalidHeader)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint(&config.base_url, &config.model),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse, ModelError> {
        tracing::debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "calling model");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    let model = model.strip_prefix("models/").unwrap_or(model);
    format!(
        "{}/v1beta/models/{model}:generateContent",
        base_url.trim_end_matches('/')
    )
}

fn error_from_body(status: u16, body: String) -> ModelError {
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => ModelError::Rejected(envelope.error.message),
        Err(_) => ModelError::Status {
            status,
            body: body.trim().to_string(),
        },
    }
}
