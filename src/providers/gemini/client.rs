use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::auth::ApiKey;
use crate::error::{BddGenError, Result};
use crate::providers::CompletionBackend;

use super::types::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client.
///
/// The key is optional at construction so a missing credential surfaces on
/// the first call rather than at startup.
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    model: String,
    api_key: Option<ApiKey>,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: Option<ApiKey>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("bddgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BddGenError::Config(format!("Failed to create HTTP client: {e}")))?;

        let endpoint = endpoint_url(base_url, model)?;

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn endpoint_url(base_url: &str, model: &str) -> Result<Url> {
    if model.trim().is_empty() {
        return Err(BddGenError::Config("Model name must not be empty".to_string()));
    }

    // Url::join replaces the last path segment unless the base ends in '/'
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base)
        .map_err(|e| BddGenError::Config(format!("Invalid base URL: {e}")))?
        .join(&format!("v1beta/models/{model}:generateContent"))
        .map_err(|e| BddGenError::Config(format!("Invalid model endpoint: {e}")))
}

impl CompletionBackend for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_ref().ok_or(BddGenError::MissingApiKey)?;

        info!("Requesting completion from Gemini model {}", self.model);
        debug!("Prompt length: {} bytes", prompt.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, api_key.as_str())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(BddGenError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(BddGenError::NoResponseData)?;

        debug!("Received {} bytes of generated text", text.len());
        Ok(text)
    }
}
