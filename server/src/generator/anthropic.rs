//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages`: one user message in, the
//! concatenated text blocks out. Pure parsing in `parse_completion` for
//! testability.

use std::time::Duration;

use super::types::GeneratorError;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4000;
const REQUEST_TIMEOUT_SECS: u64 = 120;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Build a client for the given key and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, model: String) -> Result<Self, GeneratorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeneratorError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, model })
    }

    /// Model identifier this client sends requests to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt and return the completion text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-200 status, or an
    /// undecodable response body.
    pub async fn complete(&self, prompt: &str) -> Result<String, GeneratorError> {
        let body = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: [ApiMessage { role: "user", content: prompt }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GeneratorError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(GeneratorError::ApiResponse { status, body: text });
        }

        parse_completion(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [ApiMessage<'a>; 1],
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Unknown,
}

// =============================================================================
// PARSING
// =============================================================================

/// Concatenate the text blocks of a Messages API response body.
fn parse_completion(json: &str) -> Result<String, GeneratorError> {
    let api: ApiResponse =
        serde_json::from_str(json).map_err(|e| GeneratorError::ApiParse(e.to_string()))?;

    let text: String = api
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Unknown => None,
        })
        .collect();

    if text.is_empty() {
        return Err(GeneratorError::ApiParse("response contained no text blocks".to_owned()));
    }
    Ok(text)
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
