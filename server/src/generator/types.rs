//! Section model produced by providers, and generator errors.
//!
//! The provider (mock or Anthropic) yields `ContentSections`: the semantic
//! fields without the rendered documents. The generator renders HTML and
//! Markdown independently from the same sections and assembles the full
//! `ContentResponse`.

use content::{ContentResponse, Faq, SeoMeta};
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by content generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the model provider failed.
    #[error("provider request failed: {0}")]
    ApiRequest(String),

    /// The model provider returned a non-success HTTP status.
    #[error("provider returned status {status}")]
    ApiResponse { status: u16, body: String },

    /// The model provider response body could not be deserialized.
    #[error("provider response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SECTIONS
// =============================================================================

/// The generated semantic fields, before document rendering.
///
/// Matches the JSON shape the model is instructed to return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSections {
    pub hero_section: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub seo_meta: SeoMeta,
    pub cta: String,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl ContentSections {
    /// Assemble the full wire response from sections plus both renderings.
    #[must_use]
    pub fn into_response(self, html_content: String, markdown_content: String) -> ContentResponse {
        ContentResponse {
            hero_section: self.hero_section,
            features: self.features,
            benefits: self.benefits,
            seo_meta: self.seo_meta,
            cta: self.cta,
            faqs: self.faqs,
            html_content,
            markdown_content,
        }
    }
}
