//! Content generation pipeline.
//!
//! DESIGN
//! ======
//! One entry point, `Generator::generate`, turns a validated
//! `ContentRequest` into a full `ContentResponse`:
//!
//!   1. Search the knowledge base for snippets related to the brief.
//!   2. Produce the structured sections, either from the mock provider
//!      (deterministic pools, no network) or from the Anthropic API
//!      (prompt -> completion -> JSON parse, with a safe fallback when
//!      the model returns something unparseable).
//!   3. Render the sections to standalone HTML and Markdown documents.
//!
//! The mock provider keeps the whole stack usable without credentials.

pub mod anthropic;
pub mod knowledge;
pub mod mock;
pub mod parse;
pub mod prompt;
pub mod render;
pub mod types;

use content::ContentRequest;
use content::ContentResponse;

use anthropic::AnthropicClient;
use knowledge::KnowledgeBase;
use types::GeneratorError;

// =============================================================================
// PROVIDER
// =============================================================================

enum Provider {
    Mock,
    Anthropic(AnthropicClient),
}

impl Provider {
    fn name(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Anthropic(_) => "anthropic",
        }
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

pub struct Generator {
    provider: Provider,
    knowledge: KnowledgeBase,
}

impl Generator {
    /// Generator backed by the deterministic mock provider.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            provider: Provider::Mock,
            knowledge: KnowledgeBase::default(),
        }
    }

    /// Generator backed by the Anthropic Messages API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn anthropic(api_key: String, model: String) -> Result<Self, GeneratorError> {
        Ok(Self {
            provider: Provider::Anthropic(AnthropicClient::new(api_key, model)?),
            knowledge: KnowledgeBase::default(),
        })
    }

    /// Name of the active provider, for logging.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Generate a complete content package for the given brief.
    ///
    /// # Errors
    ///
    /// Returns an error when the Anthropic provider fails at the transport
    /// or HTTP level. Unparseable completions do not fail: they fall back
    /// to template sections derived from the brief.
    pub async fn generate(&self, request: &ContentRequest) -> Result<ContentResponse, GeneratorError> {
        let sections = match &self.provider {
            Provider::Mock => mock::sections(request),
            Provider::Anthropic(client) => {
                let context = self.knowledge.search(&request.description, 3);
                let built = prompt::build_prompt(request, &context);
                let completion = client.complete(&built).await?;
                parse::sections_or_fallback(&completion, request)
            }
        };

        let html = render::render_html(&sections, &request.title);
        let markdown = render::render_markdown(&sections, &request.title);
        Ok(sections.into_response(html, markdown))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
