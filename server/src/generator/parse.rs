//! Model-output parsing: JSON sections out of free-form completion text.
//!
//! ERROR HANDLING
//! ==============
//! Model output is untrusted: it may wrap the JSON in Markdown code fences
//! or fail to be JSON at all. Fences are stripped before decoding, and a
//! malformed completion degrades to minimal fallback sections built from
//! the brief rather than failing the whole request.

use content::{ContentRequest, Faq, SeoMeta};

use super::types::ContentSections;

/// Strip a surrounding Markdown code fence, if any.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences; text
/// without fences passes through unchanged.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(rest) = find_fenced(trimmed, "```json") {
        return rest;
    }
    if let Some(rest) = find_fenced(trimmed, "```") {
        return rest;
    }
    trimmed
}

fn find_fenced<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let body = &text[start..];
    let end = body.find("```").unwrap_or(body.len());
    Some(body[..end].trim())
}

/// Decode completion text into sections.
///
/// # Errors
///
/// Returns the serde error when the (fence-stripped) text is not a valid
/// sections document.
pub fn parse_sections(text: &str) -> Result<ContentSections, serde_json::Error> {
    serde_json::from_str(strip_code_fences(text))
}

/// Decode completion text, degrading to fallback sections on failure.
#[must_use]
pub fn sections_or_fallback(text: &str, request: &ContentRequest) -> ContentSections {
    parse_sections(text).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "model output was not valid sections JSON, using fallback");
        fallback_sections(request)
    })
}

/// Minimal sections built directly from the brief.
#[must_use]
pub fn fallback_sections(request: &ContentRequest) -> ContentSections {
    let description_clip: String = request.description.chars().take(160).collect();
    ContentSections {
        hero_section: format!("Welcome to {}. {}", request.title, request.description),
        features: vec!["Feature 1".to_owned(), "Feature 2".to_owned(), "Feature 3".to_owned()],
        benefits: vec!["Benefit 1".to_owned(), "Benefit 2".to_owned(), "Benefit 3".to_owned()],
        seo_meta: SeoMeta {
            title: request.title.clone(),
            description: description_clip,
            keywords: vec!["keyword1".to_owned(), "keyword2".to_owned(), "keyword3".to_owned()],
        },
        cta: "Get Started Today".to_owned(),
        faqs: vec![Faq {
            question: "What is this?".to_owned(),
            answer: request.description.clone(),
        }],
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
