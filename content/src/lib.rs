//! Shared content model for the generation wire contract.
//!
//! This crate owns the request/response schema used by both `server` and
//! `client`. A brief (`ContentRequest`) travels client → server; the
//! generated sections plus two pre-rendered documents (`ContentResponse`)
//! travel back. Tone, language, and content type are closed enums so an
//! invalid selection is unrepresentable rather than validated at the
//! boundary.


use serde::{Deserialize, Serialize};

// =============================================================================
// VALIDATION ERROR
// =============================================================================

/// Submit-time validation failure for a [`ContentRequest`].
///
/// Only the two free-text fields can be invalid; the enum fields always
/// hold a valid member by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is empty or whitespace-only.
    #[error("title is required")]
    TitleRequired,
    /// The description is empty or whitespace-only.
    #[error("description is required")]
    DescriptionRequired,
}

// =============================================================================
// REQUEST
// =============================================================================

/// A content brief as submitted by the user.
///
/// Immutable once submitted: the client hands a snapshot to the generation
/// call and keeps editing a separate draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequest {
    /// Page title. Required, free text.
    pub title: String,
    /// Product or service description. Required, free text.
    pub description: String,
    /// Writing tone for the generated copy.
    #[serde(default)]
    pub tone: Tone,
    /// Output language.
    #[serde(default)]
    pub language: Language,
    /// Kind of page to generate.
    #[serde(default)]
    pub content_type: ContentType,
}

impl Default for ContentRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tone: Tone::Professional,
            language: Language::En,
            content_type: ContentType::LandingPage,
        }
    }
}

impl ContentRequest {
    /// Check the required free-text fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field: title before description.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        Ok(())
    }
}

/// Writing tone for generated copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
    Conversational,
}

impl Tone {
    /// Every selectable tone, in display order.
    pub const ALL: [Self; 5] =
        [Self::Professional, Self::Casual, Self::Friendly, Self::Formal, Self::Conversational];

    /// Wire name, as serialized in the request body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Conversational => "conversational",
        }
    }

    /// Human-readable label for select options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Friendly => "Friendly",
            Self::Formal => "Formal",
            Self::Conversational => "Conversational",
        }
    }

    /// Parse a wire name back into a tone.
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Output language for generated copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
}

impl Language {
    /// Every selectable language, in display order.
    pub const ALL: [Self; 6] = [Self::En, Self::Es, Self::Fr, Self::De, Self::It, Self::Pt];

    /// Wire name (ISO 639-1 code), as serialized in the request body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
        }
    }

    /// Human-readable label for select options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::It => "Italian",
            Self::Pt => "Portuguese",
        }
    }

    /// Parse a wire name back into a language.
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

/// Kind of page the generator should produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    LandingPage,
    ProductPage,
    BlogPost,
    AboutPage,
}

impl ContentType {
    /// Every selectable content type, in display order.
    pub const ALL: [Self; 4] =
        [Self::LandingPage, Self::ProductPage, Self::BlogPost, Self::AboutPage];

    /// Wire name, as serialized in the request body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LandingPage => "landing_page",
            Self::ProductPage => "product_page",
            Self::BlogPost => "blog_post",
            Self::AboutPage => "about_page",
        }
    }

    /// Human-readable label for select options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LandingPage => "Landing Page",
            Self::ProductPage => "Product Page",
            Self::BlogPost => "Blog Post",
            Self::AboutPage => "About Page",
        }
    }

    /// Parse a wire name back into a content type.
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Generated content as returned by the generation service.
///
/// `html_content` and `markdown_content` are independently produced
/// renderings of the same semantic fields; neither side of the wire derives
/// one from the other. Read-only after creation; viewers and exporters
/// project it, never mutate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResponse {
    /// Hero message for the top of the page.
    pub hero_section: String,
    /// Ordered feature bullets.
    #[serde(default)]
    pub features: Vec<String>,
    /// Ordered benefit bullets.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// SEO metadata block.
    pub seo_meta: SeoMeta,
    /// Call-to-action line.
    pub cta: String,
    /// Ordered question/answer pairs.
    #[serde(default)]
    pub faqs: Vec<Faq>,
    /// Pre-rendered HTML document.
    pub html_content: String,
    /// Pre-rendered Markdown document.
    pub markdown_content: String,
}

/// SEO metadata for the generated page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    /// Page title, at most 60 characters.
    pub title: String,
    /// Meta description, at most 160 characters.
    pub description: String,
    /// Ordered keyword list.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A single frequently-asked question with its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
