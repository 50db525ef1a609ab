//! Mock provider for local development.
//!
//! DESIGN
//! ======
//! Produces realistic sections from the brief without calling a model
//! provider. Hero openers and CTAs are keyed off the requested tone;
//! features and benefits are sampled from fixed pools so repeated runs
//! look alive; SEO fields honor the 60/160 character limits.

use content::{ContentRequest, Faq, SeoMeta, Tone};
use rand::seq::IndexedRandom;

use super::types::ContentSections;

const FEATURE_POOL: [&str; 6] = [
    "Advanced security and encryption",
    "Real-time analytics and insights",
    "Seamless integration capabilities",
    "24/7 customer support",
    "Scalable infrastructure",
    "User-friendly interface",
];

const BENEFIT_POOL: [&str; 6] = [
    "Increase productivity and efficiency",
    "Reduce operational costs",
    "Improve customer satisfaction",
    "Enhance security and compliance",
    "Accelerate time to market",
    "Enable data-driven decisions",
];

/// Generate mock sections for a brief.
#[must_use]
pub fn sections(request: &ContentRequest) -> ContentSections {
    let mut rng = rand::rng();
    let features = FEATURE_POOL
        .choose_multiple(&mut rng, 4)
        .map(|f| (*f).to_owned())
        .collect();
    let benefits = BENEFIT_POOL
        .choose_multiple(&mut rng, 3)
        .map(|b| (*b).to_owned())
        .collect();

    ContentSections {
        hero_section: hero(request),
        features,
        benefits,
        seo_meta: seo_meta(&request.title, &request.description),
        cta: cta(request.tone).to_owned(),
        faqs: faqs(&request.title, &request.description),
    }
}

fn hero(request: &ContentRequest) -> String {
    format!(
        "{} {}. {}... Experience the future of innovation and excellence.",
        tone_opener(request.tone),
        request.title,
        truncate_chars(&request.description, 100)
    )
}

fn tone_opener(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Discover",
        Tone::Casual => "Check out",
        Tone::Friendly => "Welcome to",
        Tone::Formal => "We present",
        Tone::Conversational => "Let's explore",
    }
}

fn cta(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Get Started Today",
        Tone::Casual => "Try It Now",
        Tone::Friendly => "Join Us Now",
        Tone::Formal => "Request a Demo",
        Tone::Conversational => "Let's Get Started!",
    }
}

fn seo_meta(title: &str, description: &str) -> SeoMeta {
    let mut keywords = vec![title
        .split_whitespace()
        .next()
        .map_or_else(|| "solution".to_owned(), str::to_lowercase)];
    keywords.extend(["enterprise", "platform", "software", "technology"].map(str::to_owned));

    SeoMeta {
        title: clamp_chars(title, 60),
        description: clamp_chars(description, 160),
        keywords,
    }
}

fn faqs(title: &str, description: &str) -> Vec<Faq> {
    vec![
        Faq {
            question: format!("What is {title}?"),
            answer: format!(
                "{title} is a comprehensive solution that {}...",
                truncate_chars(description, 80)
            ),
        },
        Faq {
            question: "How does it work?".to_owned(),
            answer: "Our platform uses advanced technology to provide seamless integration \
                     and powerful features that help you achieve your goals efficiently."
                .to_owned(),
        },
        Faq {
            question: "Is it secure?".to_owned(),
            answer: "Yes, we implement enterprise-grade security measures including \
                     encryption, access controls, and compliance with industry standards."
                .to_owned(),
        },
    ]
}

/// First `max` characters of a text, on char boundaries.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// A text clamped to `max` characters, ellipsized when it overflows.
fn clamp_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
