use super::*;
use content::{ContentType, Language};

fn request(tone: Tone) -> ContentRequest {
    ContentRequest {
        title: "Acme Widgets".to_owned(),
        description: "Widgets for every workflow".to_owned(),
        tone,
        language: Language::En,
        content_type: ContentType::LandingPage,
    }
}

#[test]
fn sections_have_expected_counts() {
    let out = sections(&request(Tone::Professional));
    assert_eq!(out.features.len(), 4);
    assert_eq!(out.benefits.len(), 3);
    assert_eq!(out.faqs.len(), 3);
    assert_eq!(out.seo_meta.keywords.len(), 5);
}

#[test]
fn sampled_items_come_from_the_pools() {
    let out = sections(&request(Tone::Professional));
    for feature in &out.features {
        assert!(FEATURE_POOL.contains(&feature.as_str()));
    }
    for benefit in &out.benefits {
        assert!(BENEFIT_POOL.contains(&benefit.as_str()));
    }
}

#[test]
fn hero_reflects_tone_and_title() {
    let out = sections(&request(Tone::Formal));
    assert!(out.hero_section.starts_with("We present Acme Widgets."));
    assert!(out.hero_section.contains("Widgets for every workflow"));
}

#[test]
fn cta_is_keyed_by_tone() {
    assert_eq!(cta(Tone::Professional), "Get Started Today");
    assert_eq!(cta(Tone::Casual), "Try It Now");
    assert_eq!(cta(Tone::Friendly), "Join Us Now");
    assert_eq!(cta(Tone::Formal), "Request a Demo");
    assert_eq!(cta(Tone::Conversational), "Let's Get Started!");
}

#[test]
fn seo_title_is_clamped_to_60_chars() {
    let long = "x".repeat(80);
    let meta = seo_meta(&long, "desc");
    assert_eq!(meta.title.chars().count(), 60);
    assert!(meta.title.ends_with("..."));
}

#[test]
fn seo_description_is_clamped_to_160_chars() {
    let long = "y".repeat(200);
    let meta = seo_meta("t", &long);
    assert_eq!(meta.description.chars().count(), 160);
    assert!(meta.description.ends_with("..."));
}

#[test]
fn short_seo_fields_pass_through_unchanged() {
    let meta = seo_meta("Acme", "Widgets");
    assert_eq!(meta.title, "Acme");
    assert_eq!(meta.description, "Widgets");
}

#[test]
fn first_keyword_is_lowercased_first_title_word() {
    let meta = seo_meta("Acme Widgets", "d");
    assert_eq!(meta.keywords[0], "acme");
}

#[test]
fn empty_title_falls_back_to_solution_keyword() {
    let meta = seo_meta("", "d");
    assert_eq!(meta.keywords[0], "solution");
}

#[test]
fn faq_questions_name_the_product() {
    let out = faqs("Acme", "Widgets for every workflow");
    assert_eq!(out[0].question, "What is Acme?");
    assert!(out[0].answer.starts_with("Acme is a comprehensive solution"));
}

#[test]
fn truncate_chars_respects_multibyte_boundaries() {
    assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
    assert_eq!(clamp_chars("ünïcödé", 20), "ünïcödé");
}
