use super::*;
use content::Tone;

fn request() -> ContentRequest {
    ContentRequest {
        title: "Acme Analytics".to_owned(),
        description: "Dashboards for small teams".to_owned(),
        tone: Tone::Professional,
        ..ContentRequest::default()
    }
}

// =============================================================================
// MOCK PIPELINE
// =============================================================================

#[tokio::test]
async fn mock_generate_produces_complete_response() {
    let generator = Generator::mock();
    let response = generator.generate(&request()).await.unwrap();

    assert!(response.hero_section.contains("Acme Analytics"));
    assert_eq!(response.features.len(), 4);
    assert_eq!(response.benefits.len(), 3);
    assert!(!response.cta.is_empty());
    assert_eq!(response.faqs.len(), 3);
}

#[tokio::test]
async fn mock_generate_renders_both_documents() {
    let generator = Generator::mock();
    let response = generator.generate(&request()).await.unwrap();

    assert!(response.html_content.starts_with("<!DOCTYPE html>"));
    assert!(response.html_content.contains("<h1>Acme Analytics</h1>"));
    assert!(response.markdown_content.starts_with("# Acme Analytics"));
    assert!(response.markdown_content.contains("## Features"));
}

#[test]
fn provider_names_are_stable() {
    assert_eq!(Generator::mock().provider_name(), "mock");
    assert_eq!(Provider::Mock.name(), "mock");
}
