use super::*;

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[test]
fn parse_completion_extracts_single_text_block() {
    let json = r#"{"content":[{"type":"text","text":"hello"}]}"#;
    assert_eq!(parse_completion(json).unwrap(), "hello");
}

#[test]
fn parse_completion_concatenates_text_blocks() {
    let json = r#"{"content":[
        {"type":"text","text":"{\"cta\":"},
        {"type":"text","text":"\"Go\"}"}
    ]}"#;
    assert_eq!(parse_completion(json).unwrap(), "{\"cta\":\"Go\"}");
}

#[test]
fn parse_completion_skips_unknown_block_types() {
    let json = r#"{"content":[
        {"type":"tool_use","id":"t1","name":"x","input":{}},
        {"type":"text","text":"answer"}
    ]}"#;
    assert_eq!(parse_completion(json).unwrap(), "answer");
}

#[test]
fn parse_completion_rejects_empty_content() {
    let json = r#"{"content":[]}"#;
    assert!(matches!(parse_completion(json), Err(GeneratorError::ApiParse(_))));
}

#[test]
fn parse_completion_rejects_malformed_json() {
    assert!(matches!(parse_completion("not json"), Err(GeneratorError::ApiParse(_))));
}

// =============================================================================
// CLIENT CONSTRUCTION
// =============================================================================

#[test]
fn client_reports_configured_model() {
    let client = AnthropicClient::new("key".into(), "claude-3-5-sonnet-latest".into()).unwrap();
    assert_eq!(client.model(), "claude-3-5-sonnet-latest");
}

#[test]
fn request_body_serializes_expected_shape() {
    let body = ApiRequest {
        model: "m",
        max_tokens: 4000,
        messages: [ApiMessage { role: "user", content: "hi" }],
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["model"], "m");
    assert_eq!(json["max_tokens"], 4000);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "hi");
}
