use super::*;

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn generate_endpoint_defaults_to_same_origin() {
    assert_eq!(generate_endpoint(), format!("{}/api/generate", api_base()));
    assert!(generate_endpoint().ends_with("/api/generate"));
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn structured_detail_is_surfaced_verbatim() {
    let body = r#"{"detail": "quota exceeded"}"#;
    assert_eq!(error_message_from_body(body), "quota exceeded");
}

#[test]
fn missing_detail_falls_back_to_generic_message() {
    let body = r#"{"error": "something else"}"#;
    assert_eq!(error_message_from_body(body), GENERIC_GENERATE_ERROR);
}

#[test]
fn empty_detail_falls_back_to_generic_message() {
    assert_eq!(error_message_from_body(r#"{"detail": ""}"#), GENERIC_GENERATE_ERROR);
    assert_eq!(error_message_from_body(r#"{"detail": "   "}"#), GENERIC_GENERATE_ERROR);
}

#[test]
fn null_detail_falls_back_to_generic_message() {
    assert_eq!(error_message_from_body(r#"{"detail": null}"#), GENERIC_GENERATE_ERROR);
}

#[test]
fn non_json_body_falls_back_to_generic_message() {
    assert_eq!(error_message_from_body("<html>502 Bad Gateway</html>"), GENERIC_GENERATE_ERROR);
    assert_eq!(error_message_from_body(""), GENERIC_GENERATE_ERROR);
}
