use super::*;
use content::{Faq, SeoMeta};

fn filled_draft() -> ContentRequest {
    ContentRequest {
        title: "Acme".to_owned(),
        description: "Widgets".to_owned(),
        ..ContentRequest::default()
    }
}

fn sample_response(hero: &str) -> ContentResponse {
    ContentResponse {
        hero_section: hero.to_owned(),
        features: vec!["f".to_owned()],
        benefits: vec!["b".to_owned()],
        seo_meta: SeoMeta {
            title: "t".to_owned(),
            description: "d".to_owned(),
            keywords: vec!["k".to_owned()],
        },
        cta: "Go".to_owned(),
        faqs: vec![Faq { question: "q".to_owned(), answer: "a".to_owned() }],
        html_content: "<p>hi</p>".to_owned(),
        markdown_content: "# hi".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_idle_with_no_result() {
    let state = SessionState::default();
    assert_eq!(state.phase, GeneratePhase::Idle);
    assert!(state.result.is_none());
    assert!(state.validation.is_none());
    assert_eq!(state.view, ViewMode::Preview);
    assert!(state.can_submit());
}

// =============================================================
// Submit guard
// =============================================================

#[test]
fn begin_submit_snapshots_the_draft() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    let snapshot = state.begin_submit().expect("submit accepted");
    assert_eq!(snapshot, filled_draft());
    assert_eq!(state.phase, GeneratePhase::Pending);

    // Editing the draft after submit must not affect the snapshot.
    state.draft.title = "Changed".to_owned();
    assert_eq!(snapshot.title, "Acme");
}

#[test]
fn begin_submit_rejects_empty_title_without_entering_pending() {
    let mut state = SessionState::default();
    state.draft.description = "Widgets".to_owned();
    assert!(state.begin_submit().is_none());
    assert_eq!(state.validation, Some(ValidationError::TitleRequired));
    assert_eq!(state.phase, GeneratePhase::Idle);
}

#[test]
fn begin_submit_rejects_empty_description() {
    let mut state = SessionState::default();
    state.draft.title = "Acme".to_owned();
    assert!(state.begin_submit().is_none());
    assert_eq!(state.validation, Some(ValidationError::DescriptionRequired));
}

#[test]
fn second_submit_while_pending_is_rejected() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    assert!(state.begin_submit().is_some());
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.phase, GeneratePhase::Pending);
}

#[test]
fn successful_submit_clears_stale_validation() {
    let mut state = SessionState::default();
    assert!(state.begin_submit().is_none());
    assert!(state.validation.is_some());

    state.draft = filled_draft();
    assert!(state.begin_submit().is_some());
    assert!(state.validation.is_none());
}

// =============================================================
// Completion and failure
// =============================================================

#[test]
fn complete_stores_result_and_returns_to_idle() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    state.begin_submit();
    state.complete(sample_response("one"));
    assert_eq!(state.phase, GeneratePhase::Idle);
    assert_eq!(state.result.as_ref().map(|r| r.hero_section.as_str()), Some("one"));
    assert!(state.can_submit());
}

#[test]
fn next_success_supersedes_previous_result() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    state.begin_submit();
    state.complete(sample_response("one"));
    state.begin_submit();
    state.complete(sample_response("two"));
    assert_eq!(state.result.as_ref().map(|r| r.hero_section.as_str()), Some("two"));
}

#[test]
fn fail_surfaces_message_and_allows_resubmit() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    state.begin_submit();
    state.fail("quota exceeded".to_owned());
    assert_eq!(state.error_message(), Some("quota exceeded"));
    assert!(state.can_submit());
    assert!(state.begin_submit().is_some());
    assert_eq!(state.phase, GeneratePhase::Pending);
}

#[test]
fn fail_retains_previously_held_result() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    state.begin_submit();
    state.complete(sample_response("one"));
    state.begin_submit();
    state.fail("boom".to_owned());
    assert_eq!(state.result.as_ref().map(|r| r.hero_section.as_str()), Some("one"));
}

// =============================================================
// Display modes
// =============================================================

#[test]
fn view_mode_default_is_preview() {
    assert_eq!(ViewMode::default(), ViewMode::Preview);
}

#[test]
fn view_mode_labels_cover_all_tabs() {
    let labels: Vec<&str> = ViewMode::ALL.into_iter().map(ViewMode::label).collect();
    assert_eq!(labels, ["Preview", "HTML", "Markdown", "JSON"]);
}

#[test]
fn switching_view_never_touches_the_result() {
    let mut state = SessionState { draft: filled_draft(), ..SessionState::default() };
    state.begin_submit();
    state.complete(sample_response("one"));
    let held = state.result.clone();
    for mode in ViewMode::ALL {
        state.view = mode;
        assert_eq!(state.result, held);
        assert_eq!(state.phase, GeneratePhase::Idle);
    }
}
