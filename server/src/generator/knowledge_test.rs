use super::*;

#[test]
fn default_store_is_seeded() {
    let kb = KnowledgeBase::default();
    assert_eq!(kb.len(), 8);
    assert!(!kb.is_empty());
}

#[test]
fn search_ranks_by_term_overlap() {
    let mut kb = KnowledgeBase::empty();
    kb.add_documents([
        "encryption for enterprise data".to_owned(),
        "enterprise security and enterprise encryption together".to_owned(),
        "mobile layouts".to_owned(),
    ]);

    let results = kb.search("enterprise security encryption", 3);
    assert_eq!(results.len(), 2);
    // Three overlapping terms beats two.
    assert_eq!(results[0], "enterprise security and enterprise encryption together");
    assert_eq!(results[1], "encryption for enterprise data");
}

#[test]
fn search_caps_results_at_top_k() {
    let kb = KnowledgeBase::default();
    let results = kb.search("support security analytics infrastructure design", 3);
    assert!(results.len() <= 3);
}

#[test]
fn search_is_case_insensitive() {
    let mut kb = KnowledgeBase::empty();
    kb.add_documents(["GDPR Compliance".to_owned()]);
    assert_eq!(kb.search("gdpr", 3).len(), 1);
}

#[test]
fn search_with_no_overlap_returns_nothing() {
    let kb = KnowledgeBase::default();
    assert!(kb.search("xylophone", 3).is_empty());
}

#[test]
fn search_with_empty_query_returns_nothing() {
    let kb = KnowledgeBase::default();
    assert!(kb.search("", 3).is_empty());
    assert!(kb.search("   ", 3).is_empty());
}

#[test]
fn ties_keep_insertion_order() {
    let mut kb = KnowledgeBase::empty();
    kb.add_documents(["alpha one".to_owned(), "alpha two".to_owned()]);
    let results = kb.search("alpha", 2);
    assert_eq!(results, ["alpha one", "alpha two"]);
}
