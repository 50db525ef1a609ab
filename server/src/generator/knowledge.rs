//! In-memory knowledge base for prompt enrichment.
//!
//! DESIGN
//! ======
//! A small keyword-overlap retriever: documents are ranked by how many
//! distinct query terms they contain. This replaces a hosted vector store
//! with the behavior the product actually needs locally: a handful of
//! reusable positioning snippets folded into the generation prompt.

use std::collections::HashSet;

/// Seed snippets describing common product positioning themes.
const SAMPLE_DOCUMENTS: [&str; 8] = [
    "Our platform provides enterprise-grade security with end-to-end encryption.",
    "We offer 24/7 customer support with dedicated account managers.",
    "Scalable infrastructure that grows with your business needs.",
    "Comprehensive analytics dashboard with real-time insights.",
    "Integration with popular tools like Slack, Jira, and Salesforce.",
    "Compliance with GDPR, SOC 2, and ISO 27001 standards.",
    "AI-powered features that automate repetitive tasks.",
    "Mobile-first design with responsive layouts for all devices.",
];

/// Keyword-scored snippet store.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    documents: Vec<String>,
}

impl Default for KnowledgeBase {
    /// A knowledge base seeded with the sample positioning snippets.
    fn default() -> Self {
        Self { documents: SAMPLE_DOCUMENTS.iter().map(|d| (*d).to_owned()).collect() }
    }
}

impl KnowledgeBase {
    /// An empty knowledge base.
    #[must_use]
    pub fn empty() -> Self {
        Self { documents: Vec::new() }
    }

    /// Add documents to the store.
    pub fn add_documents<I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.documents.extend(documents);
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Return up to `top_k` documents sharing at least one term with the
    /// query, best overlap first. Ties keep insertion order.
    #[must_use]
    pub fn search(&self, query: &str, top_k: usize) -> Vec<String> {
        let query_terms = terms(query);
        if query_terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, &String)> = self
            .documents
            .iter()
            .map(|doc| {
                let doc_terms = terms(doc);
                let overlap = query_terms.intersection(&doc_terms).count();
                (overlap, doc)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(top_k).map(|(_, doc)| doc.clone()).collect()
    }
}

/// Lowercased alphanumeric terms of a text.
fn terms(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "knowledge_test.rs"]
mod tests;
