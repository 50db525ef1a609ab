//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the content generator, which is Arc-wrapped so Clone stays
//! cheap across connections.

use std::sync::Arc;

use crate::generator::Generator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Generator) -> Self {
        Self { generator: Arc::new(generator) }
    }
}
