//! Generator page: the single functional screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submit flow: snapshot the draft through the pending-state
//! guard, issue exactly one generation call, and route the outcome back
//! into session state. The call runs on the browser's cooperative event
//! loop; the UI stays responsive while it is outstanding.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use leptos::prelude::*;

use crate::components::brief_form::BriefForm;
use crate::components::result_tabs::ResultTabs;
use crate::state::session::SessionState;

/// Take a validated draft snapshot if a submit is currently allowed.
///
/// Pure state-machine step, split out from the component so the guard is
/// testable without a browser.
fn take_submission(session: &mut SessionState) -> Option<content::ContentRequest> {
    session.begin_submit()
}

/// Content generation screen: brief form on top, result viewer below.
#[component]
pub fn GeneratorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_submit = Callback::new(move |()| {
        let mut snapshot = None;
        session.update(|s| snapshot = take_submission(s));
        let Some(request) = snapshot else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate(&request).await {
                Ok(response) => session.update(|s| s.complete(response)),
                Err(message) => session.update(|s| s.fail(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    view! {
        <div class="generator-page">
            <header class="generator-page__header">
                <h1>"Content Studio"</h1>
                <p>"AI-powered content generation"</p>
            </header>

            <BriefForm on_submit=on_submit/>

            <Show when=move || session.get().result.is_some()>
                <ResultTabs/>
            </Show>
        </div>
    }
}
