//! Result viewer: four projections of the held result, plus export.
//!
//! DESIGN
//! ======
//! Rendering is a pure, idempotent projection of one immutable
//! `ContentResponse`: switching tabs never refetches or mutates anything.
//! This component is only mounted while a result is held, so the export
//! buttons can never fire without one.

#[cfg(test)]
#[path = "result_tabs_test.rs"]
mod result_tabs_test;

use leptos::prelude::*;

use content::{ContentResponse, SeoMeta};

use crate::state::session::{SessionState, ViewMode};
use crate::util::export::{self, ExportFormat};

/// Comma-separated keyword line for the preview projection.
fn keywords_line(seo: &SeoMeta) -> String {
    seo.keywords.join(", ")
}

/// Tabbed viewer over the held result with export actions.
#[component]
pub fn ResultTabs() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let set_view = move |mode: ViewMode| session.update(|s| s.view = mode);

    view! {
        <div class="result-tabs">
            <h2>"Generated Content"</h2>

            <div class="result-tabs__bar">
                {ViewMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                class="result-tabs__tab"
                                class:result-tabs__tab--active=move || session.get().view == mode
                                on:click=move |_| set_view(mode)
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="result-tabs__content">
                {move || {
                    let state = session.get();
                    state.result.map(|result| render_projection(&result, state.view))
                }}
            </div>

            <div class="result-tabs__export">
                {ExportFormat::ALL
                    .into_iter()
                    .map(|format| {
                        view! {
                            <button
                                class="btn result-tabs__export-button"
                                on:click=move |_| {
                                    if let Some(result) = session.get_untracked().result {
                                        export::trigger_download(&result, format);
                                    }
                                }
                            >
                                {format.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Render one projection of the result for the selected mode.
fn render_projection(result: &ContentResponse, view: ViewMode) -> AnyView {
    match view {
        ViewMode::Preview => preview(result).into_any(),
        ViewMode::Html => view! { <pre>{result.html_content.clone()}</pre> }.into_any(),
        ViewMode::Markdown => view! { <pre>{result.markdown_content.clone()}</pre> }.into_any(),
        ViewMode::Json => view! { <pre>{export::pretty_json(result)}</pre> }.into_any(),
    }
}

/// Structured field-by-field rendering of the result.
fn preview(result: &ContentResponse) -> impl IntoView {
    let features = result.features.clone();
    let benefits = result.benefits.clone();
    let faqs = result.faqs.clone();

    view! {
        <div class="result-preview">
            <h3>"Hero Section"</h3>
            <p>{result.hero_section.clone()}</p>

            <h3>"Features"</h3>
            <ul>
                {features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}
            </ul>

            <h3>"Benefits"</h3>
            <ul>
                {benefits.into_iter().map(|b| view! { <li>{b}</li> }).collect::<Vec<_>>()}
            </ul>

            <h3>"Call to Action"</h3>
            <p>{result.cta.clone()}</p>

            <h3>"SEO Meta"</h3>
            <p><strong>"Title: "</strong>{result.seo_meta.title.clone()}</p>
            <p><strong>"Description: "</strong>{result.seo_meta.description.clone()}</p>
            <p><strong>"Keywords: "</strong>{keywords_line(&result.seo_meta)}</p>

            <h3>"FAQs"</h3>
            {faqs
                .into_iter()
                .map(|faq| {
                    view! {
                        <div class="result-preview__faq">
                            <p><strong>{format!("Q: {}", faq.question)}</strong></p>
                            <p>{format!("A: {}", faq.answer)}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
