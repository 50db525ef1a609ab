//! Brief form: the editable content request and its submit action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field-level updates mutate only the touched field of the session draft.
//! The selects always hold a valid enum member by construction, so the only
//! client-side validation is the required-text check, reported inline.

#[cfg(test)]
#[path = "brief_form_test.rs"]
mod brief_form_test;

use leptos::prelude::*;

use content::{ContentType, Language, Tone, ValidationError};

use crate::state::session::SessionState;

/// Submit button label for the current flow phase.
fn submit_label(pending: bool) -> &'static str {
    if pending { "Generating Content..." } else { "Generate Content" }
}

/// Inline message for a field, when the last rejected submit blamed it.
fn field_error(validation: Option<ValidationError>, field: ValidationError) -> Option<String> {
    validation.filter(|v| *v == field).map(|v| v.to_string())
}

/// Content brief form: title, description, tone, language, and content type.
///
/// Submit hands control to the owning page via `on_submit`; the page owns
/// the network call so this component stays synchronous.
#[component]
pub fn BriefForm(on_submit: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let pending = move || !session.get().can_submit();
    let title_error = move || field_error(session.get().validation, ValidationError::TitleRequired);
    let description_error =
        move || field_error(session.get().validation, ValidationError::DescriptionRequired);

    view! {
        <form
            class="brief-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="brief-form__group">
                <label for="title">"Title *"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Enter page title"
                    prop:value=move || session.get().draft.title
                    on:input=move |ev| {
                        session.update(|s| s.draft.title = event_target_value(&ev));
                    }
                />
                {move || {
                    title_error().map(|msg| view! { <span class="brief-form__error">{msg}</span> })
                }}
            </div>

            <div class="brief-form__group">
                <label for="description">"Product/Service Description *"</label>
                <textarea
                    id="description"
                    placeholder="Describe your product or service..."
                    prop:value=move || session.get().draft.description
                    on:input=move |ev| {
                        session.update(|s| s.draft.description = event_target_value(&ev));
                    }
                ></textarea>
                {move || {
                    description_error()
                        .map(|msg| view! { <span class="brief-form__error">{msg}</span> })
                }}
            </div>

            <div class="brief-form__group">
                <label for="tone">"Tone"</label>
                <select
                    id="tone"
                    prop:value=move || session.get().draft.tone.as_str()
                    on:change=move |ev| {
                        if let Some(tone) = Tone::from_str_opt(&event_target_value(&ev)) {
                            session.update(|s| s.draft.tone = tone);
                        }
                    }
                >
                    {Tone::ALL
                        .into_iter()
                        .map(|tone| view! { <option value=tone.as_str()>{tone.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="brief-form__group">
                <label for="language">"Language"</label>
                <select
                    id="language"
                    prop:value=move || session.get().draft.language.as_str()
                    on:change=move |ev| {
                        if let Some(lang) = Language::from_str_opt(&event_target_value(&ev)) {
                            session.update(|s| s.draft.language = lang);
                        }
                    }
                >
                    {Language::ALL
                        .into_iter()
                        .map(|lang| view! { <option value=lang.as_str()>{lang.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="brief-form__group">
                <label for="content_type">"Content Type"</label>
                <select
                    id="content_type"
                    prop:value=move || session.get().draft.content_type.as_str()
                    on:change=move |ev| {
                        if let Some(kind) = ContentType::from_str_opt(&event_target_value(&ev)) {
                            session.update(|s| s.draft.content_type = kind);
                        }
                    }
                >
                    {ContentType::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || {
                session
                    .get()
                    .error_message()
                    .map(|msg| view! { <div class="brief-form__generate-error">{msg.to_owned()}</div> })
            }}

            <button type="submit" class="btn btn--primary" disabled=pending>
                {move || submit_label(pending())}
            </button>
        </form>
    }
}
