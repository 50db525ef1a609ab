//! REST API helper for the generation service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since generation is only
//! triggered from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to a single user-visible message. A non-2xx
//! response may carry a structured `detail` field, which is surfaced
//! verbatim; transport failures and undecodable 2xx bodies share the
//! generic fallback. Exactly one attempt per call: no retry, no
//! client-imposed timeout (the transport's own timeout applies).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use content::{ContentRequest, ContentResponse};

/// Generic fallback shown when no structured error detail is available.
pub const GENERIC_GENERATE_ERROR: &str = "Failed to generate content";

/// Deployment-time API base URL override (`CONTENT_API_BASE`), compiled in.
/// The local-development fallback is same-origin: the server hosts both the
/// app and `/api/generate`.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("CONTENT_API_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn generate_endpoint() -> String {
    format!("{}/api/generate", api_base())
}

/// Extract the user-visible message from a non-2xx response body.
///
/// Prefers a non-empty structured `detail` field, otherwise the generic
/// fallback.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| GENERIC_GENERATE_ERROR.to_owned())
}

/// Submit a brief to `POST /api/generate` and decode the result.
///
/// # Errors
///
/// Returns the user-visible message for any failure: the service's
/// structured `detail` when present, the generic fallback otherwise.
pub async fn generate(request: &ContentRequest) -> Result<ContentResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&generate_endpoint())
            .json(request)
            .map_err(|_| GENERIC_GENERATE_ERROR.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_GENERATE_ERROR.to_owned())?;

        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body));
        }

        resp.json::<ContentResponse>()
            .await
            .map_err(|_| GENERIC_GENERATE_ERROR.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
