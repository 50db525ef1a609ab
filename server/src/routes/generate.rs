//! Content generation endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every failure leaves the handler as a JSON body of the form
//! `{"detail": "..."}` with a non-2xx status, which the frontend surfaces
//! verbatim. Invalid briefs are a 400; provider transport and HTTP
//! failures map to 502; everything else is a 500.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use content::{ContentRequest, ContentResponse};

use crate::generator::types::GeneratorError;
use crate::state::AppState;

const VALIDATION_DETAIL: &str = "Title and description are required";

/// `POST /api/generate`: turn a brief into a full content package.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<ContentResponse>, (StatusCode, Json<serde_json::Value>)> {
    if request.validate().is_err() {
        return Err((StatusCode::BAD_REQUEST, detail_body(VALIDATION_DETAIL)));
    }

    tracing::info!(
        title = %request.title,
        tone = request.tone.as_str(),
        content_type = request.content_type.as_str(),
        "generating content"
    );

    match state.generator.generate(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!(error = %e, "content generation failed");
            Err((error_status(&e), detail_body(&e.to_string())))
        }
    }
}

/// Map a generator error onto an HTTP status.
fn error_status(error: &GeneratorError) -> StatusCode {
    match error {
        GeneratorError::ApiRequest(_) | GeneratorError::ApiResponse { .. } => {
            StatusCode::BAD_GATEWAY
        }
        GeneratorError::ConfigParse(_)
        | GeneratorError::MissingApiKey { .. }
        | GeneratorError::ApiParse(_)
        | GeneratorError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn detail_body(detail: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "detail": detail }))
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
