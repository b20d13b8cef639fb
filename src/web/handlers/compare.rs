// POST /api/compare — score two documents against each other.
//
// Each document is inline text or a URL. A URL that cannot be fetched
// resolves to empty text; if either document ends up empty the request is
// answered with 422 instead of a meaningless 0% score. A malformed body gets
// the same JSON error shape as every other API failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::analysis::report::analyze;
use crate::config::clamp_top_k;
use crate::source::{resolve, DocumentInput};
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct CompareRequest {
    pub doc1: DocumentInput,
    pub doc2: DocumentInput,
    /// Entries per top-K view (default from config, clamped to 1..=50)
    pub top_k: Option<usize>,
}

/// POST /api/compare — return the similarity report for two documents.
pub async fn compare(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected compare request body");
            return api_error(rejection.status(), &rejection.body_text());
        }
    };

    let fetcher = state.fetcher.as_ref();
    let (text1, text2) = tokio::join!(
        resolve(&request.doc1, fetcher),
        resolve(&request.doc2, fetcher)
    );

    let missing: Vec<&str> = [("Document 1", &text1), ("Document 2", &text2)]
        .into_iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(label, _)| label)
        .collect();
    if !missing.is_empty() {
        return api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            &format!("Could not obtain text for {}", missing.join(" and ")),
        );
    }

    let top_k = clamp_top_k(request.top_k.unwrap_or(state.config.top_k));

    // The pipeline is CPU-bound; keep it off the async workers.
    match tokio::task::spawn_blocking(move || analyze(&text1, &text2, top_k)).await {
        Ok(report) => {
            tracing::info!(
                similarity = report.similarity,
                band = %report.band,
                "Compared documents"
            );
            Json(report).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Similarity analysis task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
        }
    }
}
