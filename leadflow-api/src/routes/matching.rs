//! Team matching endpoint

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use leadflow_core::MatchRequest;
use tracing::{error, info};

use super::{error_status, ErrorResponse};
use crate::AppState;

/// Create matching routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/match/{lead_id}", post(match_team))
}

/// Match a lead to team members based on relevance
async fn match_team(
    State(state): State<AppState>,
    Path(lead_id): Path<i64>,
    Json(request): Json<MatchRequest>,
) -> impl IntoResponse {
    info!("Matching lead {} to team", lead_id);

    match state
        .matcher
        .match_lead_to_team(lead_id, request.analysis_context.as_ref())
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("Failed to match lead {}: {}", lead_id, e);
            (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
