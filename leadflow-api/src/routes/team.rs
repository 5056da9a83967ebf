//! Team member listing and notification endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use leadflow_store::LeadStore;
use serde::Serialize;
use tracing::{error, info};

use super::{error_status, ErrorResponse};
use crate::AppState;

/// Create team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/team-members", get(list_team_members))
        .route("/notify/{lead_id}", post(notify_team))
}

#[derive(Debug, Serialize)]
struct NotifyResponse {
    status: String,
    message: String,
}

/// List all team members from the lead store
async fn list_team_members(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_team_members().await {
        Ok(members) => (StatusCode::OK, Json(members)).into_response(),
        Err(e) => {
            error!("Failed to list team members: {}", e);
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

/// Notify matched team members about a new lead
async fn notify_team(
    State(state): State<AppState>,
    Path(lead_id): Path<i64>,
    Json(team_member_ids): Json<Vec<i64>>,
) -> impl IntoResponse {
    info!(
        "Notifying {} team member(s) about lead {}",
        team_member_ids.len(),
        lead_id
    );

    let lead = match state.store.get_lead(lead_id).await {
        Ok(lead) => lead,
        Err(e) => {
            error!("Failed to fetch lead {}: {}", lead_id, e);
            return (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match state
        .notifier
        .send_team_notification(&lead, &team_member_ids)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(NotifyResponse {
                status: "success".to_string(),
                message: "Team members notified successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to notify team for lead {}: {}", lead_id, e);
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
