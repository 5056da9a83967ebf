//! API route definitions

mod health;
mod matching;
mod team;

use axum::http::StatusCode;
use axum::Router;
use leadflow_core::LeadflowError;
use serde::Serialize;

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(matching::routes())
        .merge(team::routes())
        .merge(health::routes())
}

/// Error body returned by every failing handler
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

/// Map a pipeline error to its HTTP status
///
/// Missing leads are client-visible 404s; everything else is a 500.
pub(crate) fn error_status(error: &LeadflowError) -> StatusCode {
    match error {
        LeadflowError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let status = error_status(&LeadflowError::not_found("Lead 9 not found"));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_errors_map_to_500() {
        assert_eq!(
            error_status(&LeadflowError::network("connection refused")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_status(&LeadflowError::parse("bad vector")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
