// Mapping of domain errors onto HTTP responses
use crate::domain::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::UnknownRegion(_) | DashboardError::UnknownProduct(_) => {
                StatusCode::BAD_REQUEST
            }
            // Unreachable from handlers; config errors surface from main
            DashboardError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
