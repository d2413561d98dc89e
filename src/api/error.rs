use crate::domain::error::DomainError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self.root_cause() {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Import(_) => StatusCode::BAD_GATEWAY,
            DomainError::Config(_) | DomainError::Aggregation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        } else {
            tracing::debug!("request rejected: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
