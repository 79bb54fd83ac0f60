use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use utoipa::ToSchema;

use crate::models::timestamp::Timestamp;

#[derive(Debug, thiserror::Error, ToSchema)]
pub enum TimestampError {
    /// Integer input that is syntactically valid but semantically out of
    /// range, negative values first of all.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// Input that matches neither the integer grammar nor the date layout.
    /// Carries the underlying parse diagnostic.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

/// Both error kinds map uniformly to a 400 with the all-null entity body;
/// the diagnostic only travels in the `x-status-reason` header.
impl IntoResponse for TimestampError {
    fn into_response(self) -> axum::response::Response {
        let mut response = (StatusCode::BAD_REQUEST, Json(Timestamp::default())).into_response();
        if let Ok(reason) = HeaderValue::from_str(&self.to_string()) {
            response.headers_mut().insert("x-status-reason", reason);
        }
        response
    }
}
