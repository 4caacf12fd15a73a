use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// JSON-bodied API error returned by handlers.
///
/// The only failing operation in this service is a user lookup on an
/// unknown id; it is surfaced as an explicit 404 rather than an empty
/// success body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound(entity)
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::not_found("user").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
