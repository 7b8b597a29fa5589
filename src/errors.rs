use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    /// Combined endpoint called with neither a city nor a coordinate pair.
    /// The message keeps the indicator string clients already match on.
    #[error("Invalid request parameters")]
    MissingQuery,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream provider returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream provider unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingQuery => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            AppError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        let cases = [
            (AppError::MissingQuery, StatusCode::BAD_REQUEST),
            (
                AppError::InvalidInput("lat must be numeric".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::UpstreamStatus {
                    status: 404,
                    body: "{\"cod\":\"404\"}".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::UpstreamUnreachable("connection refused".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::InternalServerError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::NotFound("no such route".into()), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn missing_query_keeps_literal_indicator() {
        assert_eq!(AppError::MissingQuery.to_string(), "Invalid request parameters");
    }
}
