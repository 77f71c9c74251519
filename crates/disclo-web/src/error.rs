//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use disclo_core::DiscloError;
use serde::Serialize;

/// API-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 - Bad request (invalid input)
    #[error("{0}")]
    BadRequest(String),

    /// 401 - Login rejected
    #[error("{0}")]
    Unauthorized(String),

    /// 403 - Missing or invalid credential on a protected route
    #[error("{0}")]
    Forbidden(String),

    /// 500 - Internal error, including upstream failures
    #[error("{0}")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.kind().into(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DiscloError> for ApiError {
    fn from(err: DiscloError) -> Self {
        match err {
            DiscloError::InvalidCredential => ApiError::Forbidden(err.to_string()),
            DiscloError::InvalidDownloadUrl(_) => ApiError::BadRequest(err.to_string()),
            DiscloError::Upstream(msg) => ApiError::Internal(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        assert_eq!(ApiError::from(DiscloError::InvalidCredential).status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(DiscloError::invalid_url("x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DiscloError::config("bad host")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_message_passes_through() {
        let err = ApiError::from(DiscloError::upstream("cninfo announcement query error (502)"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "cninfo announcement query error (502)");
    }
}
