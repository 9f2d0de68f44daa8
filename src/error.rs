/*
 * Responsibility
 * - Errors a request can end with, and their HTTP shape
 * - IntoResponse: status + `{"error": {"code", "message"}}`
 */
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("client_id is missing or not recognized")]
    InvalidClientId,

    #[error("client authentication failed")]
    InvalidAuthorization,

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidClientId => (StatusCode::BAD_REQUEST, "invalid_client_id"),
            AppError::InvalidAuthorization => (StatusCode::UNAUTHORIZED, "invalid_client"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        if status == StatusCode::UNAUTHORIZED {
            // RFC 6749 5.2: invalid_client over Basic must carry a challenge
            return (
                status,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="oauth2""#)],
                Json(body),
            )
                .into_response();
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_client_id_is_bad_request() {
        let res = AppError::InvalidClientId.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn invalid_authorization_carries_basic_challenge() {
        let res = AppError::InvalidAuthorization.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            r#"Basic realm="oauth2""#
        );
    }

    #[test]
    fn internal_is_500() {
        let res = AppError::Internal.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
