use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use gatekeeper_auth::{AuthenticationError, AuthzError, StoreError};
use gatekeeper_core::IdError;
use gatekeeper_validation::ValidationError;

/// Every failure a handler or middleware can surface, with its HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Unauthenticated(#[from] AuthenticationError),

    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated(e) => {
                json_error(StatusCode::UNAUTHORIZED, "unauthenticated", e.to_string())
            }
            ApiError::Authz(AuthzError::AuthenticationRequired) => json_error(
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                "Authentication required",
            ),
            ApiError::Authz(AuthzError::InsufficientPermissions) => {
                json_error(StatusCode::FORBIDDEN, "forbidden", "Insufficient permissions")
            }
            ApiError::Authz(AuthzError::NotOwner) => json_error(
                StatusCode::FORBIDDEN,
                "forbidden",
                "Not authorized to access this resource",
            ),
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "validation_error",
                    "message": "Validation failed",
                    "errors": e.errors,
                })),
            )
                .into_response(),
            ApiError::InvalidId(e) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "validation_error",
                    "message": "Validation failed",
                    "errors": [e.to_string()],
                })),
            )
                .into_response(),
            ApiError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "identity store failure");
                json_error(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "store_unavailable",
                    "identity store unavailable",
                )
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeeper_core::IdentityId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unparseable_id_is_a_validation_error() {
        let err = "   ".parse::<IdentityId>().unwrap_err();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["errors"][0], "identity id must not be empty");
    }

    #[tokio::test]
    async fn not_owner_is_forbidden() {
        let response = ApiError::from(AuthzError::NotOwner).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await["message"],
            "Not authorized to access this resource"
        );
    }
}
