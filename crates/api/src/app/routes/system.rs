use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use gatekeeper_auth::{Role, require_role};

use crate::app::errors::ApiError;
use crate::context::CurrentIdentity;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn me(Extension(current): Extension<CurrentIdentity>) -> impl IntoResponse {
    Json(current.identity().clone())
}

pub async fn admin_ping(
    Extension(current): Extension<CurrentIdentity>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = require_role(Some(current.identity()), &[Role::Admin])?;
    Ok(Json(serde_json::json!({ "ok": true, "admin": admin.username })))
}
