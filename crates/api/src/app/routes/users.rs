use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use gatekeeper_auth::{Role, require_owner_or_role};
use gatekeeper_core::IdentityId;
use gatekeeper_validation::{validate_object_id, validate_registration as check_registration};

use crate::app::AppState;
use crate::app::dto::RegistrationRequest;
use crate::app::errors::ApiError;
use crate::context::CurrentIdentity;

/// Check a registration payload and report every violation at once.
pub async fn validate_registration(
    Json(body): Json<RegistrationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    check_registration(&body.username, &body.email, &body.password).into_result()?;
    Ok(Json(serde_json::json!({ "valid": true })))
}

/// Delete an identity: its owner or an admin only.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentIdentity>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    validate_object_id(&id).into_result()?;
    let target: IdentityId = id.parse()?;
    let actor = require_owner_or_role(Some(current.identity()), Some(&target), Role::Admin)?;

    if !state.store.delete(&target).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(target_id = %target, actor_id = %actor.id, "identity deleted");
    Ok(StatusCode::NO_CONTENT)
}
