//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: handlers, one file per area
//! - `dto.rs`: request/response shapes
//! - `errors.rs`: `ApiError` and its status/JSON mapping

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;

use gatekeeper_auth::{Authenticator, IdentityStore, TokenService};
use gatekeeper_core::{Clock, SystemClock};
use gatekeeper_validation::Validator;

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared, read-only per-process state.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub validator: Validator,
    pub store: Arc<dyn IdentityStore>,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Arc<dyn IdentityStore>, clock: Arc<dyn Clock>) -> Self {
        let tokens = TokenService::new(config.token_config(), clock);
        let authenticator = Authenticator::new(tokens, Arc::clone(&store))
            .with_lookup_timeout(config.lookup_timeout);

        Self {
            authenticator,
            validator: Validator::new(config.validation.clone()),
            store,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig, store: Arc<dyn IdentityStore>) -> Router {
    build_app_with_state(AppState::new(config, store, Arc::new(SystemClock)))
}

pub fn build_app_with_state(state: AppState) -> Router {
    // Routes that require a live identity.
    let protected = Router::new()
        .route("/me", get(routes::system::me))
        .route("/users/:id", delete(routes::users::delete_user))
        .route("/admin/ping", get(routes::system::admin_ping))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    // Routes that personalize output when a token is present.
    let personalized = Router::new()
        .route("/search", get(routes::search::search))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::optional_auth,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/users/validate", post(routes::users::validate_registration))
        .merge(protected)
        .merge(personalized)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
        .with_state(state)
}
