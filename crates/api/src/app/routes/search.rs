use axum::{
    Json,
    extract::{Extension, Query, State},
};

use gatekeeper_validation::validate_date_range;

use crate::app::AppState;
use crate::app::dto::{SearchParams, SearchResponse};
use crate::app::errors::ApiError;
use crate::context::MaybeIdentity;

pub async fn search(
    State(state): State<AppState>,
    Extension(viewer): Extension<MaybeIdentity>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    validate_date_range(params.from.as_deref(), params.to.as_deref()).into_result()?;

    Ok(Json(SearchResponse {
        query: state.validator.search_query(params.q.as_deref()),
        pagination: state.validator.pagination(&params.pagination()),
        viewer: viewer.identity().map(|i| i.username.clone()),
    }))
}
