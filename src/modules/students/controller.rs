use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use thesisdesk_core::errors::AppError;

use super::model::{StudentSearchParams, StudentSearchResult};
use super::service::StudentSearchService;

/// Search students by name or student number
#[utoipa::path(
    get,
    path = "/api/students/search",
    params(("q" = String, Query, description = "Search query, minimum 2 characters")),
    responses(
        (status = 200, description = "Matching students", body = Vec<StudentSearchResult>),
        (status = 400, description = "Query too short", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, _auth_user))]
pub async fn search_students(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<StudentSearchParams>,
) -> Result<Json<Vec<StudentSearchResult>>, AppError> {
    let results = StudentSearchService::search(&state.db, &params.q).await?;
    Ok(Json(results))
}
