use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use thesisdesk_core::file_storage::MAX_UPLOAD_BYTES;

use super::controller::{
    create_assignment, grade_submission, list_course_assignments, submit_assignment,
};

// Slack on top of the upload ceiling for multipart framing; the exact 10 MB
// check on the file itself happens in the service.
const BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

/// Routes nested under `/api/courses/{id}/assignments`.
pub fn init_course_assignments_router() -> Router<AppState> {
    Router::new().route("/", get(list_course_assignments).post(create_assignment))
}

/// Routes nested under `/api/assignments`.
pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/submit",
            post(submit_assignment).layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .route("/submissions/{id}/grade", post(grade_submission))
}
