use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

use super::controller::{
    assign_supervisor, create_course, delete_course, enroll_student, list_courses,
    list_enrolled_courses, remove_supervisor, unenroll_student,
};

/// Routes nested under `/api/courses`. Allow-lists vary per route, so the
/// role checks live in extractor guards rather than one router-wide layer.
pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/enrolled", get(list_enrolled_courses))
        .route("/enroll", post(enroll_student).delete(unenroll_student))
        .route("/{id}", delete(delete_course))
        .route("/{id}/supervisors", post(assign_supervisor))
        .route("/{id}/supervisors/{supervisor_id}", delete(remove_supervisor))
}
