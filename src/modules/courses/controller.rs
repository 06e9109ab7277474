use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdmin, RequireStaff, RequireStudent};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use thesisdesk_core::errors::AppError;

use super::model::{
    AssignSupervisorRequest, Course, CreateCourseRequest, Enrollment, EnrollmentRequest,
    SupervisorCourse,
};
use super::service::CourseService;

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<Course>),
        (status = 401, description = "Unauthorized - missing token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_courses(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Bad request - validation error or duplicate code", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    _guard: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = CourseService::create_course(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Delete a course and its enrollments, assignments, and supervisor links
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    _guard: RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the calling student's enrolled courses
#[utoipa::path(
    get,
    path = "/api/courses/enrolled",
    responses(
        (status = 200, description = "Courses the caller is enrolled in", body = Vec<Course>),
        (status = 403, description = "Forbidden - student role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, guard))]
pub async fn list_enrolled_courses(
    State(state): State<AppState>,
    guard: RequireStudent,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_enrolled(&state.db, guard.0.user_id()?).await?;
    Ok(Json(courses))
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/api/courses/enroll",
    request_body = EnrollmentRequest,
    responses(
        (status = 201, description = "Student enrolled", body = Enrollment),
        (status = 400, description = "Bad request - target user is not a student", body = ErrorResponse),
        (status = 403, description = "Forbidden - staff role required", body = ErrorResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 409, description = "Student is already enrolled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn enroll_student(
    State(state): State<AppState>,
    _guard: RequireStaff,
    ValidatedJson(dto): ValidatedJson<EnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = CourseService::enroll(&state.db, dto.student_id, dto.course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Unenroll a student from a course
#[utoipa::path(
    delete,
    path = "/api/courses/enroll",
    request_body = EnrollmentRequest,
    responses(
        (status = 204, description = "Student unenrolled"),
        (status = 403, description = "Forbidden - staff role required", body = ErrorResponse),
        (status = 404, description = "Student is not enrolled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn unenroll_student(
    State(state): State<AppState>,
    _guard: RequireStaff,
    ValidatedJson(dto): ValidatedJson<EnrollmentRequest>,
) -> Result<StatusCode, AppError> {
    CourseService::unenroll(&state.db, dto.student_id, dto.course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign a supervisor to a course
#[utoipa::path(
    post,
    path = "/api/courses/{id}/supervisors",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = AssignSupervisorRequest,
    responses(
        (status = 201, description = "Supervisor assigned", body = SupervisorCourse),
        (status = 400, description = "Bad request - target user is not a supervisor", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 404, description = "Supervisor or course not found", body = ErrorResponse),
        (status = 409, description = "Supervisor is already assigned", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn assign_supervisor(
    State(state): State<AppState>,
    _guard: RequireAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<AssignSupervisorRequest>,
) -> Result<(StatusCode, Json<SupervisorCourse>), AppError> {
    let link = CourseService::assign_supervisor(&state.db, dto.supervisor_id, id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Remove a supervisor from a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}/supervisors/{supervisor_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("supervisor_id" = Uuid, Path, description = "Supervisor user ID")
    ),
    responses(
        (status = 204, description = "Supervisor removed"),
        (status = 403, description = "Forbidden - admin role required", body = ErrorResponse),
        (status = 404, description = "Supervisor is not assigned", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn remove_supervisor(
    State(state): State<AppState>,
    _guard: RequireAdmin,
    Path((id, supervisor_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    CourseService::remove_supervisor(&state.db, supervisor_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
