use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireStaff, RequireStudent, RequireSupervisor};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;
use thesisdesk_core::errors::AppError;

use super::model::{
    Assignment, AssignmentWithSubmission, CreateAssignmentRequest, GradeRequest, Submission,
};
use super::service::AssignmentService;

/// List a course's assignments with the caller's own submission status
#[utoipa::path(
    get,
    path = "/api/courses/{id}/assignments",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Assignments with own submission status", body = Vec<AssignmentWithSubmission>),
        (status = 403, description = "Forbidden - not enrolled in this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, guard))]
pub async fn list_course_assignments(
    State(state): State<AppState>,
    guard: RequireStudent,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AssignmentWithSubmission>>, AppError> {
    let assignments =
        AssignmentService::list_for_student(&state.db, id, guard.0.user_id()?).await?;
    Ok(Json(assignments))
}

/// Create an assignment in a course
#[utoipa::path(
    post,
    path = "/api/courses/{id}/assignments",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = Assignment),
        (status = 403, description = "Forbidden - staff role required, or supervisor not assigned to course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, guard, dto))]
pub async fn create_assignment(
    State(state): State<AppState>,
    guard: RequireStaff,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    let assignment = AssignmentService::create_assignment(
        &state.db,
        id,
        dto,
        guard.0.user_id()?,
        guard.0.role()?,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Upload a submission file for an assignment
///
/// Multipart form with a single `file` part. Resubmitting replaces the
/// previous upload for the same assignment.
#[utoipa::path(
    post,
    path = "/api/assignments/{id}/submit",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Submission stored", body = Submission),
        (status = 400, description = "Missing file or unsupported file type", body = ErrorResponse),
        (status = 403, description = "Forbidden - student role required, or not enrolled", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, guard, multipart))]
pub async fn submit_assignment(
    State(state): State<AppState>,
    guard: RequireStudent,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Submission>, AppError> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .ok_or_else(|| AppError::bad_request("Uploaded file must have a filename"))?;
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::bad_request(format!("Failed to read upload: {}", e)))?;
            upload = Some((filename, bytes));
            break;
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::bad_request("Missing 'file' field in upload"))?;

    let submission = AssignmentService::submit(
        &state.db,
        &state.storage,
        id,
        guard.0.user_id()?,
        &filename,
        &bytes,
    )
    .await?;

    Ok(Json(submission))
}

/// Grade a submission
#[utoipa::path(
    post,
    path = "/api/assignments/submissions/{id}/grade",
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = GradeRequest,
    responses(
        (status = 200, description = "Submission graded", body = Submission),
        (status = 400, description = "Grade out of range", body = ErrorResponse),
        (status = 403, description = "Forbidden - supervisor role required, or not assigned to course", body = ErrorResponse),
        (status = 404, description = "Submission not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, guard, dto))]
pub async fn grade_submission(
    State(state): State<AppState>,
    guard: RequireSupervisor,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<GradeRequest>,
) -> Result<Json<Submission>, AppError> {
    let submission =
        AssignmentService::grade(&state.db, id, guard.0.user_id()?, dto.grade, dto.feedback)
            .await?;
    Ok(Json(submission))
}
