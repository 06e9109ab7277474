use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A course. Codes are unique and human-facing ("CS101").
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a course. Admin only.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(min = 2, message = "code must be at least 2 characters"))]
    pub code: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

/// DTO for enrolling or unenrolling a student.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct EnrollmentRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
}

/// DTO for assigning a supervisor to a course.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct AssignSupervisorRequest {
    pub supervisor_id: Uuid,
}

/// An enrollment edge, returned when a student is enrolled.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A supervisor-course assignment edge.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SupervisorCourse {
    pub id: Uuid,
    pub supervisor_id: Uuid,
    pub course_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
