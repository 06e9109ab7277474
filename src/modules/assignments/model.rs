//! Assignment and submission models.
//!
//! A submission's lifecycle per (assignment, student) pair is
//! `Pending → Submitted → Graded`. There is at most one submission row per
//! pair: resubmitting overwrites the file reference and timestamp in place
//! and resets the status to `Submitted`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Submission lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Submitted,
    Graded,
}

/// An assignment within a course.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub instructions: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A student's submission for an assignment.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub status: SubmissionStatus,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
    pub file_path: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// An assignment joined with the calling student's own submission, if any.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct AssignmentWithSubmission {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub instructions: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub submission_status: Option<SubmissionStatus>,
    pub grade: Option<i32>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for creating an assignment.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub instructions: Option<String>,
}

/// DTO for grading a submission. Bounds on the grade are checked in the
/// service so out-of-range values get the domain error, not a generic
/// validation message.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct GradeRequest {
    pub grade: i32,
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Submitted).unwrap(),
            r#""submitted""#
        );
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Graded).unwrap(),
            r#""graded""#
        );
    }

    #[test]
    fn test_create_assignment_request_validation() {
        let dto = CreateAssignmentRequest {
            title: "Literature Review".to_string(),
            instructions: None,
        };
        assert!(dto.validate().is_ok());

        let dto_empty = CreateAssignmentRequest {
            title: "".to_string(),
            instructions: Some("Read the papers".to_string()),
        };
        assert!(dto_empty.validate().is_err());
    }
}
