use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesisdesk_core::errors::AppError;
use thesisdesk_core::file_storage::{FileStorage, LocalFileStorage, extension_of};

use crate::modules::courses::service::CourseService;
use crate::modules::users::model::UserRole;

use super::model::{Assignment, AssignmentWithSubmission, CreateAssignmentRequest, Submission};

const MIN_GRADE: i32 = 0;
const MAX_GRADE: i32 = 100;

pub struct AssignmentService;

impl AssignmentService {
    /// Create an assignment in a course. Supervisors must be assigned to the
    /// course; admins may create in any course.
    #[instrument(skip(db, dto))]
    pub async fn create_assignment(
        db: &PgPool,
        course_id: Uuid,
        dto: CreateAssignmentRequest,
        actor_id: Uuid,
        actor_role: UserRole,
    ) -> Result<Assignment, AppError> {
        let course_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;

        if !course_exists {
            return Err(AppError::not_found("Course not found"));
        }

        if actor_role == UserRole::Supervisor
            && !CourseService::is_supervisor_of(db, actor_id, course_id).await?
        {
            return Err(AppError::forbidden("You are not assigned to this course"));
        }

        let assignment = sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (course_id, title, instructions)
             VALUES ($1, $2, $3)
             RETURNING id, course_id, title, instructions, created_at",
        )
        .bind(course_id)
        .bind(&dto.title)
        .bind(&dto.instructions)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(assignment)
    }

    /// List a course's assignments together with the calling student's own
    /// submission state. Only enrolled students get past the gate.
    #[instrument(skip(db))]
    pub async fn list_for_student(
        db: &PgPool,
        course_id: Uuid,
        student_id: Uuid,
    ) -> Result<Vec<AssignmentWithSubmission>, AppError> {
        let course_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(db)
                .await
                .map_err(AppError::database)?;

        if !course_exists {
            return Err(AppError::not_found("Course not found"));
        }

        if !CourseService::is_enrolled(db, student_id, course_id).await? {
            return Err(AppError::forbidden("You are not enrolled in this course"));
        }

        let assignments = sqlx::query_as::<_, AssignmentWithSubmission>(
            "SELECT a.id, a.course_id, a.title, a.instructions, a.created_at,
                    s.status AS submission_status, s.grade, s.submitted_at
             FROM assignments a
             LEFT JOIN assignment_submissions s
                    ON s.assignment_id = a.id AND s.student_id = $2
             WHERE a.course_id = $1
             ORDER BY a.created_at",
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(assignments)
    }

    /// Upsert a student's submission. Enrollment is checked before the file
    /// is validated so a non-enrolled student gets the same answer no matter
    /// what they upload. The unique (assignment, student) constraint makes
    /// the write last-wins under concurrent submits.
    #[instrument(skip(db, storage, content))]
    pub async fn submit(
        db: &PgPool,
        storage: &LocalFileStorage,
        assignment_id: Uuid,
        student_id: Uuid,
        filename: &str,
        content: &[u8],
    ) -> Result<Submission, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "SELECT id, course_id, title, instructions, created_at
             FROM assignments WHERE id = $1",
        )
        .bind(assignment_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Assignment not found"))?;

        if !CourseService::is_enrolled(db, student_id, assignment.course_id).await? {
            return Err(AppError::forbidden("You are not enrolled in this course"));
        }

        storage
            .validate(filename, content.len())
            .map_err(AppError::storage)?;

        // validate() guarantees an allowed extension exists
        let ext = extension_of(filename).unwrap_or_default();
        let key = format!("submissions/{}/{}.{}", assignment_id, student_id, ext);

        storage.save(&key, content).await.map_err(AppError::storage)?;

        let submission = sqlx::query_as::<_, Submission>(
            "INSERT INTO assignment_submissions (assignment_id, student_id, status, file_path, submitted_at)
             VALUES ($1, $2, 'submitted', $3, NOW())
             ON CONFLICT (assignment_id, student_id)
             DO UPDATE SET status = 'submitted', file_path = EXCLUDED.file_path, submitted_at = NOW()
             RETURNING id, assignment_id, student_id, status, grade, feedback, file_path, submitted_at",
        )
        .bind(assignment_id)
        .bind(student_id)
        .bind(&key)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(submission)
    }

    /// Grade a submission. The grader must supervise the submission's course
    /// and the grade must be within [0, 100] inclusive.
    #[instrument(skip(db))]
    pub async fn grade(
        db: &PgPool,
        submission_id: Uuid,
        grader_id: Uuid,
        grade: i32,
        feedback: Option<String>,
    ) -> Result<Submission, AppError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(AppError::bad_request(format!(
                "Grade must be between {} and {}",
                MIN_GRADE, MAX_GRADE
            )));
        }

        let course_id: Option<Uuid> = sqlx::query_scalar(
            "SELECT a.course_id
             FROM assignment_submissions s
             JOIN assignments a ON a.id = s.assignment_id
             WHERE s.id = $1",
        )
        .bind(submission_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        let course_id = course_id.ok_or_else(|| AppError::not_found("Submission not found"))?;

        if !CourseService::is_supervisor_of(db, grader_id, course_id).await? {
            return Err(AppError::forbidden("You are not assigned to this course"));
        }

        let submission = sqlx::query_as::<_, Submission>(
            "UPDATE assignment_submissions
             SET status = 'graded', grade = $2, feedback = $3
             WHERE id = $1
             RETURNING id, assignment_id, student_id, status, grade, feedback, file_path, submitted_at",
        )
        .bind(submission_id)
        .bind(grade)
        .bind(&feedback)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(submission)
    }
}
