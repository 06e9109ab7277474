use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesisdesk_core::errors::AppError;

use crate::modules::users::model::UserRole;

use super::model::{Course, CreateCourseRequest, Enrollment, SupervisorCourse};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseRequest) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (code, name, category)
             VALUES ($1, $2, $3)
             RETURNING id, code, name, category, created_at",
        )
        .bind(&dto.code)
        .bind(&dto.name)
        .bind(&dto.category)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request("Course code already exists");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, code, name, category, created_at FROM courses ORDER BY code",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    /// Remove a course and everything hanging off it: submissions for its
    /// assignments, the assignments, enrollments, and supervisor links, all
    /// in one transaction so a failure partway leaves nothing orphaned.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query(
            "DELETE FROM assignment_submissions
             WHERE assignment_id IN (SELECT id FROM assignments WHERE course_id = $1)",
        )
        .bind(course_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::database)?;

        sqlx::query("DELETE FROM assignments WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM enrollments WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM supervisor_courses WHERE course_id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Course not found"));
        }

        tx.commit().await.map_err(AppError::database)?;

        Ok(())
    }

    /// Enroll a student. Concurrent racers for the same pair are decided by
    /// the unique constraint; the loser maps to a 409.
    #[instrument(skip(db))]
    pub async fn enroll(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, AppError> {
        Self::expect_role(db, student_id, UserRole::Student, "Student").await?;
        Self::expect_course(db, course_id).await?;

        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             RETURNING id, user_id, course_id, created_at",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict("Student is already enrolled in this course");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn unenroll(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE user_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Student is not enrolled in this course"));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn assign_supervisor(
        db: &PgPool,
        supervisor_id: Uuid,
        course_id: Uuid,
    ) -> Result<SupervisorCourse, AppError> {
        Self::expect_role(db, supervisor_id, UserRole::Supervisor, "Supervisor").await?;
        Self::expect_course(db, course_id).await?;

        let link = sqlx::query_as::<_, SupervisorCourse>(
            "INSERT INTO supervisor_courses (supervisor_id, course_id)
             VALUES ($1, $2)
             RETURNING id, supervisor_id, course_id, created_at",
        )
        .bind(supervisor_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict("Supervisor is already assigned to this course");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(link)
    }

    #[instrument(skip(db))]
    pub async fn remove_supervisor(
        db: &PgPool,
        supervisor_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM supervisor_courses WHERE supervisor_id = $1 AND course_id = $2",
        )
        .bind(supervisor_id)
        .bind(course_id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Supervisor is not assigned to this course",
            ));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_enrolled(db: &PgPool, student_id: Uuid) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT c.id, c.code, c.name, c.category, c.created_at
             FROM courses c
             JOIN enrollments e ON e.course_id = c.id
             WHERE e.user_id = $1
             ORDER BY c.code",
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    pub async fn is_enrolled(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2)",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(exists)
    }

    pub async fn is_supervisor_of(
        db: &PgPool,
        supervisor_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM supervisor_courses
              WHERE supervisor_id = $1 AND course_id = $2)",
        )
        .bind(supervisor_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(exists)
    }

    async fn expect_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
            .bind(course_id)
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        if !exists {
            return Err(AppError::not_found("Course not found"));
        }

        Ok(())
    }

    async fn expect_role(
        db: &PgPool,
        user_id: Uuid,
        role: UserRole,
        label: &str,
    ) -> Result<(), AppError> {
        let found: Option<UserRole> = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        match found {
            None => Err(AppError::not_found(format!("{} not found", label))),
            Some(r) if r != role => Err(AppError::bad_request(format!(
                "User does not have the {} role",
                role
            ))),
            Some(_) => Ok(()),
        }
    }
}
