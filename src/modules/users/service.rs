use rand::Rng;
use rand::distributions::Alphanumeric;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesisdesk_core::errors::AppError;
use thesisdesk_core::pagination::{PaginationMeta, PaginationParams};
use thesisdesk_core::password::hash_password;

use super::model::{
    AdminProfile, CreateUserRequest, CreatedUserResponse, PaginatedStudentsResponse,
    PaginatedSupervisorsResponse, Profile, ProfileResponse, StudentListItem, StudentProfile,
    SupervisorListItem, SupervisorProfile, User, UserRole,
};

const TEMP_PASSWORD_LEN: usize = 16;

pub struct UserService;

impl UserService {
    /// Insert a user and its role profile in one transaction. A failure on
    /// either insert rolls back both, so a user row can never exist without
    /// its profile.
    #[instrument(skip(db, dto, password_hash))]
    pub async fn create_with_profile(
        db: &PgPool,
        dto: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<(User, Profile), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let (first_name, last_name, email) = match dto {
            CreateUserRequest::Student(d) => (&d.first_name, &d.last_name, &d.email),
            CreateUserRequest::Supervisor(d) => (&d.first_name, &d.last_name, &d.email),
            CreateUserRequest::Admin(d) => (&d.first_name, &d.last_name, &d.email),
        };

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, first_name, last_name, email, role, created_at, updated_at",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .bind(dto.role())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_user_insert_error)?;

        let profile = match dto {
            CreateUserRequest::Student(d) => {
                let profile = sqlx::query_as::<_, StudentProfile>(
                    "INSERT INTO student_profiles (user_id, student_number, department, program, enrollment_year)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING user_id, student_number, department, program, enrollment_year",
                )
                .bind(user.id)
                .bind(&d.student_number)
                .bind(&d.department)
                .bind(&d.program)
                .bind(d.enrollment_year)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_profile_insert_error)?;
                Profile::Student(profile)
            }
            CreateUserRequest::Supervisor(d) => {
                let profile = sqlx::query_as::<_, SupervisorProfile>(
                    "INSERT INTO supervisor_profiles (user_id, specialization, position)
                     VALUES ($1, $2, $3)
                     RETURNING user_id, specialization, position",
                )
                .bind(user.id)
                .bind(&d.specialization)
                .bind(&d.position)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_profile_insert_error)?;
                Profile::Supervisor(profile)
            }
            CreateUserRequest::Admin(d) => {
                let profile = sqlx::query_as::<_, AdminProfile>(
                    "INSERT INTO admin_profiles (user_id, position, permissions)
                     VALUES ($1, $2, $3)
                     RETURNING user_id, position, permissions",
                )
                .bind(user.id)
                .bind(&d.position)
                .bind(&d.permissions)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_profile_insert_error)?;
                Profile::Admin(profile)
            }
        };

        tx.commit().await.map_err(AppError::database)?;

        Ok((user, profile))
    }

    /// Admin user creation: the password is generated here and returned to
    /// the caller exactly once.
    #[instrument(skip(db, dto))]
    pub async fn create_user(
        db: &PgPool,
        dto: CreateUserRequest,
    ) -> Result<CreatedUserResponse, AppError> {
        let temporary_password = generate_temporary_password();
        let password_hash = hash_password(&temporary_password)?;

        let (user, profile) = Self::create_with_profile(db, &dto, &password_hash).await?;

        Ok(CreatedUserResponse {
            user,
            profile,
            temporary_password,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<ProfileResponse, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, role, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        let profile = match user.role {
            UserRole::Student => sqlx::query_as::<_, StudentProfile>(
                "SELECT user_id, student_number, department, program, enrollment_year
                 FROM student_profiles WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .map(Profile::Student),
            UserRole::Supervisor => sqlx::query_as::<_, SupervisorProfile>(
                "SELECT user_id, specialization, position
                 FROM supervisor_profiles WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .map(Profile::Supervisor),
            UserRole::Admin => sqlx::query_as::<_, AdminProfile>(
                "SELECT user_id, position, permissions
                 FROM admin_profiles WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .map(Profile::Admin),
        };

        let profile = profile
            .ok_or_else(|| AppError::internal(anyhow::anyhow!("Profile missing for user")))?;

        Ok(ProfileResponse { user, profile })
    }

    #[instrument(skip(db))]
    pub async fn list_students(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<PaginatedStudentsResponse, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM student_profiles")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, StudentListItem>(
            "SELECT u.id, u.first_name, u.last_name, u.email,
                    p.student_number, p.department, p.program, p.enrollment_year
             FROM users u
             JOIN student_profiles p ON p.user_id = u.id
             ORDER BY u.last_name, u.first_name
             LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(PaginatedStudentsResponse {
            meta: PaginationMeta {
                total,
                limit: pagination.limit(),
                offset: pagination.offset(),
                has_more: pagination.offset() + (data.len() as i64) < total,
            },
            data,
        })
    }

    #[instrument(skip(db))]
    pub async fn list_supervisors(
        db: &PgPool,
        pagination: &PaginationParams,
    ) -> Result<PaginatedSupervisorsResponse, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM supervisor_profiles")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, SupervisorListItem>(
            "SELECT u.id, u.first_name, u.last_name, u.email,
                    p.specialization, p.position
             FROM users u
             JOIN supervisor_profiles p ON p.user_id = u.id
             ORDER BY u.last_name, u.first_name
             LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(PaginatedSupervisorsResponse {
            meta: PaginationMeta {
                total,
                limit: pagination.limit(),
                offset: pagination.offset(),
                has_more: pagination.offset() + (data.len() as i64) < total,
            },
            data,
        })
    }

    /// Remove a user and everything that references them. The whole sequence
    /// is one transaction; profiles go via ON DELETE CASCADE.
    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        sqlx::query("DELETE FROM assignment_submissions WHERE student_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM enrollments WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM supervisor_courses WHERE supervisor_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        tx.commit().await.map_err(AppError::database)?;

        Ok(())
    }
}

fn map_user_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::bad_request("Email already exists");
        }
    }
    AppError::database(anyhow::Error::from(e))
}

fn map_profile_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::bad_request("Student number already exists");
        }
    }
    AppError::database(anyhow::Error::from(e))
}

fn generate_temporary_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_PASSWORD_LEN)
        .map(char::from)
        .collect()
}
