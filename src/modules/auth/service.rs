use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use thesisdesk_auth::jwt::create_access_token;
use thesisdesk_config::jwt::JwtConfig;
use thesisdesk_core::errors::AppError;
use thesisdesk_core::password::{PHANTOM_HASH, hash_password, verify_password};

use crate::modules::users::model::{ProfileResponse, User, UserRole};
use crate::modules::users::service::UserService;

use super::model::{LoginRequest, LoginResponse, RegisterRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequest,
    ) -> Result<ProfileResponse, AppError> {
        let (create, password) = dto.into_parts();
        let password_hash = hash_password(&password)?;

        let (user, profile) = UserService::create_with_profile(db, &create, &password_hash).await?;

        Ok(ProfileResponse { user, profile })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            first_name: String,
            last_name: String,
            email: String,
            password: String,
            role: UserRole,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, first_name, last_name, email, password, role, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        let Some(row) = row else {
            // Burn a bcrypt round anyway so an unknown email costs the same
            // as a wrong password, then fail with the same message.
            let _ = verify_password(&dto.password, PHANTOM_HASH);
            return Err(AppError::unauthorized("Invalid email or password"));
        };

        let is_valid = verify_password(&dto.password, &row.password)?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let access_token =
            create_access_token(row.id, &row.email, row.role.as_str(), jwt_config)?;

        let user = User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok(LoginResponse { access_token, user })
    }
}
