//! CLI bootstrap commands.
//!
//! The first admin cannot be created through the API (admin creation is
//! itself admin-gated), so `create-admin` seeds one directly.

use sqlx::PgPool;

use thesisdesk_core::errors::AppError;
use thesisdesk_core::password::hash_password;

use crate::modules::users::model::{CreateAdminDto, CreateUserRequest, User};
use crate::modules::users::service::UserService;

pub async fn create_admin(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let dto = CreateUserRequest::Admin(CreateAdminDto {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        position: "System Administrator".to_string(),
        permissions: vec!["*".to_string()],
    });

    let password_hash = hash_password(password)?;

    let (user, _profile) = UserService::create_with_profile(pool, &dto, &password_hash).await?;

    Ok(user)
}
