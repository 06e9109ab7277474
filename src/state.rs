use sqlx::PgPool;

use thesisdesk_config::cors::CorsConfig;
use thesisdesk_config::jwt::JwtConfig;
use thesisdesk_config::upload::UploadConfig;
use thesisdesk_core::file_storage::LocalFileStorage;
use thesisdesk_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub upload_config: UploadConfig,
    pub storage: LocalFileStorage,
}

pub async fn init_app_state() -> AppState {
    let upload_config = UploadConfig::from_env();
    let storage = LocalFileStorage::with_limits(
        upload_config.dir.clone(),
        upload_config.public_path.clone(),
        upload_config.max_bytes,
        thesisdesk_core::file_storage::ALLOWED_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        upload_config,
        storage,
    }
}
