use sqlx::PgPool;
use tracing::instrument;

use thesisdesk_core::errors::AppError;

use super::model::StudentSearchResult;

/// Queries shorter than this are rejected outright to bound result-set cost.
const MIN_QUERY_LEN: usize = 2;

const MAX_RESULTS: i64 = 20;

pub struct StudentSearchService;

impl StudentSearchService {
    /// Case-insensitive substring search over first name, last name, and
    /// student number.
    #[instrument(skip(db))]
    pub async fn search(db: &PgPool, query: &str) -> Result<Vec<StudentSearchResult>, AppError> {
        let query = query.trim();

        if query.chars().count() < MIN_QUERY_LEN {
            return Err(AppError::bad_request(format!(
                "Search query must be at least {} characters",
                MIN_QUERY_LEN
            )));
        }

        let pattern = format!("%{}%", escape_like(query));

        let results = sqlx::query_as::<_, StudentSearchResult>(
            "SELECT u.id, u.first_name, u.last_name, u.email, p.student_number
             FROM users u
             JOIN student_profiles p ON p.user_id = u.id
             WHERE u.first_name ILIKE $1
                OR u.last_name ILIKE $1
                OR p.student_number ILIKE $1
             ORDER BY u.last_name, u.first_name
             LIMIT $2",
        )
        .bind(&pattern)
        .bind(MAX_RESULTS)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(results)
    }
}

// A literal % or _ in the query should match itself, not act as a wildcard.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
