use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Query parameters for student search.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct StudentSearchParams {
    pub q: String,
}

/// A search hit: enough to pick a student out of a list.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct StudentSearchResult {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_number: String,
}
