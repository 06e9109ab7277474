use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::search_students;

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/search", get(search_students))
}
