use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

use super::controller::{create_user, delete_user, get_me, get_students, get_supervisors};

/// Routes nested under `/api/admin`; the caller applies the admin role layer.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", delete(delete_user))
        .route("/students", get(get_students))
        .route("/supervisors", get(get_supervisors))
}

/// Routes nested under `/api/users`, open to any authenticated caller.
pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}
