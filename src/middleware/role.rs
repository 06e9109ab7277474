//! Role-based authorization for Axum routes.
//!
//! Two composable approaches, used where each fits best:
//!
//! 1. Layer-based middleware ([`require_roles`] and the `require_*` helpers)
//!    for router subtrees with a uniform allow-list
//! 2. Extractors ([`RequireAdmin`], [`RequireStaff`], [`RequireSupervisor`],
//!    [`RequireStudent`]) for routers that mix allow-lists per route

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use thesisdesk_core::errors::AppError;

/// Middleware function that checks whether the authenticated caller holds
/// one of the allowed roles.
///
/// The rejection message names both the required roles and the caller's
/// actual role.
pub async fn require_roles(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let user_role = auth_user.role()?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles, user_role
        )));
    }

    req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer helper for admin-only route subtrees.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .nest("/admin", init_admin_router())
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Layer helper for staff routes (supervisors and admins).
pub async fn require_staff(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        vec![UserRole::Supervisor, UserRole::Admin],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

fn check_roles(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    let user_role = auth_user.role()?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles, user_role
        )));
    }

    Ok(())
}

macro_rules! role_extractor {
    ($(#[$doc:meta])* $name:ident, [$($role:expr),+]) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = AuthUser::from_request_parts(parts, state).await?;
                check_roles(&auth_user, &[$($role),+])?;
                Ok($name(auth_user))
            }
        }
    };
}

role_extractor!(
    /// Extractor guard for admin-only handlers.
    RequireAdmin,
    [UserRole::Admin]
);

role_extractor!(
    /// Extractor guard for handlers open to supervisors and admins.
    RequireStaff,
    [UserRole::Supervisor, UserRole::Admin]
);

role_extractor!(
    /// Extractor guard for supervisor-only handlers.
    RequireSupervisor,
    [UserRole::Supervisor]
);

role_extractor!(
    /// Extractor guard for student-only handlers.
    RequireStudent,
    [UserRole::Student]
);
