//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the JWT and extracts claims
//! 3. A role layer ([`role::require_roles`]) or role extractor checks the
//!    caller's role against the route's allow-list
//! 4. Handler executes if all checks pass; it can trust identity and role
//!
//! A missing credential is a 401. A presented-but-bad credential, or a valid
//! credential with the wrong role, is a 403.

pub mod auth;
pub mod role;
