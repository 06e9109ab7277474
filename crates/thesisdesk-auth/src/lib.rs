//! # ThesisDesk Auth
//!
//! Session token types and JWT utilities for the ThesisDesk API.
//!
//! The session model is deliberately small: one signed, time-limited access
//! token carrying identity and role. There is no refresh token and no
//! server-side revocation list — logout is the client discarding its token,
//! and a token stays valid until its expiry regardless of server-side state.
//!
//! # Example
//!
//! ```ignore
//! use thesisdesk_auth::{create_access_token, verify_token};
//! use thesisdesk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token(user_id, "student@uni.edu", "student", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, "student");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
