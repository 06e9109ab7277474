//! # ThesisDesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: session token signing configuration
//! - [`cors`]: allowed frontend origins
//! - [`upload`]: submission upload directory and limits
//!
//! # Example
//!
//! ```ignore
//! use thesisdesk_config::{JwtConfig, CorsConfig, UploadConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let upload_config = UploadConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod upload;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use upload::UploadConfig;
