//! # ThesisDesk Core
//!
//! Core types, errors, and utilities for the ThesisDesk API.
//!
//! This crate provides foundational pieces used throughout the application:
//!
//! - [`errors`]: the application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`pagination`]: pagination parameters and metadata for list endpoints
//! - [`file_storage`]: local filesystem storage for submission uploads

pub mod errors;
pub mod file_storage;
pub mod pagination;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use file_storage::{FileStorage, LocalFileStorage, StorageError};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{hash_password, verify_password};
