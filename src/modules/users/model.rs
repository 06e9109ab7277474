//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - Base user entity, never carries the password hash
//! - [`UserRole`] - The three system roles
//! - [`StudentProfile`] / [`SupervisorProfile`] / [`AdminProfile`] - exactly
//!   one per user, selected by role
//!
//! # Request DTOs
//!
//! [`CreateUserRequest`] is a tagged union over the three roles: each variant
//! carries its own required profile fields, so a student payload without a
//! student number fails deserialization instead of slipping through as a bag
//! of optional fields.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{PartialSchema, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// The three system roles. Role is fixed at creation time; the slug form
/// ("student", "supervisor", "admin") is what travels in tokens and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Supervisor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Supervisor => "supervisor",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "supervisor" => Ok(UserRole::Supervisor),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// A user in the system. The password hash stays behind the service layer;
/// this struct is what responses carry.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Student-specific attributes, one row per STUDENT user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct StudentProfile {
    pub user_id: Uuid,
    pub student_number: String,
    pub department: String,
    pub program: String,
    pub enrollment_year: i32,
}

/// Supervisor-specific attributes, one row per SUPERVISOR user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SupervisorProfile {
    pub user_id: Uuid,
    pub specialization: String,
    pub position: String,
}

/// Admin-specific attributes, one row per ADMIN user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AdminProfile {
    pub user_id: Uuid,
    pub position: String,
    pub permissions: Vec<String>,
}

/// A user's role-specific profile. The role tag already lives on the user,
/// so the variants serialize untagged.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Profile {
    Student(StudentProfile),
    Supervisor(SupervisorProfile),
    Admin(AdminProfile),
}

impl utoipa::PartialSchema for Profile {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::OneOf(
            utoipa::openapi::schema::OneOfBuilder::new()
                .item(StudentProfile::schema())
                .item(SupervisorProfile::schema())
                .item(AdminProfile::schema())
                .build(),
        ))
    }
}

impl utoipa::ToSchema for Profile {
    fn name() -> std::borrow::Cow<'static, str> {
        "Profile".into()
    }
}

/// User plus their role profile, returned by registration and `/users/me`.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ProfileResponse {
    pub user: User,
    pub profile: Profile,
}

/// Identity and profile fields for a new student user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "student_number must not be empty"))]
    pub student_number: String,
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: String,
    #[validate(length(min = 1, message = "program must not be empty"))]
    pub program: String,
    #[validate(range(min = 1900, max = 2200, message = "enrollment_year is out of range"))]
    pub enrollment_year: i32,
}

/// Identity and profile fields for a new supervisor user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateSupervisorDto {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "specialization must not be empty"))]
    pub specialization: String,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: String,
}

/// Identity and profile fields for a new admin user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateAdminDto {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Admin user-creation payload: a tagged union over the three roles. The
/// password is generated server-side and returned once.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum CreateUserRequest {
    Student(CreateStudentDto),
    Supervisor(CreateSupervisorDto),
    Admin(CreateAdminDto),
}

impl utoipa::PartialSchema for CreateUserRequest {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::OneOf(
            utoipa::openapi::schema::OneOfBuilder::new()
                .item(CreateStudentDto::schema())
                .item(CreateSupervisorDto::schema())
                .item(CreateAdminDto::schema())
                .description(Some(
                    "Role-tagged payload; the `role` field selects the variant",
                ))
                .build(),
        ))
    }
}

impl utoipa::ToSchema for CreateUserRequest {
    fn name() -> std::borrow::Cow<'static, str> {
        "CreateUserRequest".into()
    }
}

impl CreateUserRequest {
    pub fn role(&self) -> UserRole {
        match self {
            CreateUserRequest::Student(_) => UserRole::Student,
            CreateUserRequest::Supervisor(_) => UserRole::Supervisor,
            CreateUserRequest::Admin(_) => UserRole::Admin,
        }
    }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            CreateUserRequest::Student(dto) => dto.validate(),
            CreateUserRequest::Supervisor(dto) => dto.validate(),
            CreateUserRequest::Admin(dto) => dto.validate(),
        }
    }
}

/// Response for admin user creation; the temporary password is shown exactly
/// once and never stored in the clear.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct CreatedUserResponse {
    pub user: User,
    pub profile: Profile,
    pub temporary_password: String,
}

/// A student row joined with its profile, for admin listings.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct StudentListItem {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_number: String,
    pub department: String,
    pub program: String,
    pub enrollment_year: i32,
}

/// A supervisor row joined with its profile, for admin listings.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct SupervisorListItem {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialization: String,
    pub position: String,
}

/// Paginated response containing students.
#[derive(Serialize, Debug, ToSchema)]
pub struct PaginatedStudentsResponse {
    pub data: Vec<StudentListItem>,
    pub meta: thesisdesk_core::pagination::PaginationMeta,
}

/// Paginated response containing supervisors.
#[derive(Serialize, Debug, ToSchema)]
pub struct PaginatedSupervisorsResponse {
    pub data: Vec<SupervisorListItem>,
    pub meta: thesisdesk_core::pagination::PaginationMeta,
}
