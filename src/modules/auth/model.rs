use serde::{Deserialize, Serialize};
use utoipa::{PartialSchema, ToSchema};
use validator::{Validate, ValidationErrors};

use crate::modules::users::model::{
    CreateAdminDto, CreateStudentDto, CreateSupervisorDto, CreateUserRequest, User,
};

// Login request structure
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

// Login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Self-registration payload for a student.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterStudentDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub details: CreateStudentDto,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Self-registration payload for a supervisor.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterSupervisorDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub details: CreateSupervisorDto,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Self-registration payload for an admin.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterAdminDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub details: CreateAdminDto,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Registration payload: a tagged union over the three roles, so each role's
/// required profile fields are checked at the type level instead of behind
/// runtime `if role == ...` guards.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegisterRequest {
    Student(RegisterStudentDto),
    Supervisor(RegisterSupervisorDto),
    Admin(RegisterAdminDto),
}

impl utoipa::PartialSchema for RegisterRequest {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::OneOf(
            utoipa::openapi::schema::OneOfBuilder::new()
                .item(RegisterStudentDto::schema())
                .item(RegisterSupervisorDto::schema())
                .item(RegisterAdminDto::schema())
                .description(Some(
                    "Role-tagged payload; the `role` field selects the variant",
                ))
                .build(),
        ))
    }
}

impl utoipa::ToSchema for RegisterRequest {
    fn name() -> std::borrow::Cow<'static, str> {
        "RegisterRequest".into()
    }
}

impl RegisterRequest {
    /// Split into the role-tagged user/profile payload and the raw password.
    pub fn into_parts(self) -> (CreateUserRequest, String) {
        match self {
            RegisterRequest::Student(dto) => (CreateUserRequest::Student(dto.details), dto.password),
            RegisterRequest::Supervisor(dto) => {
                (CreateUserRequest::Supervisor(dto.details), dto.password)
            }
            RegisterRequest::Admin(dto) => (CreateUserRequest::Admin(dto.details), dto.password),
        }
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            RegisterRequest::Student(dto) => dto.validate(),
            RegisterRequest::Supervisor(dto) => dto.validate(),
            RegisterRequest::Admin(dto) => dto.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::UserRole;

    #[test]
    fn test_register_request_student_deserialize() {
        let json = r#"{
            "role": "student",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@uni.edu",
            "password": "Passw0rd!",
            "student_number": "S-2024-0001",
            "department": "Mathematics",
            "program": "BSc Mathematics",
            "enrollment_year": 2024
        }"#;
        let dto: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_ok());

        let (create, password) = dto.into_parts();
        assert_eq!(create.role(), UserRole::Student);
        assert_eq!(password, "Passw0rd!");
    }

    #[test]
    fn test_register_request_short_password_fails_validation() {
        let json = r#"{
            "role": "supervisor",
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@uni.edu",
            "password": "short",
            "specialization": "Compilers",
            "position": "Professor"
        }"#;
        let dto: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_request_missing_role_tag_fails() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@uni.edu",
            "password": "Passw0rd!"
        }"#;
        assert!(serde_json::from_str::<RegisterRequest>(json).is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "user@uni.edu".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "nope".to_string(),
            password: "secret".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }
}
