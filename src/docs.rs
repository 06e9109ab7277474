use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assignments::model::{
    Assignment, AssignmentWithSubmission, CreateAssignmentRequest, GradeRequest, Submission,
    SubmissionStatus,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, RegisterAdminDto, RegisterRequest, RegisterStudentDto,
    RegisterSupervisorDto,
};
use crate::modules::courses::model::{
    AssignSupervisorRequest, Course, CreateCourseRequest, Enrollment, EnrollmentRequest,
    SupervisorCourse,
};
use crate::modules::students::model::{StudentSearchParams, StudentSearchResult};
use crate::modules::users::model::{
    AdminProfile, CreateAdminDto, CreateStudentDto, CreateSupervisorDto, CreateUserRequest,
    CreatedUserResponse, PaginatedStudentsResponse, PaginatedSupervisorsResponse, Profile,
    ProfileResponse, StudentListItem, StudentProfile, SupervisorListItem, SupervisorProfile, User,
    UserRole,
};
use thesisdesk_core::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_students,
        crate::modules::users::controller::get_supervisors,
        crate::modules::users::controller::delete_user,
        crate::modules::users::controller::get_me,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::list_enrolled_courses,
        crate::modules::courses::controller::enroll_student,
        crate::modules::courses::controller::unenroll_student,
        crate::modules::courses::controller::assign_supervisor,
        crate::modules::courses::controller::remove_supervisor,
        crate::modules::students::controller::search_students,
        crate::modules::assignments::controller::list_course_assignments,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::submit_assignment,
        crate::modules::assignments::controller::grade_submission,
    ),
    components(
        schemas(
            User,
            UserRole,
            StudentProfile,
            SupervisorProfile,
            AdminProfile,
            Profile,
            ProfileResponse,
            CreateStudentDto,
            CreateSupervisorDto,
            CreateAdminDto,
            CreateUserRequest,
            CreatedUserResponse,
            StudentListItem,
            SupervisorListItem,
            PaginatedStudentsResponse,
            PaginatedSupervisorsResponse,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            RegisterStudentDto,
            RegisterSupervisorDto,
            RegisterAdminDto,
            ErrorResponse,
            Course,
            CreateCourseRequest,
            EnrollmentRequest,
            AssignSupervisorRequest,
            Enrollment,
            SupervisorCourse,
            StudentSearchParams,
            StudentSearchResult,
            Assignment,
            Submission,
            SubmissionStatus,
            AssignmentWithSubmission,
            CreateAssignmentRequest,
            GradeRequest,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Admin", description = "Admin user management"),
        (name = "Users", description = "User profile endpoints"),
        (name = "Courses", description = "Courses, enrollments, supervisor assignments"),
        (name = "Students", description = "Student search"),
        (name = "Assignments", description = "Assignments, submissions, grading")
    ),
    info(
        title = "ThesisDesk API",
        version = "0.1.0",
        description = "A REST API built with Rust, Axum, and PostgreSQL for thesis and coursework management.",
        contact(
            name = "API Support",
            email = "support@thesisdesk.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
