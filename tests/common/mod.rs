use sqlx::PgPool;
use uuid::Uuid;

use thesisdesk::state::AppState;
use thesisdesk_auth::jwt::create_access_token;
use thesisdesk_config::cors::CorsConfig;
use thesisdesk_config::jwt::JwtConfig;
use thesisdesk_config::upload::UploadConfig;
use thesisdesk_core::file_storage::LocalFileStorage;
use thesisdesk_core::password::hash_password;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[allow(dead_code)]
pub struct TestCourse {
    pub id: Uuid,
    pub code: String,
}

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();

    let upload_config = UploadConfig {
        dir: std::env::temp_dir().join(format!("thesisdesk-test-{}", Uuid::new_v4())),
        public_path: "/files".to_string(),
        max_bytes: 10 * 1024 * 1024,
    };
    let storage = LocalFileStorage::with_limits(
        upload_config.dir.clone(),
        upload_config.public_path.clone(),
        upload_config.max_bytes,
        thesisdesk_core::file_storage::ALLOWED_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        upload_config,
        storage,
    };
    thesisdesk::router::init_router(state)
}

/// Create a test user with a role profile.
/// `role` should be one of: "student", "supervisor", "admin".
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, role: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (first_name, last_name, email, password, role)
         VALUES ($1, $2, $3, $4, $5::user_role)
         RETURNING id",
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    match role {
        "student" => {
            sqlx::query(
                "INSERT INTO student_profiles (user_id, student_number, department, program, enrollment_year)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(format!("S-{}", Uuid::new_v4()))
            .bind("Computer Science")
            .bind("MSc Software Engineering")
            .bind(2024)
            .execute(pool)
            .await
            .unwrap();
        }
        "supervisor" => {
            sqlx::query(
                "INSERT INTO supervisor_profiles (user_id, specialization, position)
                 VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind("Distributed Systems")
            .bind("Professor")
            .execute(pool)
            .await
            .unwrap();
        }
        "admin" => {
            sqlx::query(
                "INSERT INTO admin_profiles (user_id, position, permissions)
                 VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind("Registrar")
            .bind(vec!["*".to_string()])
            .execute(pool)
            .await
            .unwrap();
        }
        _ => panic!("Invalid role: {}", role),
    }

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    }
}

/// Issue a session token for a test user, with the same config the app uses.
pub fn token_for(user: &TestUser) -> String {
    dotenvy::dotenv().ok();
    create_access_token(user.id, &user.email, &user.role, &JwtConfig::from_env()).unwrap()
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, code: &str) -> TestCourse {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO courses (code, name, category)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(code)
    .bind(format!("Course {}", code))
    .bind("Core")
    .fetch_one(pool)
    .await
    .unwrap();

    TestCourse {
        id,
        code: code.to_string(),
    }
}

#[allow(dead_code)]
pub async fn enroll_test_student(pool: &PgPool, student_id: Uuid, course_id: Uuid) {
    sqlx::query("INSERT INTO enrollments (user_id, course_id) VALUES ($1, $2)")
        .bind(student_id)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub async fn assign_test_supervisor(pool: &PgPool, supervisor_id: Uuid, course_id: Uuid) {
    sqlx::query("INSERT INTO supervisor_courses (supervisor_id, course_id) VALUES ($1, $2)")
        .bind(supervisor_id)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub async fn create_test_assignment(pool: &PgPool, course_id: Uuid, title: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO assignments (course_id, title, instructions)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(course_id)
    .bind(title)
    .bind(Some("Test instructions"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_course_code() -> String {
    // Course codes only need to be unique per test database
    format!("CS-{}", &Uuid::new_v4().to_string()[..8])
}

/// Hand-rolled multipart/form-data body with a single file part.
#[allow(dead_code)]
pub fn multipart_file_body(boundary: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}
