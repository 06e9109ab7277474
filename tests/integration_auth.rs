mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app, token_for};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn register_student_payload(email: &str, password: &str) -> serde_json::Value {
    json!({
        "role": "student",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": password,
        "student_number": format!("S-{}", uuid::Uuid::new_v4()),
        "department": "Mathematics",
        "program": "BSc Mathematics",
        "enrollment_year": 2024
    })
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_student_success(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let request = json_request(
        "POST",
        "/api/auth/register",
        &register_student_payload(&email, "Passw0rd!"),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "student");
    assert_eq!(body["profile"]["department"], "Mathematics");
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let payload = register_student_payload(&email, "Passw0rd!");

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/api/auth/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Email already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_then_login_round_trip(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let password = "Passw0rd!";

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            &register_student_payload(&email, password),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": email, "password": password}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(body.get("access_token").is_some());
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "student");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "correctpass", "student").await;

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": email, "password": "wrongpassword"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_failure_message_identical_for_unknown_email_and_wrong_password(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "correctpass", "student").await;

    let app = setup_test_app(pool.clone()).await;

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": email, "password": "wrongpassword"}),
        ))
        .await
        .unwrap();

    let unknown_email = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": generate_unique_email(), "password": "wrongpassword"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Nothing in the response may distinguish the two failure causes.
    let body_a = wrong_password.into_body().collect().await.unwrap().to_bytes();
    let body_b = unknown_email.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body_a, body_b);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_invalid_email_format(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": "not-an-email", "password": "password123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_missing_password(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({"email": "test@test.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_rejects_unknown_role(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            &json!({
                "role": "superuser",
                "first_name": "Eve",
                "last_name": "Adversary",
                "email": generate_unique_email(),
                "password": "Passw0rd!"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_route_without_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/courses")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_route_with_garbage_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/courses")
        .header("authorization", "Bearer not.a.real.token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // A presented-but-invalid credential is a 403, not a 401.
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_protected_route_with_valid_token(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", "student").await;

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/courses")
        .header("authorization", format!("Bearer {}", token_for(&user)))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
