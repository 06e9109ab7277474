mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app, token_for};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn search_request(q: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/students/search?q={}", q))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn create_named_student(pool: &PgPool, first_name: &str, last_name: &str) -> Uuid {
    let user =
        create_test_user(pool, &generate_unique_email(), "testpass", "student").await;
    sqlx::query("UPDATE users SET first_name = $1, last_name = $2 WHERE id = $3")
        .bind(first_name)
        .bind(last_name)
        .bind(user.id)
        .execute(pool)
        .await
        .unwrap();
    user.id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_rejects_short_query(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass", "supervisor").await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(search_request("a", &token_for(&user)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_requires_authentication(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/students/search?q=smith")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    let supervisor =
        create_test_user(&pool, &generate_unique_email(), "testpass", "supervisor").await;
    let target = create_named_student(&pool, "Katherine", "Johnson").await;
    create_named_student(&pool, "Dorothy", "Vaughan").await;

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(search_request("joHNs", &token_for(&supervisor)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let hits = body.as_array().unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], target.to_string());
    assert_eq!(hits[0]["last_name"], "Johnson");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_student_number(pool: PgPool) {
    let supervisor =
        create_test_user(&pool, &generate_unique_email(), "testpass", "supervisor").await;
    let student = create_test_user(&pool, &generate_unique_email(), "testpass", "student").await;

    sqlx::query("UPDATE student_profiles SET student_number = 'S-2024-7777' WHERE user_id = $1")
        .bind(student.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(search_request("2024-77", &token_for(&supervisor)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let hits = body.as_array().unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["student_number"], "S-2024-7777");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_returns_empty_for_no_match(pool: PgPool) {
    let supervisor =
        create_test_user(&pool, &generate_unique_email(), "testpass", "supervisor").await;
    create_named_student(&pool, "Katherine", "Johnson").await;

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(search_request("zzzzzz", &token_for(&supervisor)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}
