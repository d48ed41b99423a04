//! HTTP-level integration tests for the student registry endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_student_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/students",
        serde_json::json!({
            "name": "Asha Rao",
            "rollNumber": "R-101",
            "class": "10th",
            "section": "a",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Asha Rao");
    assert_eq!(json["data"]["rollNumber"], "R-101");
    assert_eq!(json["data"]["class"], "10th");
    // Section is normalized to uppercase.
    assert_eq!(json["data"]["section"], "A");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_student_with_missing_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/students",
        serde_json::json!({
            "name": "No Roll",
            "class": "10th",
            "section": "A",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("required fields"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_roll_number_returns_400_and_creates_no_second_record(pool: PgPool) {
    common::create_student(&pool, "R-200").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/students",
        serde_json::json!({
            "name": "Second Student",
            "rollNumber": "R-200",
            "class": "12th",
            "section": "B",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("already exists"));

    // Only the first record survives.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/students").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_students_returns_newest_first(pool: PgPool) {
    common::create_student(&pool, "R-1").await;
    common::create_student(&pool, "R-2").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/students").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["rollNumber"], "R-2");
    assert_eq!(json["data"][1]["rollNumber"], "R-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_student_by_id(pool: PgPool) {
    let id = common::create_student(&pool, "R-300").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/students/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rollNumber"], "R-300");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/students/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Student not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_student_by_roll_number(pool: PgPool) {
    common::create_student(&pool, "R-400").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/students/roll/R-400").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rollNumber"], "R-400");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/students/roll/NOPE").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
