pub mod health;
pub mod performance;
pub mod students;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                              create (POST), list (GET)
/// /students/{id}                         get by id
/// /students/roll/{rollNumber}            get by roll number
///
/// /performance/marks/{studentId}         submit marks (POST)
/// /performance/attendance/{studentId}    submit attendance (POST)
/// /performance/summary/{studentId}       combined summary (GET)
/// /performance/low-attendance            low-attendance listing (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/performance", performance::router())
}

/// Fallback for unmatched routes: generic 404 envelope.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
        })),
    )
}
