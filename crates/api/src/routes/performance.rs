//! Route definitions for performance records and reporting.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::performance;
use crate::state::AppState;

/// Performance routes mounted at `/performance`.
///
/// ```text
/// POST /marks/{studentId}       -> submit_marks
/// POST /attendance/{studentId}  -> submit_attendance
/// GET  /summary/{studentId}     -> performance_summary
/// GET  /low-attendance          -> list_low_attendance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/marks/{student_id}", post(performance::submit_marks))
        .route(
            "/attendance/{student_id}",
            post(performance::submit_attendance),
        )
        .route("/summary/{student_id}", get(performance::performance_summary))
        .route("/low-attendance", get(performance::list_low_attendance))
}
