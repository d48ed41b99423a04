//! Route definitions for the student registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Student routes mounted at `/students`.
///
/// ```text
/// POST /                      -> create_student
/// GET  /                      -> list_students
/// GET  /{id}                  -> get_student_by_id
/// GET  /roll/{rollNumber}     -> get_student_by_roll_number
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(students::list_students).post(students::create_student),
        )
        .route("/{id}", get(students::get_student_by_id))
        .route("/roll/{roll_number}", get(students::get_student_by_roll_number))
}
