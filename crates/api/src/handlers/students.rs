//! Handlers for the student registry.
//!
//! Identity records are immutable: they are created once and only read
//! afterwards. Roll numbers are globally unique.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use studytrack_core::error::CoreError;
use studytrack_core::student;
use studytrack_core::types::DbId;
use studytrack_db::models::student::CreateStudent;
use studytrack_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// POST /api/students
///
/// Register a new student. Fields are trimmed, the section is stored
/// uppercase, and a duplicate roll number rejects the request.
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    let fields = student::normalize_student(
        &input.name,
        &input.roll_number,
        &input.class_name,
        &input.section,
    )?;

    if StudentRepo::find_by_roll_number(&state.pool, &fields.roll_number)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Duplicate(
            "Student with this roll number already exists".to_string(),
        )));
    }

    let created = StudentRepo::insert(&state.pool, &fields).await?;

    tracing::info!(
        student_id = created.id,
        roll_number = %created.roll_number,
        "Student created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Student created successfully",
            created,
        )),
    ))
}

/// GET /api/students
///
/// List all students, newest first.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list_all(&state.pool).await?;

    Ok(Json(ListResponse::new(students)))
}

/// GET /api/students/{id}
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            key: id.to_string(),
        }))?;

    Ok(Json(ApiResponse::new(found)))
}

/// GET /api/students/roll/{rollNumber}
pub async fn get_student_by_roll_number(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> AppResult<impl IntoResponse> {
    let found = StudentRepo::find_by_roll_number(&state.pool, &roll_number)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            key: roll_number,
        }))?;

    Ok(Json(ApiResponse::new(found)))
}
