//! Handlers for performance records and reporting.
//!
//! Marks submissions merge per subject into the existing record (never
//! wholesale replace); the average and status are recomputed from the
//! merged map on every marks mutation. Attendance updates leave marks
//! and the derived fields untouched.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use studytrack_core::error::CoreError;
use studytrack_core::performance::{self, MarksMap, DEFAULT_ATTENDANCE_THRESHOLD};
use studytrack_core::types::{DbId, Timestamp};
use studytrack_db::models::performance::{LowAttendanceParams, LowAttendanceRow};
use studytrack_db::models::student::Student;
use studytrack_db::repositories::{PerformanceRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// Student identity block embedded in performance views.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StudentView {
    id: DbId,
    name: String,
    roll_number: String,
    #[serde(rename = "class")]
    class_name: String,
    section: String,
}

impl From<Student> for StudentView {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            roll_number: s.roll_number,
            class_name: s.class_name,
            section: s.section,
        }
    }
}

/// Performance block of the summary view.
///
/// `low_attendance` and `last_updated` are omitted entirely when no
/// record exists (`has_data == false`), matching the client contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PerformanceView {
    marks: MarksMap,
    average_marks: f64,
    attendance_percentage: f64,
    performance_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    low_attendance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<Timestamp>,
    has_data: bool,
}

/// Combined student + performance summary payload.
#[derive(Debug, Serialize)]
struct SummaryView {
    student: StudentView,
    performance: PerformanceView,
}

/// One entry of the low-attendance listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LowAttendanceView {
    student: StudentView,
    attendance_percentage: f64,
    performance_status: String,
}

impl From<LowAttendanceRow> for LowAttendanceView {
    fn from(row: LowAttendanceRow) -> Self {
        Self {
            student: StudentView {
                id: row.student_id,
                name: row.name,
                roll_number: row.roll_number,
                class_name: row.class_name,
                section: row.section,
            },
            attendance_percentage: row.attendance_percentage,
            performance_status: row.performance_status,
        }
    }
}

/// Envelope for the low-attendance listing: echoes the effective
/// threshold alongside the count and data.
#[derive(Debug, Serialize)]
struct LowAttendanceResponse {
    success: bool,
    threshold: f64,
    count: usize,
    data: Vec<LowAttendanceView>,
}

// ---------------------------------------------------------------------------
// Write endpoints
// ---------------------------------------------------------------------------

/// POST /api/performance/marks/{studentId}
///
/// Merge a marks submission into the student's record, creating it
/// lazily with attendance 0. The whole payload is rejected if any mark
/// is out of range; nothing is applied partially.
pub async fn submit_marks(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let submitted = parse_marks_payload(&body)?;

    require_student(&state, student_id).await?;

    performance::validate_marks(&submitted)?;

    // Merge into whatever the record holds right now. Concurrent
    // submissions for the same student are last-write-wins.
    let merged = match PerformanceRepo::find_by_student(&state.pool, student_id).await? {
        Some(existing) => {
            let mut marks = existing.marks.0;
            marks.extend(submitted);
            marks
        }
        None => submitted,
    };

    let average = performance::average_marks(&merged);
    let status = performance::classify_performance(average);

    let record =
        PerformanceRepo::upsert_marks(&state.pool, student_id, &merged, average, status.as_str())
            .await?;

    tracing::info!(
        student_id,
        average_marks = record.average_marks,
        status = %record.performance_status,
        "Marks updated"
    );

    Ok(Json(ApiResponse::with_message(
        "Marks updated successfully",
        record,
    )))
}

/// POST /api/performance/attendance/{studentId}
///
/// Set the attendance percentage. Creates the record lazily (empty
/// marks, average 0, status Poor); marks are never altered here.
pub async fn submit_attendance(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let attendance = parse_attendance_payload(&body)?;
    performance::validate_attendance(attendance)?;

    require_student(&state, student_id).await?;

    let record = PerformanceRepo::upsert_attendance(&state.pool, student_id, attendance).await?;

    tracing::info!(
        student_id,
        attendance = record.attendance_percentage,
        "Attendance updated"
    );

    Ok(Json(ApiResponse::with_message(
        "Attendance updated successfully",
        record,
    )))
}

// ---------------------------------------------------------------------------
// Read endpoints
// ---------------------------------------------------------------------------

/// GET /api/performance/summary/{studentId}
///
/// Combined student + performance view. Students without a record get a
/// placeholder payload with `hasData: false`.
pub async fn performance_summary(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = require_student(&state, student_id).await?;

    let record = PerformanceRepo::find_by_student(&state.pool, student_id).await?;

    let view = match record {
        Some(r) => PerformanceView {
            marks: r.marks.0,
            average_marks: r.average_marks,
            attendance_percentage: r.attendance_percentage,
            performance_status: r.performance_status,
            // The summary flag always uses the fixed default threshold,
            // independent of any threshold passed to the listing
            // endpoint. The two call sites are deliberately separate.
            low_attendance: Some(performance::is_low_attendance(
                r.attendance_percentage,
                DEFAULT_ATTENDANCE_THRESHOLD,
            )),
            last_updated: Some(r.last_updated),
            has_data: true,
        },
        None => PerformanceView {
            marks: MarksMap::new(),
            average_marks: 0.0,
            attendance_percentage: 0.0,
            performance_status: "No data available".to_string(),
            low_attendance: None,
            last_updated: None,
            has_data: false,
        },
    };

    Ok(Json(ApiResponse::new(SummaryView {
        student: found.into(),
        performance: view,
    })))
}

/// GET /api/performance/low-attendance?threshold=N
///
/// List every record with attendance strictly below the threshold
/// (default 75), joined with student identity. An empty result is a
/// 200 with `count: 0`.
pub async fn list_low_attendance(
    State(state): State<AppState>,
    Query(params): Query<LowAttendanceParams>,
) -> AppResult<impl IntoResponse> {
    let threshold = params.threshold.unwrap_or(DEFAULT_ATTENDANCE_THRESHOLD);
    performance::validate_threshold(threshold)?;

    let rows = PerformanceRepo::list_low_attendance(&state.pool, threshold).await?;
    let data: Vec<LowAttendanceView> = rows.into_iter().map(Into::into).collect();

    Ok(Json(LowAttendanceResponse {
        success: true,
        threshold,
        count: data.len(),
        data,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up the student or fail with 404.
async fn require_student(state: &AppState, student_id: DbId) -> AppResult<Student> {
    StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            key: student_id.to_string(),
        }))
}

/// Extract the `marks` object from a submission body.
///
/// Shape errors get their own message so the client can distinguish a
/// malformed body from an out-of-range mark.
fn parse_marks_payload(body: &serde_json::Value) -> Result<MarksMap, CoreError> {
    let marks = body.get("marks").and_then(|v| v.as_object()).ok_or_else(|| {
        CoreError::Validation(
            "Please provide marks as an object (e.g., {math: 85, science: 90})".to_string(),
        )
    })?;

    let mut parsed = MarksMap::new();
    for (subject, value) in marks {
        let mark = value.as_f64().ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid marks for {subject}. Marks must be a number between 0 and 100."
            ))
        })?;
        parsed.insert(subject.clone(), mark);
    }

    Ok(parsed)
}

/// Extract `attendancePercentage` from a submission body.
fn parse_attendance_payload(body: &serde_json::Value) -> Result<f64, CoreError> {
    let value = body
        .get("attendancePercentage")
        .filter(|v| !v.is_null())
        .ok_or_else(|| {
            CoreError::Validation("Please provide attendancePercentage (0-100)".to_string())
        })?;

    value.as_f64().ok_or_else(|| {
        CoreError::Validation(
            "Attendance percentage must be a number between 0 and 100".to_string(),
        )
    })
}
