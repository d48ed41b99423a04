//! Performance record models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use studytrack_core::performance::MarksMap;
use studytrack_core::types::{DbId, Timestamp};

/// A row from the `performance_records` table.
///
/// Exactly one record exists per student (unique constraint on
/// `student_id`). `average_marks` and `performance_status` are derived
/// from `marks` and never set directly by a client.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub id: DbId,
    pub student_id: DbId,
    /// Subject-to-mark mapping stored as JSONB.
    pub marks: Json<MarksMap>,
    pub attendance_percentage: f64,
    pub average_marks: f64,
    pub performance_status: String,
    pub last_updated: Timestamp,
}

/// Query parameters for `GET /api/performance/low-attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct LowAttendanceParams {
    /// Attendance cutoff. Defaults to 75 when absent.
    pub threshold: Option<f64>,
}

/// Join row for the low-attendance listing: performance columns plus the
/// owning student's identity fields.
#[derive(Debug, Clone, FromRow)]
pub struct LowAttendanceRow {
    pub student_id: DbId,
    pub name: String,
    pub roll_number: String,
    pub class_name: String,
    pub section: String,
    pub attendance_percentage: f64,
    pub performance_status: String,
}
