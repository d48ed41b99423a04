//! Repository for the `performance_records` table.
//!
//! At most one record exists per student; both write paths use
//! `INSERT ... ON CONFLICT (student_id)` so lazy creation and in-place
//! update are a single statement. The marks merge itself is computed by
//! the caller from the record's current state (read-modify-write within
//! one row; concurrent submissions for the same student are
//! last-write-wins).

use sqlx::types::Json;
use sqlx::PgPool;
use studytrack_core::performance::MarksMap;
use studytrack_core::types::DbId;

use crate::models::performance::{LowAttendanceRow, PerformanceRecord};

/// Column list for `performance_records` queries.
const PERFORMANCE_COLUMNS: &str = "\
    id, student_id, marks, attendance_percentage, \
    average_marks, performance_status, last_updated";

/// Provides CRUD operations for performance records.
pub struct PerformanceRepo;

impl PerformanceRepo {
    /// Find the record belonging to a student.
    pub async fn find_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Option<PerformanceRecord>, sqlx::Error> {
        let query =
            format!("SELECT {PERFORMANCE_COLUMNS} FROM performance_records WHERE student_id = $1");
        sqlx::query_as::<_, PerformanceRecord>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }

    /// Write the fully merged marks map plus its derived fields.
    ///
    /// Creates the record with attendance 0 when the student has none
    /// yet; otherwise replaces `marks`, `average_marks`, and
    /// `performance_status` and bumps `last_updated`. Attendance is
    /// never touched on the update path.
    pub async fn upsert_marks(
        pool: &PgPool,
        student_id: DbId,
        marks: &MarksMap,
        average_marks: f64,
        performance_status: &str,
    ) -> Result<PerformanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO performance_records \
                 (student_id, marks, attendance_percentage, average_marks, performance_status, last_updated) \
             VALUES ($1, $2, 0, $3, $4, now()) \
             ON CONFLICT (student_id) DO UPDATE SET \
                 marks = EXCLUDED.marks, \
                 average_marks = EXCLUDED.average_marks, \
                 performance_status = EXCLUDED.performance_status, \
                 last_updated = now() \
             RETURNING {PERFORMANCE_COLUMNS}"
        );
        sqlx::query_as::<_, PerformanceRecord>(&query)
            .bind(student_id)
            .bind(Json(marks))
            .bind(average_marks)
            .bind(performance_status)
            .fetch_one(pool)
            .await
    }

    /// Set the attendance percentage, creating the record lazily.
    ///
    /// A record created here starts with empty marks, average 0, and
    /// status Poor. On the update path only `attendance_percentage` and
    /// `last_updated` change; marks and the derived fields stay as-is.
    pub async fn upsert_attendance(
        pool: &PgPool,
        student_id: DbId,
        attendance_percentage: f64,
    ) -> Result<PerformanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO performance_records \
                 (student_id, marks, attendance_percentage, average_marks, performance_status, last_updated) \
             VALUES ($1, '{{}}'::jsonb, $2, 0, 'Poor', now()) \
             ON CONFLICT (student_id) DO UPDATE SET \
                 attendance_percentage = EXCLUDED.attendance_percentage, \
                 last_updated = now() \
             RETURNING {PERFORMANCE_COLUMNS}"
        );
        sqlx::query_as::<_, PerformanceRecord>(&query)
            .bind(student_id)
            .bind(attendance_percentage)
            .fetch_one(pool)
            .await
    }

    /// List records with attendance strictly below the threshold, joined
    /// with the owning student's identity fields. Natural storage order;
    /// an empty result is not an error.
    pub async fn list_low_attendance(
        pool: &PgPool,
        threshold: f64,
    ) -> Result<Vec<LowAttendanceRow>, sqlx::Error> {
        sqlx::query_as::<_, LowAttendanceRow>(
            "SELECT p.student_id, s.name, s.roll_number, s.class_name, s.section, \
                    p.attendance_percentage, p.performance_status \
             FROM performance_records p \
             JOIN students s ON s.id = p.student_id \
             WHERE p.attendance_percentage < $1",
        )
        .bind(threshold)
        .fetch_all(pool)
        .await
    }
}
