//! Repository for the `students` table.

use sqlx::PgPool;
use studytrack_core::student::StudentFields;
use studytrack_core::types::DbId;

use crate::models::student::Student;

/// Column list for `students` queries.
const STUDENT_COLUMNS: &str = "id, name, roll_number, class_name, section, created_at";

/// Provides CRUD operations for student identity records.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student and return the created row.
    ///
    /// The caller is expected to have normalized the fields and checked
    /// the roll number first; the unique constraint
    /// `uq_students_roll_number` is the backstop against races.
    pub async fn insert(pool: &PgPool, fields: &StudentFields) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, roll_number, class_name, section) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {STUDENT_COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&fields.name)
            .bind(&fields.roll_number)
            .bind(&fields.class_name)
            .bind(&fields.section)
            .fetch_one(pool)
            .await
    }

    /// List all students, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query =
            format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Find a student by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by its roll number (exact match).
    pub async fn find_by_roll_number(
        pool: &PgPool,
        roll_number: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE roll_number = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(roll_number)
            .fetch_optional(pool)
            .await
    }
}
