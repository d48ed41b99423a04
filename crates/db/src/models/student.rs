//! Student identity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studytrack_core::types::{DbId, Timestamp};

/// A row from the `students` table.
///
/// Identity records are immutable after creation; there is no update DTO.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub roll_number: String,
    /// Class/grade label (e.g. "10th"). `class` is reserved in Rust, so
    /// the column and field are `class_name` with a serde rename.
    #[serde(rename = "class")]
    pub class_name: String,
    pub section: String,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/students`.
///
/// Fields default to empty strings so a missing field surfaces as a
/// validation error with the full field list, not a deserialize failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub section: String,
}
