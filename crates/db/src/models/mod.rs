//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the write endpoints
//!
//! Entities serialize with the camelCase field names the front end
//! expects (`rollNumber`, `attendancePercentage`, ...).

pub mod performance;
pub mod student;
