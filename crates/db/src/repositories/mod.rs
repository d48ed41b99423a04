//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod performance_repo;
pub mod student_repo;

pub use performance_repo::PerformanceRepo;
pub use student_repo::StudentRepo;
