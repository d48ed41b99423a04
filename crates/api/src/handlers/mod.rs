pub mod performance;
pub mod students;
