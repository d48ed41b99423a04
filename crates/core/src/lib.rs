//! Pure domain logic for the student performance tracker.
//!
//! No database or HTTP concerns live here. The api and db crates call
//! into this crate for aggregation, classification, and input validation.

pub mod error;
pub mod performance;
pub mod student;
pub mod types;
