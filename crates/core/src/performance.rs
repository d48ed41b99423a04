//! Marks aggregation and performance classification.
//!
//! Pure logic, no database access. The caller is responsible for fetching
//! the stored record and passing the marks map in.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

/// Subject name to mark mapping. Subject names are free-form and
/// case-sensitive; marks live in [0, 100].
pub type MarksMap = BTreeMap<String, f64>;

/// Attendance below this percentage counts as low when the caller does
/// not supply an explicit threshold.
pub const DEFAULT_ATTENDANCE_THRESHOLD: f64 = 75.0;

/// Four-band classification derived from average marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceStatus {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceStatus::Excellent => "Excellent",
            PerformanceStatus::Good => "Good",
            PerformanceStatus::Average => "Average",
            PerformanceStatus::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arithmetic mean of all mark values rounded to 2 decimal places, or 0
/// for an empty map.
pub fn average_marks(marks: &MarksMap) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let sum: f64 = marks.values().sum();
    let average = sum / marks.len() as f64;
    // Round half-up on the value scaled by 100.
    (average * 100.0).round() / 100.0
}

/// Classify an average into a status band. Lower bounds are inclusive,
/// first match wins.
pub fn classify_performance(average: f64) -> PerformanceStatus {
    if average >= 90.0 {
        PerformanceStatus::Excellent
    } else if average >= 75.0 {
        PerformanceStatus::Good
    } else if average >= 60.0 {
        PerformanceStatus::Average
    } else {
        PerformanceStatus::Poor
    }
}

/// Whether attendance is strictly below the threshold. A value exactly
/// at the threshold is not low.
pub fn is_low_attendance(attendance: f64, threshold: f64) -> bool {
    attendance < threshold
}

/// Validate a marks submission. Every value must be a number in
/// [0, 100]; a single bad subject rejects the whole payload.
pub fn validate_marks(marks: &MarksMap) -> Result<(), CoreError> {
    for (subject, mark) in marks {
        if !mark.is_finite() || *mark < 0.0 || *mark > 100.0 {
            return Err(CoreError::Validation(format!(
                "Invalid marks for {subject}. Marks must be a number between 0 and 100."
            )));
        }
    }
    Ok(())
}

/// Validate an attendance percentage submission.
pub fn validate_attendance(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CoreError::Validation(
            "Attendance percentage must be a number between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

/// Validate a low-attendance query threshold.
pub fn validate_threshold(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CoreError::Validation(
            "Threshold must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(pairs: &[(&str, f64)]) -> MarksMap {
        pairs
            .iter()
            .map(|(subject, mark)| (subject.to_string(), *mark))
            .collect()
    }

    #[test]
    fn average_of_empty_map_is_zero() {
        assert_eq!(average_marks(&MarksMap::new()), 0.0);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        // 85 + 90 + 75 = 250, mean 83.333...
        let m = marks(&[("math", 85.0), ("science", 90.0), ("english", 75.0)]);
        assert_eq!(average_marks(&m), 83.33);
    }

    #[test]
    fn average_of_four_subjects() {
        let m = marks(&[
            ("math", 95.0),
            ("science", 98.0),
            ("english", 92.0),
            ("history", 94.0),
        ]);
        assert_eq!(average_marks(&m), 94.75);
    }

    #[test]
    fn average_of_single_subject_is_the_mark() {
        let m = marks(&[("math", 80.0)]);
        assert_eq!(average_marks(&m), 80.0);
    }

    #[test]
    fn classify_band_boundaries() {
        assert_eq!(classify_performance(90.0), PerformanceStatus::Excellent);
        assert_eq!(classify_performance(89.99), PerformanceStatus::Good);
        assert_eq!(classify_performance(75.0), PerformanceStatus::Good);
        assert_eq!(classify_performance(74.99), PerformanceStatus::Average);
        assert_eq!(classify_performance(60.0), PerformanceStatus::Average);
        assert_eq!(classify_performance(59.99), PerformanceStatus::Poor);
        assert_eq!(classify_performance(0.0), PerformanceStatus::Poor);
        assert_eq!(classify_performance(100.0), PerformanceStatus::Excellent);
    }

    #[test]
    fn status_text_round_trips_through_display() {
        assert_eq!(PerformanceStatus::Excellent.to_string(), "Excellent");
        assert_eq!(PerformanceStatus::Poor.as_str(), "Poor");
    }

    #[test]
    fn attendance_at_threshold_is_not_low() {
        assert!(!is_low_attendance(75.0, 75.0));
        assert!(is_low_attendance(74.99, 75.0));
        assert!(!is_low_attendance(80.0, DEFAULT_ATTENDANCE_THRESHOLD));
    }

    #[test]
    fn marks_validation_names_the_offending_subject() {
        let m = marks(&[("math", 90.0), ("science", 101.0)]);
        let err = validate_marks(&m).unwrap_err();
        assert!(err.to_string().contains("science"));
    }

    #[test]
    fn marks_validation_rejects_negative_values() {
        let m = marks(&[("history", -1.0)]);
        assert!(validate_marks(&m).is_err());
    }

    #[test]
    fn marks_validation_accepts_boundary_values() {
        let m = marks(&[("low", 0.0), ("high", 100.0)]);
        assert!(validate_marks(&m).is_ok());
    }

    #[test]
    fn attendance_validation_rejects_out_of_range() {
        assert!(validate_attendance(0.0).is_ok());
        assert!(validate_attendance(100.0).is_ok());
        assert!(validate_attendance(-0.01).is_err());
        assert!(validate_attendance(100.01).is_err());
    }

    #[test]
    fn threshold_validation_rejects_out_of_range() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(100.0).is_ok());
        assert!(validate_threshold(-1.0).is_err());
        assert!(validate_threshold(101.0).is_err());
    }
}
