//! Student identity field validation and normalization.

use crate::error::CoreError;

/// Normalized student identity fields, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub roll_number: String,
    pub class_name: String,
    pub section: String,
}

/// Trim every field, uppercase the section, and reject blank input.
///
/// All four fields are required; a missing or whitespace-only value
/// fails the whole request.
pub fn normalize_student(
    name: &str,
    roll_number: &str,
    class_name: &str,
    section: &str,
) -> Result<StudentFields, CoreError> {
    let name = name.trim();
    let roll_number = roll_number.trim();
    let class_name = class_name.trim();
    let section = section.trim();

    if name.is_empty() || roll_number.is_empty() || class_name.is_empty() || section.is_empty() {
        return Err(CoreError::Validation(
            "Please provide all required fields: name, rollNumber, class, section".to_string(),
        ));
    }

    Ok(StudentFields {
        name: name.to_string(),
        roll_number: roll_number.to_string(),
        class_name: class_name.to_string(),
        section: section.to_uppercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        let fields = normalize_student("  Asha Rao ", " R-101 ", "10th", " a ").unwrap();
        assert_eq!(fields.name, "Asha Rao");
        assert_eq!(fields.roll_number, "R-101");
        assert_eq!(fields.class_name, "10th");
        assert_eq!(fields.section, "A");
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(normalize_student("", "R-101", "10th", "A").is_err());
        assert!(normalize_student("Asha", "", "10th", "A").is_err());
        assert!(normalize_student("Asha", "R-101", "", "A").is_err());
        assert!(normalize_student("Asha", "R-101", "10th", "   ").is_err());
    }
}
