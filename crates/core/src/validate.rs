//! Field validation helpers.
//!
//! Shape/range checks applied at entity constructors, before anything reaches
//! business logic or storage. All helpers are side-effect free and name the
//! offending field and constraint in the error.

use crate::error::{DomainError, DomainResult};

/// Require `value` (after trimming) to have a length in `min..=max` chars.
///
/// Returns the trimmed value on success. Bounds are inclusive.
pub fn length_in(field: &str, value: &str, min: usize, max: usize) -> DomainResult<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(DomainError::validation(format!(
            "{field} must be between {min} and {max} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Require `value` to lie in `min..=max`.
pub fn range_f64(field: &str, value: f64, min: f64, max: f64) -> DomainResult<f64> {
    if !value.is_finite() || value < min || value > max {
        return Err(DomainError::validation(format!(
            "{field} must be between {min} and {max} (got {value})"
        )));
    }
    Ok(value)
}

/// Require `value` to lie in `min..=max`.
pub fn range_u32(field: &str, value: u32, min: u32, max: u32) -> DomainResult<u32> {
    if value < min || value > max {
        return Err(DomainError::validation(format!(
            "{field} must be between {min} and {max} (got {value})"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(length_in("name", "1234", 5, 50).is_err());
        assert_eq!(length_in("name", "12345", 5, 50).unwrap(), "12345");
        assert_eq!(length_in("name", &"x".repeat(50), 5, 50).unwrap().len(), 50);
        assert!(length_in("name", &"x".repeat(51), 5, 50).is_err());
    }

    #[test]
    fn length_counts_trimmed_chars() {
        // Padding must not rescue a too-short value.
        assert!(length_in("name", "  abcd  ", 5, 50).is_err());
        assert_eq!(length_in("name", "  abcde  ", 5, 50).unwrap(), "abcde");
    }

    #[test]
    fn f64_range_rejects_non_finite() {
        assert!(range_f64("dailyRentalRate", f64::NAN, 0.0, 300.0).is_err());
        assert!(range_f64("dailyRentalRate", f64::INFINITY, 0.0, 300.0).is_err());
        assert!(range_f64("dailyRentalRate", -0.5, 0.0, 300.0).is_err());
        assert_eq!(range_f64("dailyRentalRate", 300.0, 0.0, 300.0).unwrap(), 300.0);
    }

    #[test]
    fn u32_range_bounds_are_inclusive() {
        assert_eq!(range_u32("numberInStock", 0, 0, 500).unwrap(), 0);
        assert_eq!(range_u32("numberInStock", 500, 0, 500).unwrap(), 500);
        assert!(range_u32("numberInStock", 501, 0, 500).is_err());
    }

    #[test]
    fn errors_name_the_field() {
        let err = length_in("phone", "123", 5, 50).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.starts_with("phone")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
