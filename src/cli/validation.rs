//! Input validation for CLI arguments using stillwater for error accumulation
//!
//! Each validator collects every problem before failing, so one run reports
//! all of them.

use crate::error::{DrillError, ErrorCode};
use std::ops::RangeInclusive;
use stillwater::Validation;

/// Widest FizzBuzz range accepted from the command line
pub const MAX_FIZZBUZZ_SPAN: i128 = 1_000_000;

/// CLI validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum CliValidationError {
    StartAfterEnd { start: i64, end: i64 },
    RangeTooLarge { span: i128 },
    SeatsZero,
    GearOutOfRange { gear: u8, top_gear: u8 },
}

impl std::fmt::Display for CliValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartAfterEnd { start, end } => {
                write!(f, "Start {} is after end {}", start, end)
            }
            Self::RangeTooLarge { span } => write!(
                f,
                "Range of {} numbers is too large (max: {})",
                span, MAX_FIZZBUZZ_SPAN
            ),
            Self::SeatsZero => write!(f, "Seats must be greater than 0"),
            Self::GearOutOfRange { gear, top_gear } => {
                write!(f, "Gear {} is outside 1..={}", gear, top_gear)
            }
        }
    }
}

impl std::error::Error for CliValidationError {}

fn bulleted(errors: &[CliValidationError]) -> String {
    format!(
        "\n{}",
        errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Validate a FizzBuzz range, returning it when usable
pub fn validate_fizzbuzz_range(start: i64, end: i64) -> Result<RangeInclusive<i64>, DrillError> {
    validate_fizzbuzz_range_internal(start, end)
        .into_result()
        .map_err(|errors| {
            DrillError::validation_with_code(
                ErrorCode::VALIDATION_RANGE,
                bulleted(&errors),
                Some("fizzbuzz range".to_string()),
            )
        })
}

fn validate_fizzbuzz_range_internal(
    start: i64,
    end: i64,
) -> Validation<RangeInclusive<i64>, Vec<CliValidationError>> {
    let mut errors = Vec::new();

    if start > end {
        errors.push(CliValidationError::StartAfterEnd { start, end });
    }

    let span = i128::from(end) - i128::from(start) + 1;
    if span > MAX_FIZZBUZZ_SPAN {
        errors.push(CliValidationError::RangeTooLarge { span });
    }

    if errors.is_empty() {
        Validation::success(start..=end)
    } else {
        Validation::failure(errors)
    }
}

/// Validate the car settings for the gearbox command
pub fn validate_gearbox(seats: u32, gear: u8, top_gear: u8) -> Result<(), DrillError> {
    match validate_gearbox_internal(seats, gear, top_gear).into_result() {
        Ok(_) => Ok(()),
        Err(errors) => Err(DrillError::validation_with_code(
            ErrorCode::VALIDATION_GEARBOX,
            bulleted(&errors),
            Some("gearbox settings".to_string()),
        )),
    }
}

fn validate_gearbox_internal(
    seats: u32,
    gear: u8,
    top_gear: u8,
) -> Validation<u8, Vec<CliValidationError>> {
    let mut errors = Vec::new();

    if seats == 0 {
        errors.push(CliValidationError::SeatsZero);
    }

    if gear == 0 || gear > top_gear {
        errors.push(CliValidationError::GearOutOfRange { gear, top_gear });
    }

    if errors.is_empty() {
        Validation::success(gear)
    } else {
        Validation::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fizzbuzz_range() {
        assert_eq!(validate_fizzbuzz_range(1, 100).unwrap(), 1..=100);
        assert_eq!(validate_fizzbuzz_range(5, 5).unwrap(), 5..=5);
        assert!(validate_fizzbuzz_range(-10, 10).is_ok());
    }

    #[test]
    fn test_start_after_end() {
        assert_eq!(
            validate_fizzbuzz_range_internal(10, 1).into_result(),
            Err(vec![CliValidationError::StartAfterEnd { start: 10, end: 1 }])
        );
        let err = validate_fizzbuzz_range(10, 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_RANGE);
        assert_eq!(err.exit_code(), 8);
    }

    #[test]
    fn test_range_too_large_does_not_overflow() {
        let errors = validate_fizzbuzz_range_internal(i64::MIN, i64::MAX)
            .into_result()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CliValidationError::RangeTooLarge { .. }));
    }

    #[test]
    fn test_range_just_over_the_limit_lists_the_span() {
        let message = validate_fizzbuzz_range(1, 1_000_001).unwrap_err().to_string();
        assert!(message.contains("Range of 1000001 numbers is too large"));
        assert!(validate_fizzbuzz_range(1, 1_000_000).is_ok());
    }

    #[test]
    fn test_gearbox_accumulates_errors() {
        assert_eq!(
            validate_gearbox_internal(0, 12, 10).into_result(),
            Err(vec![
                CliValidationError::SeatsZero,
                CliValidationError::GearOutOfRange {
                    gear: 12,
                    top_gear: 10
                },
            ])
        );

        let message = validate_gearbox(0, 12, 10).unwrap_err().to_string();
        assert!(message.contains("Seats must be greater than 0"));
        assert!(message.contains("Gear 12 is outside 1..=10"));
    }

    #[test]
    fn test_gearbox_valid() {
        assert!(validate_gearbox(3, 3, 10).is_ok());
        assert!(validate_gearbox(1, 10, 10).is_ok());
        assert_eq!(validate_gearbox_internal(1, 10, 10).into_result(), Ok(10));
    }
}
