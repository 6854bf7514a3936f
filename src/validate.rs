//! Input validation.
//!
//! Every solve request passes through here before any search work. The
//! checks mirror the transport contract: both combinations present, neither
//! empty, equal lengths, every digit on the wheel, and a wheel count the
//! packed state encoding can hold.

use crate::combination::{Combination, MAX_WHEELS, WHEEL_MODULUS};
use crate::error::ValidationError;

/// Check a pair of raw digit sequences and convert them into combinations.
pub fn validate(
    from: Option<&[i64]>,
    to: Option<&[i64]>,
) -> Result<(Combination, Combination), ValidationError> {
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(ValidationError::Missing),
    };

    if from.is_empty() || to.is_empty() {
        return Err(ValidationError::Empty);
    }
    if from.len() != to.len() {
        return Err(ValidationError::LengthMismatch {
            from: from.len(),
            to: to.len(),
        });
    }
    if from.len() > MAX_WHEELS {
        return Err(ValidationError::TooManyWheels { count: from.len() });
    }

    Ok((to_combination(from)?, to_combination(to)?))
}

fn to_combination(raw: &[i64]) -> Result<Combination, ValidationError> {
    for (index, &value) in raw.iter().enumerate() {
        if !(0..i64::from(WHEEL_MODULUS)).contains(&value) {
            return Err(ValidationError::PositionOutOfRange { index, value });
        }
    }
    Ok(Combination::new(raw.iter().map(|&value| value as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_input() {
        let (from, to) = validate(Some(&[0, 0]), Some(&[3, 0])).unwrap();
        assert_eq!(from.digits(), &[0, 0]);
        assert_eq!(to.digits(), &[3, 0]);
    }

    #[test]
    fn test_rejects_missing_input() {
        assert_eq!(validate(None, Some(&[1])), Err(ValidationError::Missing));
        assert_eq!(validate(Some(&[1]), None), Err(ValidationError::Missing));
        assert_eq!(validate(None, None), Err(ValidationError::Missing));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(validate(Some(&[]), Some(&[])), Err(ValidationError::Empty));
        assert_eq!(validate(Some(&[1]), Some(&[])), Err(ValidationError::Empty));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert_eq!(
            validate(Some(&[1, 2]), Some(&[1])),
            Err(ValidationError::LengthMismatch { from: 2, to: 1 })
        );
    }

    #[test]
    fn test_rejects_out_of_range_digits() {
        assert_eq!(
            validate(Some(&[0, 10]), Some(&[0, 0])),
            Err(ValidationError::PositionOutOfRange { index: 1, value: 10 })
        );
        assert_eq!(
            validate(Some(&[0]), Some(&[-1])),
            Err(ValidationError::PositionOutOfRange { index: 0, value: -1 })
        );
    }

    #[test]
    fn test_rejects_oversized_combinations() {
        let long = vec![0i64; MAX_WHEELS + 1];
        assert_eq!(
            validate(Some(&long), Some(&long)),
            Err(ValidationError::TooManyWheels {
                count: MAX_WHEELS + 1
            })
        );
    }
}
