//! Ratio comparator
//!
//! Divides two decimal constants and reports how closely the quotient
//! matches a reference value. All arithmetic stays in decimal; the
//! documented precision figures are not reproducible in binary floats.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{divine_divisor, reference_golden_ratio, TOTAL_SURAHS};
use crate::error::{ResonanceError, Result};

/// Result of comparing a quotient against a reference constant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioReport {
    pub quotient: Decimal,
    pub reference: Decimal,
    pub error: Decimal,
    pub precision_pct: f64,
}

/// Compare `a / b` against `reference`.
///
/// Returns `precision = (1 - |a/b - reference| / reference) × 100`.
///
/// # Errors
/// `Domain` if `b` or `reference` is zero.
pub fn compare(a: Decimal, b: Decimal, reference: Decimal) -> Result<RatioReport> {
    if b.is_zero() {
        return Err(ResonanceError::Domain {
            reason: "ratio divisor is zero".to_string(),
        });
    }
    if reference.is_zero() {
        return Err(ResonanceError::Domain {
            reason: "reference constant is zero".to_string(),
        });
    }

    let quotient = a / b;
    let error = (quotient - reference).abs();
    let precision = (Decimal::ONE - error / reference) * Decimal::from(100);

    Ok(RatioReport {
        quotient,
        reference,
        error,
        precision_pct: precision.to_f64().unwrap_or(0.0),
    })
}

/// Compare the derived golden ratio (114 / 70.44911244) against the
/// reference constant.
pub fn golden_ratio_report() -> Result<RatioReport> {
    compare(
        Decimal::from(TOTAL_SURAHS),
        divine_divisor(),
        reference_golden_ratio(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identical_constants_give_exactly_100() {
        let report = compare(dec!(3), dec!(2), dec!(1.5)).unwrap();
        assert_eq!(report.precision_pct, 100.0);
        assert!(report.error.is_zero());
    }

    #[test]
    fn test_golden_ratio_precision_exceeds_claim() {
        let report = golden_ratio_report().unwrap();
        assert!(report.precision_pct > 99.9);
        assert!(report.precision_pct < 100.0);
        // 114 / 70.44911244 = 1.6181893...
        let quotient = report.quotient.to_f64().unwrap();
        assert!((quotient - 1.6181893).abs() < 1e-6);
    }

    #[test]
    fn test_zero_divisor_is_domain_error() {
        let err = compare(dec!(1), Decimal::ZERO, dec!(1.5)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_zero_reference_is_domain_error() {
        let err = compare(dec!(1), dec!(2), Decimal::ZERO).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_precision_degrades_with_distance() {
        let close = compare(dec!(161), dec!(100), dec!(1.618034)).unwrap();
        let far = compare(dec!(150), dec!(100), dec!(1.618034)).unwrap();
        assert!(close.precision_pct > far.precision_pct);
    }
}
