//! Abjad letter values
//!
//! The traditional Abjad system assigns an integer weight to each Arabic
//! letter. [`sum`] accumulates those weights over a string, optionally
//! skipping silent letters; [`name_frequency`] turns a name's total into a
//! frequency via the base-frequency formula `(abjad × base) / 6`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::base_frequency;

/// Abjad letter values. Alif and ya orthographic variants share a value.
const ABJAD_VALUES: &[(char, u32)] = &[
    // Alif variations
    ('ا', 1),
    ('أ', 1),
    ('إ', 1),
    ('آ', 1),
    // Letters 2-10
    ('ب', 2),
    ('ج', 3),
    ('د', 4),
    ('ه', 5),
    ('و', 6),
    ('ز', 7),
    ('ح', 8),
    ('ط', 9),
    // Ya variations
    ('ي', 10),
    ('ى', 10),
    // Tens
    ('ك', 20),
    ('ل', 30),
    ('م', 40),
    ('ن', 50),
    ('س', 60),
    ('ع', 70),
    ('ف', 80),
    ('ص', 90),
    // Hundreds
    ('ق', 100),
    ('ر', 200),
    ('ش', 300),
    ('ت', 400),
    ('ث', 500),
    ('خ', 600),
    ('ذ', 700),
    ('ض', 800),
    ('ظ', 900),
    ('غ', 1000),
];

/// Abjad value of a single letter, or `None` for characters outside the table
pub fn value_of(letter: char) -> Option<u32> {
    ABJAD_VALUES
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, v)| *v)
}

/// Sum the Abjad values of `text`.
///
/// Characters listed in `excluded` are skipped (silent letters); characters
/// absent from the table contribute zero. Pure and deterministic.
pub fn sum(text: &str, excluded: &[char]) -> u64 {
    text.chars()
        .filter(|c| !excluded.contains(c))
        .filter_map(value_of)
        .map(u64::from)
        .sum()
}

/// Derived frequency for a name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameFrequency {
    pub name: String,
    pub abjad_value: u64,
    pub frequency_hz: f64,
    pub base_frequency_hz: f64,
    pub formula: String,
}

/// Compute the Abjad value of `name` and its derived frequency.
///
/// Frequency formula: `(abjad × base_frequency) / 6`, evaluated in decimal
/// and rounded to two places.
pub fn name_frequency(name: &str, excluded: &[char]) -> NameFrequency {
    let abjad = sum(name, excluded);
    let base = base_frequency();
    let frequency = (Decimal::from(abjad) * base / Decimal::from(6)).round_dp(2);
    let frequency_hz = frequency.to_f64().unwrap_or(0.0);
    let base_hz = base.to_f64().unwrap_or(0.0);

    NameFrequency {
        name: name.to_string(),
        abjad_value: abjad,
        frequency_hz,
        base_frequency_hz: base_hz,
        formula: format!("({} x {:.4}) / 6 = {:.2} Hz", abjad, base_hz, frequency_hz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('ا', Some(1); "alif")]
    #[test_case('ب', Some(2); "ba")]
    #[test_case('ي', Some(10); "ya")]
    #[test_case('ى', Some(10); "ya variant")]
    #[test_case('غ', Some(1000); "ghayn")]
    #[test_case('x', None; "latin letter absent")]
    #[test_case(' ', None; "space absent")]
    fn test_value_of(letter: char, expected: Option<u32>) {
        assert_eq!(value_of(letter), expected);
    }

    #[test]
    fn test_sum_basir() {
        // ب=2 ص=90 ي=10 ر=200
        assert_eq!(sum("بصير", &[]), 302);
        // With the definite article (ا=1 ل=30)
        assert_eq!(sum("البصير", &[]), 333);
        // Excluding the article's letters recovers the bare name
        assert_eq!(sum("البصير", &['ا', 'ل']), 302);
    }

    #[test]
    fn test_sum_unknown_chars_contribute_zero() {
        assert_eq!(sum("ابج xyz!", &[]), 6);
        assert_eq!(sum("", &[]), 0);
        assert_eq!(sum("hello", &[]), 0);
    }

    #[test]
    fn test_sum_with_exclusions() {
        let full = sum("البصير", &[]);
        let without_alif = sum("البصير", &['ا']);
        assert_eq!(full - without_alif, 1);
    }

    #[test]
    fn test_name_frequency_basir() {
        let result = name_frequency("بصير", &[]);
        assert_eq!(result.abjad_value, 302);
        // 302 * 90.107594 / 6 = 4535.4155 -> 4535.42
        assert!((result.frequency_hz - 4535.42).abs() < 0.005);
        assert!(result.formula.contains("302"));
    }

    #[test]
    fn test_name_frequency_empty_name() {
        let result = name_frequency("", &[]);
        assert_eq!(result.abjad_value, 0);
        assert_eq!(result.frequency_hz, 0.0);
    }
}
