//! Mathematical utility functions for statistical analysis
//!
//! This module provides standardised percentage and rounding utilities
//! with proper zero-division handling for use across the analysis module.

/// Calculate percentage safely for f64 values, returning 0.0 if the total
/// is zero or negative.
///
/// # Arguments
/// * `part` - The numerator (portion of the total)
/// * `total` - The denominator (total value)
///
/// # Returns
/// Percentage as a float, or 0.0 when the total carries no magnitude.
///
/// # Examples
/// ```
/// use heat_load_analyser::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50.0, 100.0), 50.0);
/// assert_eq!(safe_percentage(1.0, 4.0), 25.0);
/// assert_eq!(safe_percentage(0.0, 100.0), 0.0);
/// assert_eq!(safe_percentage(50.0, 0.0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        (part / total) * 100.0
    }
}

/// Round to two decimal places, the precision the intensity figures use.
///
/// # Examples
/// ```
/// use heat_load_analyser::utils::math::round2;
///
/// assert_eq!(round2(1.006), 1.01);
/// assert_eq!(round2(33.3333), 33.33);
/// assert_eq!(round2(-0.125), -0.13);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_percentage_normal() {
        assert_eq!(safe_percentage(50.0, 100.0), 50.0);
        assert_eq!(safe_percentage(25.0, 100.0), 25.0);
        assert_eq!(safe_percentage(3.0, 4.0), 75.0);
    }

    #[test]
    fn test_safe_percentage_zero_total() {
        assert_eq!(safe_percentage(50.0, 0.0), 0.0);
        assert_eq!(safe_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_safe_percentage_negative_total() {
        // A negative grand total means the series is all anomalies; there is
        // no meaningful normalisation base.
        assert_eq!(safe_percentage(10.0, -5.0), 0.0);
    }

    #[test]
    fn test_safe_percentage_full() {
        assert_eq!(safe_percentage(100.0, 100.0), 100.0);
        assert_eq!(safe_percentage(5000.0, 5000.0), 100.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }
}
