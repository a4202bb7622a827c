/// Splits `numerator / denominator` into a quotient truncated toward zero and
/// the truncating remainder.
///
/// The remainder has the sign of the numerator and a magnitude below
/// `|denominator|`, so `quotient * denominator + remainder == numerator`.
/// This is not the floored (Euclidean) division: `divmod(-7.0, 2.0)` is
/// `(-3.0, -1.0)`, not `(-4.0, 1.0)`.
///
/// # Example
/// ```
/// use qth_locator::divmod;
///
/// assert_eq!(divmod(179.8754, 20.0).0, 8.0);
/// assert_eq!(divmod(-7.0, 2.0), (-3.0, -1.0));
/// ```
pub fn divmod(numerator: f64, denominator: f64) -> (f64, f64) {
    let quotient = (numerator / denominator).trunc();
    let remainder = numerator % denominator;

    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(divmod(7.0, 2.0), (3.0, 1.0));
        assert_eq!(divmod(180.0, 20.0), (9.0, 0.0));
        assert_eq!(divmod(0.0, 1.0), (0.0, 0.0));
    }

    #[test]
    fn test_negative_truncates_toward_zero() {
        assert_eq!(divmod(-7.0, 2.0), (-3.0, -1.0));
        assert_eq!(divmod(7.0, -2.0), (-3.0, 1.0));
        assert_eq!(divmod(-0.5, 1.0), (-0.0, -0.5));
    }

    #[test]
    fn test_fractional_parts() {
        let (q, r) = divmod(9.9377, 1.0);
        assert_eq!(q, 9.0);
        assert!((r - 0.9377).abs() < 1e-12);

        let (q, r) = divmod(141.5007, 10.0);
        assert_eq!(q, 14.0);
        assert!((r - 1.5007).abs() < 1e-12);
    }

    #[test]
    fn test_recombines() {
        for &(n, d) in &[(359.99, 20.0), (-33.3, 10.0), (12.75, 1.0), (-12.75, 1.0)] {
            let (q, r) = divmod(n, d);
            assert!((q * d + r - n).abs() < 1e-9);
            assert!(r.abs() < d.abs());
            assert!(r == 0.0 || r.signum() == n.signum());
        }
    }
}
