//! Lovelace→ADA conversion and safe numeric parsing.
//!
//! The backend reports monetary amounts as integer lovelace strings and
//! display consumers want ADA. Conversion must tolerate absent and
//! malformed input: the dashboard renders a zero, it does not crash.

/// The chain's fixed subunit-to-unit ratio: 1 ADA = 1,000,000 lovelace.
pub const LOVELACE_PER_ADA: f64 = 1_000_000.0;

/// Convert an optional lovelace string to its ADA display value.
///
/// Returns `0.0` for an absent, empty, or unparseable amount and for
/// anything that parses to a non-finite number. The result is always
/// finite and this never panics.
pub fn lovelace_to_ada(lovelace: Option<&str>) -> f64 {
    let raw = match lovelace {
        Some(s) if !s.is_empty() => s,
        _ => return 0.0,
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v / LOVELACE_PER_ADA,
        _ => 0.0,
    }
}

/// Clamp an optional numeric field to a finite value, defaulting to `0.0`.
pub fn parse_numeric(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Default an optional count to `0`.
pub fn parse_count(value: Option<u64>) -> u64 {
    value.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_one_million() {
        let ada = lovelace_to_ada(Some("123456789"));
        assert!((ada - 123.456789).abs() < 1e-9);
    }

    #[test]
    fn absent_and_empty_amounts_are_zero() {
        assert_eq!(lovelace_to_ada(None), 0.0);
        assert_eq!(lovelace_to_ada(Some("")), 0.0);
    }

    #[test]
    fn garbage_amounts_are_zero() {
        assert_eq!(lovelace_to_ada(Some("not-a-number")), 0.0);
        assert_eq!(lovelace_to_ada(Some("12,000")), 0.0);
    }

    #[test]
    fn non_finite_amounts_are_zero() {
        // f64 parsing accepts these spellings; the dashboard must not.
        assert_eq!(lovelace_to_ada(Some("inf")), 0.0);
        assert_eq!(lovelace_to_ada(Some("NaN")), 0.0);
    }

    #[test]
    fn parse_numeric_defaults_to_zero() {
        assert_eq!(parse_numeric(None), 0.0);
        assert_eq!(parse_numeric(Some(f64::NAN)), 0.0);
        assert_eq!(parse_numeric(Some(f64::INFINITY)), 0.0);
        assert_eq!(parse_numeric(Some(42.5)), 42.5);
    }

    #[test]
    fn parse_count_defaults_to_zero() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some(7)), 7);
    }
}
