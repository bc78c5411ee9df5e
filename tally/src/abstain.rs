//! Reconstruction of omitted abstain statistics.
//!
//! The backend frequently reports yes/no figures with percentages but
//! leaves the abstain side out. The policy is the same for monetary power
//! and member counts: abstain is whatever is not yes or no, taken from the
//! explicit abstain percentage when present, else from the complement of
//! yes+no.

use crate::units::parse_numeric;

/// Reconstruct an omitted abstain monetary value.
///
/// The implied total is `(yes + no) / (yes% + no%) * 100`; the abstain
/// value is that total scaled by the abstain percentage — the explicit
/// one when given, else `100 - yes% - no%`. With no yes/no percentage
/// mass there is no basis to infer a total and the result is `0.0`.
/// Never negative, never NaN.
pub fn derive_abstain_value(
    yes_value: f64,
    yes_percent: f64,
    no_value: f64,
    no_percent: f64,
    abstain_percent: Option<f64>,
) -> f64 {
    let yes_value = parse_numeric(Some(yes_value));
    let no_value = parse_numeric(Some(no_value));
    let yes_percent = parse_numeric(Some(yes_percent));
    let no_percent = parse_numeric(Some(no_percent));

    let percent_sum = yes_percent + no_percent;
    if percent_sum <= 0.0 {
        return 0.0;
    }

    let total = (yes_value + no_value) / percent_sum * 100.0;
    let abstain_percent = match abstain_percent {
        Some(p) if p.is_finite() => p,
        _ => 100.0 - percent_sum,
    };

    (total * abstain_percent / 100.0).max(0.0)
}

/// Reconstruct an omitted constitutional-committee abstain count.
///
/// Same policy as [`derive_abstain_value`] specialized to member counts;
/// counts cannot be fractional, so the result is rounded to the nearest
/// non-negative integer.
pub fn derive_cc_abstain_count(
    yes_count: u64,
    no_count: u64,
    yes_percent: Option<f64>,
    no_percent: Option<f64>,
    abstain_percent: Option<f64>,
) -> u64 {
    let derived = derive_abstain_value(
        yes_count as f64,
        parse_numeric(yes_percent),
        no_count as f64,
        parse_numeric(no_percent),
        abstain_percent,
    );
    derived.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_from_an_explicit_abstain_percentage() {
        // 600 + 300 ADA over 90% of the vote implies a 1000 ADA total.
        let abstain = derive_abstain_value(600.0, 60.0, 300.0, 30.0, Some(10.0));
        assert!((abstain - 100.0).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_the_complement_of_yes_plus_no() {
        let abstain = derive_abstain_value(600.0, 60.0, 300.0, 30.0, None);
        assert!((abstain - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_percentage_mass_yields_zero() {
        assert_eq!(derive_abstain_value(600.0, 0.0, 300.0, 0.0, Some(10.0)), 0.0);
        assert_eq!(derive_abstain_value(0.0, 0.0, 0.0, 0.0, None), 0.0);
    }

    #[test]
    fn never_negative_when_percentages_overshoot() {
        // yes% + no% > 100 makes the complement negative; floor at zero.
        let abstain = derive_abstain_value(700.0, 70.0, 400.0, 40.0, None);
        assert_eq!(abstain, 0.0);
    }

    #[test]
    fn non_finite_operands_are_treated_as_zero() {
        assert_eq!(
            derive_abstain_value(f64::NAN, f64::INFINITY, 300.0, 0.0, None),
            0.0
        );
        let abstain = derive_abstain_value(600.0, 60.0, 300.0, 30.0, Some(f64::NAN));
        // Explicit-but-garbage percentage falls back to the complement.
        assert!((abstain - 100.0).abs() < 1e-9);
    }

    #[test]
    fn cc_counts_round_to_whole_members() {
        // 5 + 3 members over 80% implies 10 members; 20% of 10 is 2.
        assert_eq!(
            derive_cc_abstain_count(5, 3, Some(50.0), Some(30.0), Some(20.0)),
            2
        );
    }

    #[test]
    fn cc_count_with_no_percentages_is_zero() {
        assert_eq!(derive_cc_abstain_count(5, 3, None, None, None), 0);
    }

    #[test]
    fn cc_count_rounds_to_nearest() {
        // 1 + 1 members over 75% implies 2.67 members; 25% of that is 0.67,
        // which rounds up to one member.
        assert_eq!(
            derive_cc_abstain_count(1, 1, Some(40.0), Some(35.0), Some(25.0)),
            1
        );
    }
}
