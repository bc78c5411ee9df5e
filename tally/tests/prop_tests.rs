use proptest::prelude::*;

use govscope_tally::{
    derive_abstain_value, derive_cc_abstain_count, lovelace_to_ada, normalize_action,
    LOVELACE_PER_ADA,
};
use govscope_types::{RawGovAction, RawRoleTally};

fn arb_raw_tally() -> impl Strategy<Value = RawRoleTally> {
    (
        prop::option::of(0.0..150.0f64),
        prop::option::of(0.0..150.0f64),
        prop::option::of(0.0..150.0f64),
        prop::option::of("[0-9]{1,12}"),
        prop::option::of("[0-9]{1,12}"),
        prop::option::of("[0-9]{1,12}"),
        prop::option::of(0u64..100),
        prop::option::of(0u64..100),
        prop::option::of(0u64..100),
    )
        .prop_map(
            |(
                yes_percent,
                no_percent,
                abstain_percent,
                yes_votes,
                no_votes,
                abstain_votes,
                yes_count,
                no_count,
                abstain_count,
            )| RawRoleTally {
                yes_percent,
                no_percent,
                abstain_percent,
                yes_votes,
                no_votes,
                abstain_votes,
                yes_count,
                no_count,
                abstain_count,
            },
        )
}

proptest! {
    /// Conversion matches the fixed subunit ratio for any integer amount.
    #[test]
    fn conversion_matches_the_ratio(lovelace in 0u64..1_000_000_000_000_000) {
        let ada = lovelace_to_ada(Some(&lovelace.to_string()));
        let expected = lovelace as f64 / LOVELACE_PER_ADA;
        prop_assert!((ada - expected).abs() <= expected.abs() * 1e-12);
    }

    /// Conversion is total over arbitrary input strings.
    #[test]
    fn conversion_never_panics_and_is_finite(s in ".{0,24}") {
        let ada = lovelace_to_ada(Some(&s));
        prop_assert!(ada.is_finite());
    }

    /// The derived abstain value is never negative and never NaN.
    #[test]
    fn abstain_value_is_non_negative(
        yes_value in -1e12..1e12f64,
        yes_percent in -200.0..200.0f64,
        no_value in -1e12..1e12f64,
        no_percent in -200.0..200.0f64,
        abstain_percent in prop::option::of(-200.0..200.0f64),
    ) {
        let abstain =
            derive_abstain_value(yes_value, yes_percent, no_value, no_percent, abstain_percent);
        prop_assert!(abstain.is_finite());
        prop_assert!(abstain >= 0.0);
    }

    /// With zero percentage mass there is no basis to infer a total.
    #[test]
    fn zero_percentage_mass_always_yields_zero(
        yes_value in 0.0..1e12f64,
        no_value in 0.0..1e12f64,
        abstain_percent in prop::option::of(0.0..100.0f64),
    ) {
        prop_assert_eq!(
            derive_abstain_value(yes_value, 0.0, no_value, 0.0, abstain_percent),
            0.0
        );
    }

    /// Proportionally consistent inputs reconstruct the true abstain amount.
    #[test]
    fn consistent_inputs_reconstruct_the_abstain_amount(
        total in 1.0..1e9f64,
        yes_percent in 1.0..98.0f64,
        no_fraction in 0.01..0.99f64,
    ) {
        let no_percent = (100.0 - yes_percent - 1.0) * no_fraction;
        let abstain_percent = 100.0 - yes_percent - no_percent;
        let yes_value = total * yes_percent / 100.0;
        let no_value = total * no_percent / 100.0;
        let expected = total * abstain_percent / 100.0;

        let derived = derive_abstain_value(
            yes_value,
            yes_percent,
            no_value,
            no_percent,
            Some(abstain_percent),
        );
        prop_assert!((derived - expected).abs() <= expected.abs() * 1e-9 + 1e-9);
    }

    /// Committee abstain counts are always whole and non-negative.
    #[test]
    fn cc_abstain_count_is_total(
        yes in 0u64..1000,
        no in 0u64..1000,
        yes_percent in prop::option::of(0.0..150.0f64),
        no_percent in prop::option::of(0.0..150.0f64),
        abstain_percent in prop::option::of(0.0..150.0f64),
    ) {
        // The u64 return type already pins integrality; this pins totality.
        let _ = derive_cc_abstain_count(yes, no, yes_percent, no_percent, abstain_percent);
    }

    /// Normalization is total: every derived field is finite and the
    /// defaults hold under arbitrary field omission.
    #[test]
    fn normalization_is_total(
        drep in prop::option::of(arb_raw_tally()),
        spo in prop::option::of(arb_raw_tally()),
        cc in prop::option::of(arb_raw_tally()),
        title in prop::option::of(".{0,16}"),
        submission_epoch in prop::option::of(0u64..1000),
        expiry_epoch in prop::option::of(0u64..1000),
    ) {
        let raw = RawGovAction {
            drep,
            spo,
            cc,
            title,
            submission_epoch,
            expiry_epoch,
            ..RawGovAction::default()
        };
        let action = normalize_action(&raw);

        for ada in [
            action.drep_yes_ada,
            action.drep_no_ada,
            action.drep_abstain_ada,
            action.spo_yes_ada,
            action.spo_no_ada,
            action.spo_abstain_ada,
        ] {
            prop_assert!(ada.is_finite());
            prop_assert!(ada >= 0.0);
        }
        prop_assert!(!action.title.is_empty());
        prop_assert!(!action.constitutionality.is_empty());
    }
}
