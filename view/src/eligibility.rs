//! Role eligibility — which voter roles participate on which action types.
//!
//! Two independent layers. The capability table maps each known action
//! type to the roles allowed to vote on it. On top of that, a short fixed
//! list of actions from the bootstrap era carries hand-written exceptions
//! that contradict the table; those take precedence and are matched by
//! substring containment against the action's composite hash.

use govscope_types::{GovActionType, VoterRole};

/// Bootstrap-era actions whose DRep statistics must not be shown.
const LEGACY_DREP_EXCLUDED: [&str; 3] = [
    "gov_action1k2jertppnnndejjcglszfqq4yzw8evzrd2nt66rr6rqzarssmqpqq05ecsn",
    "gov_action1u4vlsyflqg2g89k3g3x5wwfvg6dys6mda62qnukqd86zy2eqdw3sqgq8fw7",
    "gov_action1pvv5wmjqhwa4u85vu9f4kmrd3p0zwys98vkwkkhvlpkq5hqtdlqsqs0g9q5",
];

/// The subset of [`LEGACY_DREP_EXCLUDED`] whose SPO statistics must not
/// be shown either.
const LEGACY_SPO_EXCLUDED: [&str; 2] = [
    "gov_action1k2jertppnnndejjcglszfqq4yzw8evzrd2nt66rr6rqzarssmqpqq05ecsn",
    "gov_action1u4vlsyflqg2g89k3g3x5wwfvg6dys6mda62qnukqd86zy2eqdw3sqgq8fw7",
];

fn is_legacy(hash: &str, list: &[&str]) -> bool {
    // Equality is the degenerate case of containment.
    list.iter().any(|id| hash.contains(id))
}

fn on_any_legacy_list(hash: &str) -> bool {
    is_legacy(hash, &LEGACY_DREP_EXCLUDED) || is_legacy(hash, &LEGACY_SPO_EXCLUDED)
}

/// Whether `role` is allowed to vote on actions of `action_type`.
///
/// Free-text types the table does not know leave every role eligible:
/// hiding statistics for an unknown type would silently drop data.
pub fn can_role_vote(action_type: &GovActionType, role: VoterRole) -> bool {
    use GovActionType::{NewConstitution, NoConfidence, ParameterChange, Treasury, UpdateCommittee};
    match role {
        VoterRole::DRep => true,
        VoterRole::Spo => !matches!(action_type, NewConstitution | ParameterChange | Treasury),
        VoterRole::Cc => !matches!(action_type, NoConfidence | UpdateCommittee),
    }
}

/// The roles eligible to vote on `action_type`, in fixed display order.
pub fn eligible_roles(action_type: &GovActionType) -> Vec<VoterRole> {
    VoterRole::ALL
        .into_iter()
        .filter(|role| can_role_vote(action_type, *role))
        .collect()
}

/// Whether the detail view must hide DRep statistics for this action.
///
/// Only the legacy override list applies here: every known action type
/// admits DRep votes.
pub fn is_drep_not_applicable(hash: &str) -> bool {
    is_legacy(hash, &LEGACY_DREP_EXCLUDED)
}

/// Whether the detail view must hide SPO statistics for this action.
///
/// The legacy override wins; an action on no legacy list falls back to
/// the capability table for its type.
pub fn is_spo_not_applicable(hash: &str, action_type: &GovActionType) -> bool {
    if is_legacy(hash, &LEGACY_SPO_EXCLUDED) {
        return true;
    }
    !on_any_legacy_list(hash) && !can_role_vote(action_type, VoterRole::Spo)
}

/// Whether the detail view must hide constitutional-committee statistics.
pub fn is_cc_not_applicable(hash: &str, action_type: &GovActionType) -> bool {
    !on_any_legacy_list(hash) && !can_role_vote(action_type, VoterRole::Cc)
}
