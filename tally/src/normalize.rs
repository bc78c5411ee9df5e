//! Raw → display record normalization.
//!
//! One entry point per entity. Every default and derivation rule lives
//! here so no downstream consumer re-implements fallback logic. Amounts
//! are divided down to ADA on the way through, so each raw payload is
//! normalized exactly once; the raw/normalized type split keeps a second
//! pass from ever type-checking.

use crate::abstain::{derive_abstain_value, derive_cc_abstain_count};
use crate::units::{lovelace_to_ada, parse_count, parse_numeric};
use govscope_types::{
    GovAction, GovActionDetail, GovActionStatus, GovActionType, RawGovAction, RawGovActionDetail,
    RawRoleTally, RawVoteRecord, RoleTally, VoteChoice, VoteRecord, VoterRole,
};

const DEFAULT_TITLE: &str = "Untitled Proposal";
const DEFAULT_CONSTITUTIONALITY: &str = "Unspecified";

/// Monetary ADA figures derived for one power-voting role.
struct RoleAda {
    yes: f64,
    no: f64,
    abstain: f64,
}

impl RoleAda {
    const ZERO: Self = Self {
        yes: 0.0,
        no: 0.0,
        abstain: 0.0,
    };
}

fn derive_role_ada(tally: &RawRoleTally) -> RoleAda {
    let yes = lovelace_to_ada(tally.yes_votes.as_deref());
    let no = lovelace_to_ada(tally.no_votes.as_deref());
    let abstain = match tally.abstain_votes.as_deref() {
        Some(raw) if !raw.is_empty() => lovelace_to_ada(Some(raw)),
        _ => derive_abstain_value(
            yes,
            parse_numeric(tally.yes_percent),
            no,
            parse_numeric(tally.no_percent),
            tally.abstain_percent,
        ),
    };
    RoleAda { yes, no, abstain }
}

fn augment(tally: &RawRoleTally, ada: &RoleAda) -> RoleTally {
    RoleTally {
        raw: tally.clone(),
        yes_ada: ada.yes,
        no_ada: ada.no,
        abstain_ada: ada.abstain,
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Map a raw action record into a fully-populated display record.
///
/// Lovelace amounts are converted for DRep always and for SPO only when
/// its tally object exists; an omitted DRep/SPO abstain amount is
/// reconstructed from the percentages, as is an omitted CC abstain count.
/// Identity fields pass through verbatim: `hash` keeps the composite
/// transaction-hash+index form required for voting, `proposal_id` stays
/// the separate bech32 display form.
pub fn normalize_action(raw: &RawGovAction) -> GovAction {
    let action_type = raw
        .action_type
        .as_deref()
        .map(GovActionType::from_key)
        .unwrap_or_else(|| GovActionType::Other(String::new()));
    if let GovActionType::Other(name) = &action_type {
        if !name.is_empty() {
            tracing::warn!(action_type = %name, "unrecognized governance action type");
        }
    }

    let status = raw
        .status
        .as_deref()
        .map(GovActionStatus::from_label)
        .unwrap_or_else(|| GovActionStatus::Other(String::new()));
    if let GovActionStatus::Other(name) = &status {
        if !name.is_empty() {
            tracing::warn!(status = %name, "unrecognized governance action status");
        }
    }

    let drep_raw = raw.drep.clone().unwrap_or_default();
    let drep_ada = derive_role_ada(&drep_raw);

    let (spo, spo_ada) = match &raw.spo {
        Some(tally) => {
            let ada = derive_role_ada(tally);
            (augment(tally, &ada), ada)
        }
        None => (RoleTally::default(), RoleAda::ZERO),
    };

    let cc_raw = raw.cc.clone().unwrap_or_default();
    let cc_yes_count = parse_count(cc_raw.yes_count);
    let cc_no_count = parse_count(cc_raw.no_count);
    let cc_abstain_count = match cc_raw.abstain_count {
        Some(n) => n,
        None => derive_cc_abstain_count(
            cc_yes_count,
            cc_no_count,
            cc_raw.yes_percent,
            cc_raw.no_percent,
            cc_raw.abstain_percent,
        ),
    };

    GovAction {
        hash: raw.hash.clone().unwrap_or_default(),
        proposal_id: raw.proposal_id.clone().unwrap_or_default(),
        tx_hash: raw.tx_hash.clone().unwrap_or_default(),
        title: non_empty_or(raw.title.as_deref(), DEFAULT_TITLE),
        action_type,
        status,
        constitutionality: non_empty_or(
            raw.constitutionality.as_deref(),
            DEFAULT_CONSTITUTIONALITY,
        ),
        drep: augment(&drep_raw, &drep_ada),
        spo,
        cc: augment(&cc_raw, &RoleAda::ZERO),
        drep_yes_ada: drep_ada.yes,
        drep_no_ada: drep_ada.no,
        drep_abstain_ada: drep_ada.abstain,
        spo_yes_ada: spo_ada.yes,
        spo_no_ada: spo_ada.no,
        spo_abstain_ada: spo_ada.abstain,
        cc_yes_count,
        cc_no_count,
        cc_abstain_count,
        yes_votes_count: parse_count(raw.yes_votes_count),
        no_votes_count: parse_count(raw.no_votes_count),
        abstain_votes_count: parse_count(raw.abstain_votes_count),
        submission_epoch: raw.submission_epoch.unwrap_or(0),
        expiry_epoch: raw.expiry_epoch.unwrap_or(0),
        thresholds: raw.thresholds.clone().unwrap_or_default(),
        voting_status: raw.voting_status.clone(),
    }
}

/// Map a raw action detail into its display record.
///
/// Extends [`normalize_action`]; absent vote collections become empty,
/// never null.
pub fn normalize_action_detail(raw: &RawGovActionDetail) -> GovActionDetail {
    let votes = raw
        .votes
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|vote| normalize_vote_record(vote, VoterRole::DRep))
        .collect();
    let cc_votes = raw
        .cc_votes
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|vote| normalize_vote_record(vote, VoterRole::Cc))
        .collect();

    GovActionDetail {
        action: normalize_action(&raw.action),
        description: raw.description.clone().unwrap_or_default(),
        rationale: raw.rationale.clone().unwrap_or_default(),
        votes,
        cc_votes,
    }
}

/// Map a raw vote entry to its display shape.
///
/// `fallback_role` is the role implied by the collection the entry came
/// from (`votes` carries DRep/SPO entries, `cc_votes` committee ones); it
/// applies when the entry carries no recognizable voter type. `drep_id` /
/// `drep_name` are deprecated aliases populated from the voter fields.
pub fn normalize_vote_record(raw: &RawVoteRecord, fallback_role: VoterRole) -> VoteRecord {
    let voter_type = match raw.voter_type.as_deref() {
        Some(label) => VoterRole::from_label(label).unwrap_or_else(|| {
            tracing::warn!(voter_type = %label, "unrecognized voter type");
            fallback_role
        }),
        None => fallback_role,
    };
    let voter_id = raw.voter_id.clone().unwrap_or_default();
    let voter_name = raw.voter_name.clone().unwrap_or_default();
    let voting_power = raw.voting_power.clone().unwrap_or_else(|| "0".to_string());
    let voting_power_ada = lovelace_to_ada(Some(&voting_power));

    VoteRecord {
        voter_type,
        drep_id: voter_id.clone(),
        drep_name: voter_name.clone(),
        voter_id,
        voter_name,
        vote: raw
            .vote
            .as_deref()
            .map(VoteChoice::from_label)
            .unwrap_or(VoteChoice::Abstain),
        voting_power,
        voting_power_ada,
        anchor_url: raw.anchor_url.clone(),
        anchor_hash: raw.anchor_hash.clone(),
        voted_at: raw.voted_at.clone(),
    }
}
