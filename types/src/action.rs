//! Normalized display records produced by the engine.
//!
//! Unlike their raw counterparts, every derived field here is present and
//! finite. The raw/normalized type split also makes double-normalization
//! unrepresentable: the normalizer consumes raw records and only ever
//! emits these.

use crate::raw::{RawRoleTally, RawThresholds};
use crate::{Epoch, GovActionStatus, GovActionType, VoteChoice, VoterRole};
use serde::{Deserialize, Serialize};

/// A role's tally re-emitted with its derived ADA values.
///
/// The raw fields are preserved untouched for consumers that still read
/// them; the ADA fields are always present and finite.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTally {
    #[serde(flatten)]
    pub raw: RawRoleTally,
    pub yes_ada: f64,
    pub no_ada: f64,
    pub abstain_ada: f64,
}

/// A fully-populated governance action as shown in the dashboard table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovAction {
    /// Composite transaction-hash + index key. Used for voting; never to
    /// be conflated with [`proposal_id`](Self::proposal_id).
    pub hash: String,
    /// Chain-native bech32 identifier used for display and routing.
    pub proposal_id: String,
    pub tx_hash: String,
    pub title: String,
    #[serde(rename = "type")]
    pub action_type: GovActionType,
    pub status: GovActionStatus,
    pub constitutionality: String,
    pub drep: RoleTally,
    pub spo: RoleTally,
    pub cc: RoleTally,
    pub drep_yes_ada: f64,
    pub drep_no_ada: f64,
    pub drep_abstain_ada: f64,
    pub spo_yes_ada: f64,
    pub spo_no_ada: f64,
    pub spo_abstain_ada: f64,
    pub cc_yes_count: u64,
    pub cc_no_count: u64,
    pub cc_abstain_count: u64,
    pub yes_votes_count: u64,
    pub no_votes_count: u64,
    pub abstain_votes_count: u64,
    pub submission_epoch: Epoch,
    pub expiry_epoch: Epoch,
    pub thresholds: RawThresholds,
    pub voting_status: Option<String>,
}

/// A normalized governance action plus its individual votes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovActionDetail {
    #[serde(flatten)]
    pub action: GovAction,
    pub description: String,
    pub rationale: String,
    /// DRep and SPO votes.
    pub votes: Vec<VoteRecord>,
    /// Constitutional committee votes.
    pub cc_votes: Vec<VoteRecord>,
}

/// A single voter's normalized vote on a governance action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub voter_type: VoterRole,
    pub voter_id: String,
    pub voter_name: String,
    /// Deprecated alias of `voter_id`, kept for older consumers.
    pub drep_id: String,
    /// Deprecated alias of `voter_name`, kept for older consumers.
    pub drep_name: String,
    pub vote: VoteChoice,
    /// Raw lovelace voting power as reported; meaningless for CC votes.
    pub voting_power: String,
    pub voting_power_ada: f64,
    /// Off-chain rationale reference.
    pub anchor_url: Option<String>,
    pub anchor_hash: Option<String>,
    pub voted_at: Option<String>,
}
