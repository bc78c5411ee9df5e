//! Raw records as delivered by the backend API.
//!
//! Every field is optional: the backend omits whatever it has no data for,
//! and a later poll may carry fewer populated fields than an earlier one.
//! Monetary amounts arrive as integer lovelace strings.

use serde::{Deserialize, Serialize};

/// One role's raw tally (DRep, SPO or CC).
///
/// Percentages are 0–100, monetary amounts are lovelace strings, counts
/// are plain integers. Any subset may be present; percentages within a
/// role should sum to ≈100 but frequently do not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRoleTally {
    pub yes_percent: Option<f64>,
    pub no_percent: Option<f64>,
    pub abstain_percent: Option<f64>,
    pub yes_votes: Option<String>,
    pub no_votes: Option<String>,
    pub abstain_votes: Option<String>,
    pub yes_count: Option<u64>,
    pub no_count: Option<u64>,
    pub abstain_count: Option<u64>,
}

/// Per-role approval thresholds, when the backend reports them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawThresholds {
    pub drep: Option<f64>,
    pub spo: Option<f64>,
    pub cc: Option<f64>,
}

/// A raw governance action as returned by the proposal list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGovAction {
    /// Composite transaction-hash + index key used for voting.
    pub hash: Option<String>,
    /// Chain-native bech32 identifier used for display and routing.
    pub proposal_id: Option<String>,
    pub tx_hash: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub action_type: Option<String>,
    pub status: Option<String>,
    pub constitutionality: Option<String>,
    pub drep: Option<RawRoleTally>,
    pub spo: Option<RawRoleTally>,
    pub cc: Option<RawRoleTally>,
    pub yes_votes_count: Option<u64>,
    pub no_votes_count: Option<u64>,
    pub abstain_votes_count: Option<u64>,
    pub submission_epoch: Option<u64>,
    pub expiry_epoch: Option<u64>,
    pub thresholds: Option<RawThresholds>,
    pub voting_status: Option<String>,
}

/// A raw vote entry as returned by the proposal detail endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVoteRecord {
    pub voter_type: Option<String>,
    pub voter_id: Option<String>,
    pub voter_name: Option<String>,
    pub vote: Option<String>,
    /// Lovelace string; meaningful for DRep/SPO voters only.
    pub voting_power: Option<String>,
    pub anchor_url: Option<String>,
    pub anchor_hash: Option<String>,
    pub voted_at: Option<String>,
}

/// A raw governance action detail: the action plus its individual votes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGovActionDetail {
    #[serde(flatten)]
    pub action: RawGovAction,
    pub description: Option<String>,
    pub rationale: Option<String>,
    /// DRep and SPO votes.
    pub votes: Option<Vec<RawVoteRecord>>,
    /// Constitutional committee votes.
    pub cc_votes: Option<Vec<RawVoteRecord>>,
}
