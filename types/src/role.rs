//! Governance voter roles.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the three governance voter roles.
///
/// DReps and SPOs vote with monetary power; the constitutional committee
/// votes by member count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoterRole {
    /// Delegated representative.
    DRep,
    /// Stake pool operator.
    Spo,
    /// Constitutional committee member.
    Cc,
}

impl VoterRole {
    /// All roles, in fixed display order.
    pub const ALL: [VoterRole; 3] = [VoterRole::DRep, VoterRole::Spo, VoterRole::Cc];

    /// Parse a backend role label, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the three roles.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "drep" => Some(Self::DRep),
            "spo" => Some(Self::Spo),
            "cc" | "constitutionalcommittee" | "constitutional committee" => Some(Self::Cc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DRep => "DRep",
            Self::Spo => "SPO",
            Self::Cc => "CC",
        }
    }

    /// Whether this role votes by member count rather than monetary power.
    pub fn votes_by_count(&self) -> bool {
        matches!(self, Self::Cc)
    }
}

impl fmt::Display for VoterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for VoterRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VoterRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_label(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["DRep", "SPO", "CC"]))
    }
}
