//! Governance action lifecycle statuses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The lifecycle status of a governance action.
///
/// Unrecognized statuses pass through as free text rather than failing:
/// the engine reconciles backend data, it does not validate it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GovActionStatus {
    Active,
    Ratified,
    Expired,
    Approved,
    NotApproved,
    /// Unrecognized status, preserved verbatim.
    Other(String),
}

impl GovActionStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Active" => Self::Active,
            "Ratified" => Self::Ratified,
            "Expired" => Self::Expired,
            "Approved" => Self::Approved,
            "Not approved" | "NotApproved" => Self::NotApproved,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Ratified => "Ratified",
            Self::Expired => "Expired",
            Self::Approved => "Approved",
            Self::NotApproved => "Not approved",
            Self::Other(s) => s,
        }
    }

    /// Whether the action is still open for voting.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for GovActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for GovActionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for GovActionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}
