//! Governance action types and their two display vocabularies.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The type of a governance action.
///
/// The backend speaks two vocabularies for the same concept: a short enum
/// key (`"ParameterChange"`) and a human-readable label (`"Protocol
/// Parameter Change"`). This enum is the canonical identifier; both
/// spellings parse via [`from_key`](Self::from_key) and each can be
/// re-derived via [`key`](Self::key) and [`label`](Self::label).
/// Unrecognized values pass through as free text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GovActionType {
    NoConfidence,
    UpdateCommittee,
    NewConstitution,
    HardForkInitiation,
    ParameterChange,
    Treasury,
    InfoAction,
    /// Unrecognized type, preserved verbatim.
    Other(String),
}

impl GovActionType {
    /// The fixed display-priority ordering used to diversify the default
    /// table view.
    pub const SHOWCASE_ORDER: [GovActionType; 7] = [
        GovActionType::NoConfidence,
        GovActionType::UpdateCommittee,
        GovActionType::NewConstitution,
        GovActionType::HardForkInitiation,
        GovActionType::ParameterChange,
        GovActionType::Treasury,
        GovActionType::InfoAction,
    ];

    /// Parse either vocabulary; unknown strings pass through verbatim.
    pub fn from_key(s: &str) -> Self {
        match s {
            "NoConfidence" | "No Confidence" => Self::NoConfidence,
            "UpdateCommittee" | "Update Committee" => Self::UpdateCommittee,
            "NewConstitution" | "New Constitution" => Self::NewConstitution,
            "HardForkInitiation" | "Hard Fork Initiation" => Self::HardForkInitiation,
            "ParameterChange" | "Protocol Parameter Change" => Self::ParameterChange,
            "Treasury" | "Treasury Withdrawals" => Self::Treasury,
            "InfoAction" | "Info Action" => Self::InfoAction,
            other => Self::Other(other.to_string()),
        }
    }

    /// The short enum key.
    pub fn key(&self) -> &str {
        match self {
            Self::NoConfidence => "NoConfidence",
            Self::UpdateCommittee => "UpdateCommittee",
            Self::NewConstitution => "NewConstitution",
            Self::HardForkInitiation => "HardForkInitiation",
            Self::ParameterChange => "ParameterChange",
            Self::Treasury => "Treasury",
            Self::InfoAction => "InfoAction",
            Self::Other(s) => s,
        }
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::NoConfidence => "No Confidence",
            Self::UpdateCommittee => "Update Committee",
            Self::NewConstitution => "New Constitution",
            Self::HardForkInitiation => "Hard Fork Initiation",
            Self::ParameterChange => "Protocol Parameter Change",
            Self::Treasury => "Treasury Withdrawals",
            Self::InfoAction => "Info Action",
            Self::Other(s) => s,
        }
    }

    /// Whether this is one of the seven known showcase types.
    pub fn is_showcase(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for GovActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for GovActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for GovActionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_key(&s))
    }
}
