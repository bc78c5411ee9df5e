//! Vote choices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single voter's choice on a governance action.
///
/// Anything other than exactly `"Yes"` or `"No"` counts as an abstention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteChoice {
    Yes,
    No,
    Abstain,
}

impl VoteChoice {
    /// Classify a backend vote value. Total: unknown values map to
    /// [`Abstain`](Self::Abstain).
    pub fn from_label(label: &str) -> Self {
        match label {
            "Yes" => Self::Yes,
            "No" => Self::No,
            _ => Self::Abstain,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Abstain => "Abstain",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for VoteChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VoteChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}
