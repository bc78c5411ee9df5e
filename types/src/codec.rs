//! JSON decode boundary for raw backend payloads.
//!
//! The only fallible surface of the engine: everything downstream of a
//! successfully decoded record is total.

use crate::raw::{RawGovAction, RawGovActionDetail};
use thiserror::Error;

/// Failure to decode a raw backend payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed governance payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl RawGovAction {
    /// Decode a single raw governance action from backend JSON.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a list of raw governance actions from backend JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl RawGovActionDetail {
    /// Decode a raw governance action detail from backend JSON.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}
