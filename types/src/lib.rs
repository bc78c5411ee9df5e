//! Shared data model for the govscope governance dashboard engine.
//!
//! This crate defines the types exchanged across the workspace: voter roles,
//! governance action types and statuses, the raw records delivered by the
//! backend API, and the normalized display records the engine produces.

pub mod action;
pub mod action_type;
pub mod codec;
pub mod raw;
pub mod role;
pub mod status;
pub mod vote;

pub use action::{GovAction, GovActionDetail, RoleTally, VoteRecord};
pub use action_type::GovActionType;
pub use codec::DecodeError;
pub use raw::{
    RawGovAction, RawGovActionDetail, RawRoleTally, RawThresholds, RawVoteRecord,
};
pub use role::VoterRole;
pub use status::GovActionStatus;
pub use vote::VoteChoice;

/// A discrete chain time unit used for proposal submission/expiry windows.
///
/// Epochs are monotonic; `submission_epoch <= expiry_epoch` holds for
/// well-formed actions but is tolerated, never enforced.
pub type Epoch = u64;
