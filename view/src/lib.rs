//! Display curation for the governance dashboard.
//!
//! Sits between the tally engine's normalized records and the rendering
//! layer: decides which voter roles are shown for an action, produces the
//! ordered table listing, and aggregates individual votes into the trend
//! chart's cumulative timeline.
//!
//! ## Module overview
//!
//! - [`eligibility`] — per-type role capability table and legacy overrides.
//! - [`filter`] — type/status filtering, showcase prioritization, search.
//! - [`timeline`] — time-ordered cumulative vote tallies.

pub mod eligibility;
pub mod filter;
pub mod timeline;

pub use eligibility::{
    can_role_vote, eligible_roles, is_cc_not_applicable, is_drep_not_applicable,
    is_spo_not_applicable,
};
pub use filter::{filter_actions, ActionFilter};
pub use timeline::{cumulative_timeline, TimelinePoint};
