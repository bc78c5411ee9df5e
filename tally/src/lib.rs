//! Vote tally derivation engine.
//!
//! Takes the raw, partially-populated tally records delivered by the
//! backend and produces complete, display-ready statistics. The whole
//! crate is total: any malformed or missing input maps to a well-formed
//! value, never an error. Repeated invocation over fresh polls of the
//! same proposal is idempotent and must not assume a later poll carries
//! more data than an earlier one.
//!
//! ## Module overview
//!
//! - [`units`] — lovelace→ADA conversion and safe numeric parsing.
//! - [`abstain`] — reconstruction of omitted abstain statistics.
//! - [`normalize`] — raw → display record normalization.

pub mod abstain;
pub mod normalize;
pub mod units;

pub use abstain::{derive_abstain_value, derive_cc_abstain_count};
pub use normalize::{normalize_action, normalize_action_detail, normalize_vote_record};
pub use units::{lovelace_to_ada, parse_count, parse_numeric, LOVELACE_PER_ADA};
