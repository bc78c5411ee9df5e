//! Table listing — filtering, ordering and showcase prioritization.
//!
//! The default view is a curation rule, not a pure filter: when types are
//! selected it surfaces one representative of each selected showcase type
//! first, in the fixed showcase order, before falling back to recency.

use govscope_types::{GovAction, GovActionStatus, GovActionType};

/// User-selected table filters.
///
/// Empty `types` / `statuses` selections mean "no filtering" — the
/// dashboard's all-selected default. `query` is matched
/// case-insensitively against titles.
#[derive(Clone, Debug, Default)]
pub struct ActionFilter {
    pub types: Vec<GovActionType>,
    pub statuses: Vec<GovActionStatus>,
    pub query: String,
}

impl ActionFilter {
    /// Whether the type selection is the all-selected default: empty, or
    /// every showcase type present.
    fn all_types_selected(&self) -> bool {
        self.types.is_empty()
            || GovActionType::SHOWCASE_ORDER
                .iter()
                .all(|ty| self.types.contains(ty))
    }

    fn matches_status(&self, status: &GovActionStatus) -> bool {
        self.statuses.is_empty() || self.statuses.contains(status)
    }
}

/// Produce the ordered, deduplicated, filtered list the table displays.
///
/// Actions are sorted by `submission_epoch` descending with
/// `expiry_epoch` descending as the tie-break (stable beyond that), then
/// status-filtered. One representative per selected showcase type is
/// promoted to the front in fixed showcase order; the remaining matching
/// actions follow in epoch order. When no selected type has a
/// representative, the result is the plain type-membership filter
/// (non-showcase types count as members only under the all-types
/// selection or when selected explicitly). The title search applies
/// last, on either branch.
pub fn filter_actions(actions: &[GovAction], filter: &ActionFilter) -> Vec<GovAction> {
    let mut sorted: Vec<&GovAction> = actions.iter().collect();
    sorted.sort_by(|a, b| {
        b.submission_epoch
            .cmp(&a.submission_epoch)
            .then(b.expiry_epoch.cmp(&a.expiry_epoch))
    });

    let by_status: Vec<&GovAction> = sorted
        .into_iter()
        .filter(|action| filter.matches_status(&action.status))
        .collect();

    let all_types = filter.all_types_selected();
    let candidates: Vec<&GovAction> = by_status
        .iter()
        .copied()
        .filter(|action| all_types || filter.types.contains(&action.action_type))
        .collect();

    // One representative per selected showcase type, fixed order.
    let mut promoted: Vec<&GovAction> = Vec::new();
    for ty in &GovActionType::SHOWCASE_ORDER {
        if !all_types && !filter.types.contains(ty) {
            continue;
        }
        if let Some(first) = by_status.iter().find(|action| &action.action_type == ty) {
            if !promoted.iter().any(|p| p.hash == first.hash) {
                promoted.push(first);
            }
        }
    }

    let curated: Vec<&GovAction> = if promoted.is_empty() {
        candidates
    } else {
        let mut out = promoted;
        for action in candidates {
            if !out.iter().any(|p| p.hash == action.hash) {
                out.push(action);
            }
        }
        out
    };

    let query = filter.query.trim().to_lowercase();
    curated
        .into_iter()
        .filter(|action| query.is_empty() || action.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
