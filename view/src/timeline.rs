//! Cumulative vote timeline for the trend chart.
//!
//! Turns an unordered collection of individual votes into a time-ordered
//! series of running yes/no/abstain totals. A pure function of its input:
//! re-running it over a fresh poll restarts the walk from scratch.

use chrono::{DateTime, NaiveDateTime};
use govscope_types::{VoteChoice, VoteRecord, VoterRole};
use std::cmp::Ordering;

/// One point of the cumulative timeline.
///
/// Carries the six running totals as of this vote; each is monotonically
/// non-decreasing along the sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelinePoint {
    /// `"MMM D, HH:MM"` of the vote timestamp, or `"Vote {n}"` (1-based)
    /// when the vote carries none.
    pub label: String,
    pub yes_count: u64,
    pub no_count: u64,
    pub abstain_count: u64,
    pub yes_power: f64,
    pub no_power: f64,
    pub abstain_power: f64,
}

fn parse_voted_at(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed);
    }
    tracing::debug!(voted_at = %raw, "unparseable vote timestamp");
    None
}

/// Aggregate votes into a time-ordered, monotonically-cumulative series
/// of yes/no/abstain counts and power.
///
/// Votes without a parseable timestamp sort before all timestamped ones
/// and keep their original relative order. Power is taken from
/// `voting_power_ada`; negative or non-finite power counts as zero so the
/// series never decreases.
pub fn cumulative_timeline(
    votes: &[VoteRecord],
    role: Option<VoterRole>,
) -> Vec<TimelinePoint> {
    let mut indexed: Vec<(usize, Option<NaiveDateTime>, &VoteRecord)> = votes
        .iter()
        .filter(|vote| role.map_or(true, |r| vote.voter_type == r))
        .enumerate()
        .map(|(index, vote)| {
            let parsed = vote.voted_at.as_deref().and_then(parse_voted_at);
            (index, parsed, vote)
        })
        .collect();

    // `None` sorts before every timestamp; ties fall back to the original
    // index.
    indexed.sort_by(|(ia, ta, _), (ib, tb, _)| match (ta, tb) {
        (None, None) => ia.cmp(ib),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b).then(ia.cmp(ib)),
    });

    let mut points = Vec::with_capacity(indexed.len());
    let (mut yes_count, mut no_count, mut abstain_count) = (0u64, 0u64, 0u64);
    let (mut yes_power, mut no_power, mut abstain_power) = (0.0f64, 0.0f64, 0.0f64);

    for (position, (_, parsed, vote)) in indexed.iter().enumerate() {
        let power = vote.voting_power_ada.max(0.0);
        match vote.vote {
            VoteChoice::Yes => {
                yes_count += 1;
                yes_power += power;
            }
            VoteChoice::No => {
                no_count += 1;
                no_power += power;
            }
            VoteChoice::Abstain => {
                abstain_count += 1;
                abstain_power += power;
            }
        }
        let label = match parsed {
            Some(ts) => ts.format("%b %-d, %H:%M").to_string(),
            None => format!("Vote {}", position + 1),
        };
        points.push(TimelinePoint {
            label,
            yes_count,
            no_count,
            abstain_count,
            yes_power,
            no_power,
            abstain_power,
        });
    }
    points
}
