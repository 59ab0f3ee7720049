//! Reviewer selection.
//!
//! Pure decision logic over membership snapshots. The rng is always passed
//! in by the caller so handlers use the state's reseeding ChaCha20 generator
//! while tests use a seeded one.

use entity::users;
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

/// Upper bound on the reviewer set at creation. Reassignment never grows
/// the set, the deactivation sweep may shrink it.
pub const MAX_REVIEWERS: usize = 2;

/// Picks the initial reviewer set for a new pull request.
///
/// Candidates are the active members of the author's team, minus the author.
/// Selects `min(MAX_REVIEWERS, |candidates|)` of them uniformly without
/// replacement. An empty candidate set yields an empty assignment.
pub fn initial_reviewers<R>(rng: &mut R, members: &[users::Model], author_id: &str) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let candidates = members
        .iter()
        .filter(|u| u.is_active && u.user_id != author_id)
        .collect::<Vec<_>>();

    candidates
        .choose_multiple(rng, MAX_REVIEWERS)
        .map(|u| u.user_id.clone())
        .collect()
}

/// Picks a replacement from the old reviewer's team.
///
/// The pool is every active member not currently assigned to the pull
/// request. The outgoing reviewer is still part of `assigned` here, so it
/// can never be drawn again. Returns `None` when the pool is empty.
pub fn replacement_reviewer<R>(
    rng: &mut R,
    members: &[users::Model],
    assigned: &HashSet<String>,
) -> Option<String>
where
    R: Rng + ?Sized,
{
    let pool = members
        .iter()
        .filter(|u| u.is_active && !assigned.contains(&u.user_id))
        .collect::<Vec<_>>();

    pool.choose(rng).map(|u| u.user_id.clone())
}
