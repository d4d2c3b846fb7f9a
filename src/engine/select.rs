// src/engine/select.rs
//! Tie-break heuristics for picking one catalog entry out of several hits.
//!
//! - Several **exact** hits are the same title in different printings, so the
//!   newest one wins ([`most_relevant`]).
//! - Several **fuzzy** hits are usually a base game plus its expansions and
//!   reissues ([`pick_base_game`]). Expansions come later and carry longer,
//!   qualified names ("Zoo: Deluxe"), so: earliest plausible year, shortest name.
//!
//! Both are pure and deterministic for a given input set, regardless of the
//! order the service returned it in.

use tracing::{debug, warn};

use super::types::SearchResult;
use crate::config::consts::BASE_GAME_MIN_YEAR;

/// Newest release among `results`; `None` only if `results` is empty.
pub fn most_relevant(results: &[SearchResult]) -> Option<&SearchResult> {
    let mut sorted: Vec<&SearchResult> = results.iter().collect();
    sorted.sort_by(|a, b| b.cmp(a));

    let latest = sorted.first()?.year;
    let newest: Vec<&SearchResult> = sorted
        .into_iter()
        .take_while(|r| r.year == latest)
        .collect();

    if newest.len() > 1 {
        warn!(
            year = %latest,
            candidates = newest.len(),
            picked = %newest[0].id,
            "several exact matches share the latest year, picking one"
        );
    }
    newest.first().copied()
}

/// Most likely base game among fuzzy `results` for `query`.
///
/// 1. keep names starting with `query` (case-sensitive), unless none do
/// 2. sort ascending by `(year, name, id)`
/// 3. drop everything before the first entry from `BASE_GAME_MIN_YEAR` on,
///    unless that would leave nothing
/// 4. among the earliest remaining year, shortest name wins
pub fn pick_base_game<'a>(query: &str, results: &'a [SearchResult]) -> Option<&'a SearchResult> {
    let prefixed: Vec<&SearchResult> = results
        .iter()
        .filter(|r| r.name.starts_with(query))
        .collect();

    let mut pool: Vec<&SearchResult> = if prefixed.is_empty() {
        results.iter().collect()
    } else {
        prefixed
    };
    pool.sort();

    if let Some(cut) = pool.iter().position(|r| !r.year.is_before(BASE_GAME_MIN_YEAR)) {
        pool.drain(..cut);
    }

    let earliest = pool.first()?.year;
    let picked = pool
        .into_iter()
        .take_while(|r| r.year == earliest)
        .min_by_key(|r| r.name.chars().count());

    if let Some(r) = picked {
        debug!(query, year = %r.year, name = %r.name, id = %r.id, "picked base game");
    }
    picked
}
