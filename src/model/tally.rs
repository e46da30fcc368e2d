use std::collections::HashMap;

use super::common::CandidateId;

/// Vote counts by candidate.
pub type Tally = HashMap<CandidateId, u64>;

/// Return a new tally with one more vote for `candidate_id`.
///
/// The given tally is left untouched. A candidate that is absent, or
/// present with a count of zero, ends up with exactly one vote.
pub fn tally_pure(current: &Tally, candidate_id: &str) -> Tally {
    let mut tally = current.clone();
    match tally.get_mut(candidate_id) {
        Some(count) if *count > 0 => *count += 1,
        _ => {
            tally.insert(candidate_id.to_string(), 1);
        }
    }
    tally
}
