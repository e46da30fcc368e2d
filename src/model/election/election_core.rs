use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{
    common::{Candidate, CandidateId, Voter, VoterId},
    tally::Tally,
};

use super::{CandidateResult, VoteError, VoteReceipt};

/// An in-memory election over a fixed list of candidates.
///
/// Registrations and votes only ever accumulate; there is no way to remove
/// a voter or retract a vote. The sum of all counts always equals the
/// number of voters who have voted.
#[derive(Debug, Clone)]
pub struct Election {
    /// Candidates in the order they were given.
    candidates: Vec<Candidate>,
    /// Current count for every candidate.
    vote_counts: HashMap<CandidateId, u64>,
    /// Registered voters, in registration order.
    registered: Vec<Voter>,
    /// IDs of voters who have successfully voted.
    voted: HashSet<VoterId>,
}

impl Election {
    /// Create a new election with zero votes for every candidate.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(Error::NoCandidates);
        }

        let mut vote_counts = HashMap::with_capacity(candidates.len());
        for candidate in candidates.iter() {
            if vote_counts.insert(candidate.id.clone(), 0).is_some() {
                return Err(Error::DuplicateCandidate(candidate.id.clone()));
            }
        }

        Ok(Self {
            candidates,
            vote_counts,
            registered: Vec::new(),
            voted: HashSet::new(),
        })
    }

    /// All candidates, in their original order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Is a voter with this ID registered?
    pub fn is_registered(&self, voter_id: &str) -> bool {
        self.registered.iter().any(|v| v.id == voter_id)
    }

    /// Has the voter with this ID already voted?
    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voted.contains(voter_id)
    }

    /// Number of votes cast so far.
    pub fn total_votes(&self) -> u64 {
        self.voted.len() as u64
    }

    /// Register a voter.
    ///
    /// Returns `false` without changing anything if the voter is missing an
    /// ID, name or age, is under age, or is already registered.
    pub fn register_voter(&mut self, voter: Voter) -> bool {
        if !voter.is_eligible() {
            warn!("Refused registration of ineligible voter {voter}");
            return false;
        }
        if self.is_registered(&voter.id) {
            warn!("Refused duplicate registration of voter {voter}");
            return false;
        }

        debug!("Registered voter {voter}");
        self.registered.push(voter);
        true
    }

    /// Record a vote.
    ///
    /// Checks are made in order, and the first failure is returned:
    /// the voter must be registered, the candidate must exist, and the
    /// voter must not have voted already.
    pub fn cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> std::result::Result<VoteReceipt, VoteError> {
        let checked = if !self.is_registered(voter_id) {
            Err(VoteError::NotRegistered)
        } else if !self.vote_counts.contains_key(candidate_id) {
            Err(VoteError::NoSuchCandidate)
        } else if self.has_voted(voter_id) {
            Err(VoteError::AlreadyVoted)
        } else {
            Ok(())
        };
        if let Err(err) = checked {
            warn!("Rejected vote by {voter_id} for {candidate_id}: {err}");
            return Err(err);
        }

        self.voted.insert(voter_id.to_string());
        // Presence checked above.
        if let Some(count) = self.vote_counts.get_mut(candidate_id) {
            *count += 1;
        }
        info!("Recorded vote by {voter_id} for {candidate_id}");

        Ok(VoteReceipt {
            voter_id: voter_id.to_string(),
            candidate_id: candidate_id.to_string(),
        })
    }

    /// Record a vote, handing the outcome to exactly one of the callbacks.
    /// Whatever that callback returns is returned.
    pub fn cast_vote_with<R>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: impl FnOnce(VoteReceipt) -> R,
        on_error: impl FnOnce(&str) -> R,
    ) -> R {
        match self.cast_vote(voter_id, candidate_id) {
            Ok(receipt) => on_success(receipt),
            Err(err) => on_error(&err.to_string()),
        }
    }

    /// Results for every candidate, most votes first.
    /// Candidates with equal votes keep their original order.
    pub fn results(&self) -> Vec<CandidateResult> {
        self.results_by(|a, b| b.votes.cmp(&a.votes))
    }

    /// Results for every candidate, ordered by the given comparator.
    /// The sort is stable.
    pub fn results_by<F>(&self, compare: F) -> Vec<CandidateResult>
    where
        F: FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    {
        let mut results = self
            .candidates
            .iter()
            .map(|c| CandidateResult::new(c, self.count(&c.id)))
            .collect::<Vec<_>>();
        results.sort_by(compare);
        results
    }

    /// The candidate with the most votes, or `None` if nobody has voted.
    /// Ties go to whichever tied candidate was listed first.
    pub fn winner(&self) -> Option<&Candidate> {
        if self.voted.is_empty() {
            return None;
        }

        let mut winner = self.candidates.first()?;
        for candidate in self.candidates.iter().skip(1) {
            if self.count(&candidate.id) > self.count(&winner.id) {
                winner = candidate;
            }
        }
        Some(winner)
    }

    /// A snapshot of the current counts.
    pub fn tally(&self) -> Tally {
        self.vote_counts.clone()
    }

    fn count(&self, candidate_id: &str) -> u64 {
        self.vote_counts.get(candidate_id).copied().unwrap_or_default()
    }
}
