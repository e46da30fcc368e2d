use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::common::{Candidate, CandidateId};

/// A candidate together with their current vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl CandidateResult {
    pub fn new(candidate: &Candidate, votes: u64) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes,
        }
    }
}

impl Display for CandidateResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}): {} vote{}",
            self.name,
            self.id,
            self.party,
            self.votes,
            if self.votes != 1 { "s" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let result = CandidateResult::new(&Candidate::example1(), 1);
        assert_eq!(result.to_string(), "Sarpanch Ram (C1, Janata): 1 vote");

        let result = CandidateResult::new(&Candidate::example2(), 3);
        assert_eq!(result.to_string(), "Pradhan Sita (C2, Lok): 3 votes");
    }
}
