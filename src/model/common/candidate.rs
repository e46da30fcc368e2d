use serde::{Deserialize, Serialize};

use super::CandidateId;

/// A single candidate standing in an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate unique ID.
    pub id: CandidateId,
    /// Display name.
    pub name: String,
    /// Party label.
    pub party: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: party.into(),
        }
    }
}

/// Example test data.
#[cfg(test)]
mod examples {
    use super::*;

    impl Candidate {
        pub fn example1() -> Self {
            Self::new("C1", "Sarpanch Ram", "Janata")
        }

        pub fn example2() -> Self {
            Self::new("C2", "Pradhan Sita", "Lok")
        }

        pub fn example3() -> Self {
            Self::new("C3", "Mukhiya Gopal", "Kisan")
        }
    }
}
