mod candidate;
mod voter;

pub use candidate::Candidate;
pub use voter::{FieldValue, Voter, VOTING_AGE};

/// Our candidate IDs are strings.
pub type CandidateId = String;
/// Our voter IDs are strings.
pub type VoterId = String;
