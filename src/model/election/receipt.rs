use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::common::{CandidateId, VoterId};

/// Proof that a vote was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

/// Reasons a vote can be refused. The display strings are the
/// reasons handed to error callbacks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("Voter not registered")]
    NotRegistered,
    #[error("not exist")]
    NoSuchCandidate,
    #[error("already voted")]
    AlreadyVoted,
}
