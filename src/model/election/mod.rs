pub use election_core::Election;
pub use receipt::{VoteError, VoteReceipt};
pub use results::CandidateResult;

mod election_core;
mod receipt;
mod results;
