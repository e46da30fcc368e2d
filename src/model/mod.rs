pub mod common;
pub mod election;
pub mod region;
pub mod tally;
pub mod validator;

pub use election::Election;
pub use region::{count_votes_in_regions, Region};
pub use tally::{tally_pure, Tally};
pub use validator::{create_vote_validator, Validation, ValidationRules, VoteValidator};
