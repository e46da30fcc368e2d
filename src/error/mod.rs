use std::io::Error as IoError;

use serde_json::Error as JsonError;
use thiserror::Error;

use crate::model::common::CandidateId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Json(#[from] JsonError),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
    #[error("An election needs at least one candidate")]
    NoCandidates,
    #[error("Duplicate candidate ID: {0}")]
    DuplicateCandidate(CandidateId),
}
