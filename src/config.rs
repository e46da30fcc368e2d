use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{
    common::{Candidate, Voter},
    election::VoteReceipt,
    region::Region,
    validator::ValidationRules,
};

/// A scripted election, loaded from a JSON file.
///
/// Only `candidates` is required. Voter entries may be `null`; such entries
/// are treated as failed registrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Candidates, in ballot order.
    pub candidates: Vec<Candidate>,
    /// Voters to register, in order.
    #[serde(default)]
    pub voters: Vec<Option<Voter>>,
    /// Votes to cast, in order.
    #[serde(default)]
    pub votes: Vec<VoteReceipt>,
    /// If present, every voter is also checked against these rules.
    #[serde(default)]
    pub rules: Option<ValidationRules>,
    /// If present, the region tree is summed.
    #[serde(default)]
    pub regions: Option<Region>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = BufReader::new(File::open(path)?);
        Self::from_reader(file)
    }

    /// Load a scenario from any JSON source.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Example test data.
#[cfg(test)]
mod examples {
    use super::*;

    impl Scenario {
        pub fn example() -> Self {
            Self {
                candidates: vec![Candidate::example1(), Candidate::example2()],
                voters: vec![Some(Voter::example1()), None],
                votes: vec![VoteReceipt {
                    voter_id: "V1".to_string(),
                    candidate_id: "C1".to_string(),
                }],
                rules: None,
                regions: None,
            }
        }
    }
}
