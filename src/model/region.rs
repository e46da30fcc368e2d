use serde::{Deserialize, Serialize};

/// A region in a nested hierarchy, e.g. district -> block -> village.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    /// Votes counted directly in this region. Absent counts as zero.
    #[serde(default)]
    pub votes: Option<u64>,
    #[serde(default)]
    pub sub_regions: Vec<Region>,
}

impl Region {
    pub fn new(name: impl Into<String>, votes: u64, sub_regions: Vec<Region>) -> Self {
        Self {
            name: name.into(),
            votes: Some(votes),
            sub_regions,
        }
    }

    /// Total votes in this region and everything beneath it.
    /// Saturates at `u64::MAX` rather than overflowing.
    pub fn total_votes(&self) -> u64 {
        self.sub_regions
            .iter()
            .map(Region::total_votes)
            .fold(self.votes.unwrap_or_default(), u64::saturating_add)
    }
}

/// Total votes across a region tree. A missing tree has no votes.
pub fn count_votes_in_regions(region: Option<&Region>) -> u64 {
    region.map_or(0, Region::total_votes)
}
