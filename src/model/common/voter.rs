use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::VoterId;

/// Minimum age at which a voter may register.
pub const VOTING_AGE: u32 = 18;

/// A person who may register and cast at most one vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    /// Voter unique ID.
    #[serde(default)]
    pub id: VoterId,
    #[serde(default)]
    pub name: String,
    /// Age in years, if known. Registration requires it.
    /// Any number is accepted here; nonsense ages are refused at registration.
    #[serde(default)]
    pub age: Option<f64>,
}

/// A field of a [`Voter`], looked up by name.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Empty strings count as missing.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl Voter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: Some(f64::from(age)),
        }
    }

    /// Look up a field by its name.
    /// Returns `None` if the field is unknown or has no value.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "age" => self.age.map(FieldValue::Number),
            _ => None,
        }
    }

    /// Is this voter eligible to register?
    pub fn is_eligible(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && self.age.map_or(false, |age| age >= f64::from(VOTING_AGE))
    }
}

impl Display for Voter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
