use serde::{Deserialize, Serialize};

use super::common::{FieldValue, Voter, VOTING_AGE};

/// Rules a voter must satisfy to be considered valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum age, inclusive.
    pub min_age: u32,
    /// Fields that must be present and non-empty, checked in order.
    pub required_fields: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_age: VOTING_AGE,
            required_fields: vec!["id".into(), "name".into(), "age".into()],
        }
    }
}

/// Outcome of validating a voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub reason: Option<String>,
}

impl Validation {
    fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// A reusable voter validator built from a fixed set of rules.
///
/// This is independent of [`crate::model::election::Election`], which
/// applies its own fixed eligibility checks on registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteValidator {
    rules: ValidationRules,
}

impl VoteValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Validate a voter, reporting only the first problem found.
    pub fn validate(&self, voter: Option<&Voter>) -> Validation {
        let voter = match voter {
            Some(voter) => voter,
            None => return Validation::invalid("null or undefined"),
        };

        for field in self.rules.required_fields.iter() {
            let missing = voter
                .field(field)
                .map_or(true, |value| FieldValue::is_empty(&value));
            if missing {
                return Validation::invalid(format!("Missing required field: {field}"));
            }
        }

        match voter.age {
            Some(age) if age < f64::from(self.rules.min_age) => {
                Validation::invalid(format!("must be {} years old", self.rules.min_age))
            }
            _ => Validation::valid(),
        }
    }
}

/// Build a validator from the given rules.
pub fn create_vote_validator(rules: ValidationRules) -> VoteValidator {
    VoteValidator::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> VoteValidator {
        create_vote_validator(ValidationRules::default())
    }

    #[test]
    fn valid_voter() {
        let result = standard().validate(Some(&Voter::new("v1", "A", 20)));
        assert_eq!(
            result,
            Validation {
                valid: true,
                reason: None
            }
        );
    }

    #[test]
    fn underage_mentions_minimum() {
        let result = standard().validate(Some(&Voter::new("v1", "A", 17)));
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("18"));

        let strict = create_vote_validator(ValidationRules {
            min_age: 21,
            required_fields: vec![],
        });
        let result = strict.validate(Some(&Voter::new("v1", "A", 20)));
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("21"));
    }

    #[test]
    fn fractional_and_negative_ages() {
        let voter = Voter {
            age: Some(17.5),
            ..Voter::example1()
        };
        assert_eq!(
            standard().validate(Some(&voter)),
            Validation::invalid("must be 18 years old")
        );

        let voter = Voter {
            age: Some(-1.0),
            ..Voter::example1()
        };
        assert!(!standard().validate(Some(&voter)).valid);
    }

    #[test]
    fn missing_voter() {
        assert_eq!(
            standard().validate(None),
            Validation::invalid("null or undefined")
        );
    }

    #[test]
    fn first_missing_field_wins() {
        let voter = Voter {
            id: "v1".into(),
            name: String::new(),
            age: None,
        };
        assert_eq!(
            standard().validate(Some(&voter)),
            Validation::invalid("Missing required field: name")
        );

        let voter = Voter {
            age: None,
            ..Voter::new("v1", "A", 0)
        };
        assert_eq!(
            standard().validate(Some(&voter)),
            Validation::invalid("Missing required field: age")
        );
    }

    #[test]
    fn unknown_required_field() {
        let validator = create_vote_validator(ValidationRules {
            min_age: 18,
            required_fields: vec!["id".into(), "address".into()],
        });
        assert_eq!(
            validator.validate(Some(&Voter::example1())),
            Validation::invalid("Missing required field: address")
        );
    }

    #[test]
    fn age_not_required() {
        // Without an age there is nothing to compare against the minimum.
        let validator = create_vote_validator(ValidationRules {
            min_age: 18,
            required_fields: vec!["id".into()],
        });
        let voter = Voter {
            age: None,
            ..Voter::example1()
        };
        assert!(validator.validate(Some(&voter)).valid);
    }

    #[test]
    fn rules_deserialize() {
        let rules: ValidationRules =
            serde_json::from_str(r#"{"minAge": 18, "requiredFields": ["id", "name", "age"]}"#)
                .unwrap();
        assert_eq!(rules, ValidationRules::default());
    }
}
