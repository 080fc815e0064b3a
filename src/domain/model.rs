use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{RuleError, TaxArgument};

pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// The operation a scenario case exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Email,
    Present,
    NonBlank,
    ContainsAt,
    ContainsDot,
    RequireNonBlank,
    Palindrome,
    TotalWithTax,
    TaxAmount,
    Add,
    Subtract,
    Multiply,
    Divide,
    IsEven,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Email => "email",
            Rule::Present => "present",
            Rule::NonBlank => "non_blank",
            Rule::ContainsAt => "contains_at",
            Rule::ContainsDot => "contains_dot",
            Rule::RequireNonBlank => "require_non_blank",
            Rule::Palindrome => "palindrome",
            Rule::TotalWithTax => "total_with_tax",
            Rule::TaxAmount => "tax_amount",
            Rule::Add => "add",
            Rule::Subtract => "subtract",
            Rule::Multiply => "multiply",
            Rule::Divide => "divide",
            Rule::IsEven => "is_even",
        }
    }

    pub fn takes_text(&self) -> bool {
        matches!(
            self,
            Rule::Email
                | Rule::Present
                | Rule::NonBlank
                | Rule::ContainsAt
                | Rule::ContainsDot
                | Rule::RequireNonBlank
                | Rule::Palindrome
        )
    }

    pub fn takes_tax_arguments(&self) -> bool {
        matches!(self, Rule::TotalWithTax | Rule::TaxAmount)
    }

    pub fn takes_two_integers(&self) -> bool {
        matches!(
            self,
            Rule::Add | Rule::Subtract | Rule::Multiply | Rule::Divide
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-numeric, non-boolean results a rule can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Accepted,
    InvalidInput,
    InvalidAmount,
    InvalidRate,
    DivisionByZero,
    Overflow,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Accepted => "accepted",
            Status::InvalidInput => "invalid_input",
            Status::InvalidAmount => "invalid_amount",
            Status::InvalidRate => "invalid_rate",
            Status::DivisionByZero => "division_by_zero",
            Status::Overflow => "overflow",
        }
    }

    /// Maps a rule failure to its status. Loader and IO errors have none.
    pub fn from_error(err: &RuleError) -> Option<Self> {
        match err {
            RuleError::InvalidInput { .. } => Some(Status::InvalidInput),
            RuleError::InvalidArgument {
                argument: TaxArgument::Amount,
                ..
            } => Some(Status::InvalidAmount),
            RuleError::InvalidArgument {
                argument: TaxArgument::Rate,
                ..
            } => Some(Status::InvalidRate),
            RuleError::DivisionByZero => Some(Status::DivisionByZero),
            RuleError::Overflow { .. } => Some(Status::Overflow),
            _ => None,
        }
    }
}

impl FromStr for Status {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Status::Accepted),
            "invalid_input" => Ok(Status::InvalidInput),
            "invalid_amount" => Ok(Status::InvalidAmount),
            "invalid_rate" => Ok(Status::InvalidRate),
            "division_by_zero" => Ok(Status::DivisionByZero),
            "overflow" => Ok(Status::Overflow),
            other => Err(RuleError::ConfigError {
                message: format!("Unknown status: {}", other),
            }),
        }
    }
}

/// What a rule produced for one case, or what a case expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Flag(bool),
    Value(f64),
    Status(Status),
}

impl Outcome {
    /// Floats compare within `tolerance`; everything else compares exactly.
    pub fn matches(&self, expected: &Outcome, tolerance: f64) -> bool {
        match (self, expected) {
            (Outcome::Value(actual), Outcome::Value(expected)) => {
                (actual - expected).abs() <= tolerance
            }
            (actual, expected) => actual == expected,
        }
    }
}

impl FromStr for Outcome {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "true" => return Ok(Outcome::Flag(true)),
            "false" => return Ok(Outcome::Flag(false)),
            _ => {}
        }
        if let Ok(value) = s.parse::<f64>() {
            return Ok(Outcome::Value(value));
        }
        s.parse::<Status>().map(Outcome::Status)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Flag(flag) => write!(f, "{}", flag),
            Outcome::Value(value) => write!(f, "{}", value),
            Outcome::Status(status) => f.write_str(status.as_str()),
        }
    }
}

/// One literal scenario: inputs for a rule plus the expected outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub rule: Rule,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub a: Option<i64>,
    #[serde(default)]
    pub b: Option<i64>,
    pub expect: Outcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteInfo {
    pub name: String,
    pub description: Option<String>,
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suite {
    pub suite: SuiteInfo,
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn tolerance(&self) -> f64 {
        self.suite.tolerance.unwrap_or(DEFAULT_TOLERANCE)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub rule: Rule,
    pub expected: Outcome,
    pub actual: Option<Outcome>,
    pub passed: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suite: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_str() {
        assert_eq!("true".parse::<Outcome>().unwrap(), Outcome::Flag(true));
        assert_eq!(" false ".parse::<Outcome>().unwrap(), Outcome::Flag(false));
        assert_eq!("110".parse::<Outcome>().unwrap(), Outcome::Value(110.0));
        assert_eq!(
            "invalid_rate".parse::<Outcome>().unwrap(),
            Outcome::Status(Status::InvalidRate)
        );
        assert!("maybe".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_outcome_matches_with_tolerance() {
        let actual = Outcome::Value(109.989);
        assert!(actual.matches(&Outcome::Value(109.99), 0.01));
        assert!(!actual.matches(&Outcome::Value(109.99), 0.0001));
        assert!(!Outcome::Flag(true).matches(&Outcome::Value(1.0), 1.0));
        assert!(Outcome::Status(Status::Accepted).matches(&Outcome::Status(Status::Accepted), 0.0));
    }

    #[test]
    fn test_status_from_error() {
        let err = RuleError::InvalidArgument {
            argument: TaxArgument::Rate,
            value: -1.0,
        };
        assert_eq!(Status::from_error(&err), Some(Status::InvalidRate));

        let err = RuleError::ConfigError {
            message: "x".to_string(),
        };
        assert_eq!(Status::from_error(&err), None);
    }
}
