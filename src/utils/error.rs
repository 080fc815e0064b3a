use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a piece of text was rejected by a non-blank guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputProblem {
    Absent,
    Blank,
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::Absent => write!(f, "input cannot be absent"),
            InputProblem::Blank => write!(f, "input cannot be empty or whitespace-only"),
        }
    }
}

/// Which argument of a tax calculation was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxArgument {
    Amount,
    Rate,
}

impl fmt::Display for TaxArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxArgument::Amount => write!(f, "amount"),
            TaxArgument::Rate => write!(f, "tax rate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Rule,
    Config,
    Io,
}

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: InputProblem },

    #[error("Invalid argument: {argument} cannot be negative (got {value})")]
    InvalidArgument { argument: TaxArgument, value: f64 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },
}

impl RuleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RuleError::InvalidInput { .. }
            | RuleError::InvalidArgument { .. }
            | RuleError::DivisionByZero
            | RuleError::Overflow { .. } => ErrorCategory::Rule,
            RuleError::IoError(_) => ErrorCategory::Io,
            RuleError::TomlError(_)
            | RuleError::CsvError(_)
            | RuleError::SerializationError(_)
            | RuleError::ConfigError { .. }
            | RuleError::ValidationError { .. } => ErrorCategory::Config,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Rule => "Check the input values passed to the rule",
            ErrorCategory::Config => "Check the suite file syntax and required fields",
            ErrorCategory::Io => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_names_the_argument() {
        let amount = RuleError::InvalidArgument {
            argument: TaxArgument::Amount,
            value: -1.0,
        };
        let rate = RuleError::InvalidArgument {
            argument: TaxArgument::Rate,
            value: -1.0,
        };

        assert!(amount.to_string().contains("amount"));
        assert!(rate.to_string().contains("tax rate"));
        assert_ne!(amount.to_string(), rate.to_string());
    }

    #[test]
    fn test_category() {
        let err = RuleError::InvalidInput {
            reason: InputProblem::Blank,
        };
        assert_eq!(err.category(), ErrorCategory::Rule);

        let err = RuleError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);

        let err = RuleError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
