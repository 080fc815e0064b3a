use crate::domain::model::{Case, Suite};
use crate::utils::error::{Result, RuleError};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const SUITE_EXTENSIONS: &[&str] = &["toml", "csv"];

/// Returns the lower-cased extension of a suite file if it is one we can load.
pub fn validate_suite_extension(field_name: &str, path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| RuleError::ValidationError {
            field: field_name.to_string(),
            message: format!("File has no extension: {}", path.display()),
        })?;

    if !SUITE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(RuleError::ValidationError {
            field: field_name.to_string(),
            message: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                SUITE_EXTENSIONS.join(", ")
            ),
        });
    }

    Ok(extension)
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RuleError::ValidationError {
        field: field_name.to_string(),
        message: "Field is required".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RuleError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RuleError::ValidationError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN fails too.
    if !(value >= min && value <= max) {
        return Err(RuleError::ValidationError {
            field: field_name.to_string(),
            message: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

impl Validate for Case {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("case.name", &self.name)?;

        let field = |name: &str| format!("case '{}'.{}", self.name, name);

        // Absent `input` is a legitimate text case, so only numeric fields are required.
        if self.rule.takes_tax_arguments() {
            validate_required_field(&field("amount"), &self.amount)?;
            validate_required_field(&field("rate"), &self.rate)?;
        } else if self.rule.takes_two_integers() {
            validate_required_field(&field("a"), &self.a)?;
            validate_required_field(&field("b"), &self.b)?;
        } else if !self.rule.takes_text() {
            validate_required_field(&field("a"), &self.a)?;
        }

        Ok(())
    }
}

impl Validate for Suite {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("suite.name", &self.suite.name)?;

        if let Some(tolerance) = self.suite.tolerance {
            validate_range("suite.tolerance", tolerance, 0.0, 1.0)?;
        }

        validate_positive_number("case", self.cases.len(), 1)?;

        let mut seen = HashSet::new();
        for case in &self.cases {
            case.validate()?;
            if !seen.insert(case.name.as_str()) {
                return Err(RuleError::ValidationError {
                    field: "case.name".to_string(),
                    message: format!("Duplicate case name: {}", case.name),
                });
            }
        }

        Ok(())
    }
}
