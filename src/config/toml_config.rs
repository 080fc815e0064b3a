use crate::domain::model::Suite;
use crate::domain::ports::SuiteSource;
use crate::utils::error::{Result, RuleError};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

/// A suite stored as TOML: a `[suite]` table followed by `[[case]]` entries.
#[derive(Debug, Clone)]
pub struct TomlSuiteFile {
    path: PathBuf,
}

impl TomlSuiteFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parses and validates a suite from TOML text.
    pub fn parse(content: &str) -> Result<Suite> {
        let processed = substitute_env_vars(content)?;
        let suite: Suite = toml::from_str(&processed)?;
        suite.validate()?;
        Ok(suite)
    }
}

impl SuiteSource for TomlSuiteFile {
    fn load_suite(&self) -> Result<Suite> {
        tracing::debug!("Loading TOML suite from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RuleError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Outcome, Rule, Status};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_SUITE: &str = r#"
[suite]
name = "basic"
description = "Email and tax"
tolerance = 0.01

[[case]]
name = "valid email"
rule = "email"
input = "usuario@dominio.com"
expect = true

[[case]]
name = "null email"
rule = "email"
expect = false

[[case]]
name = "ten percent"
rule = "total_with_tax"
amount = 100
rate = 10.0
expect = 110

[[case]]
name = "negative rate"
rule = "tax_amount"
amount = 100.0
rate = -1.0
expect = "invalid_rate"
"#;

    #[test]
    fn test_parse_basic_suite() {
        let suite = TomlSuiteFile::parse(BASIC_SUITE).unwrap();

        assert_eq!(suite.suite.name, "basic");
        assert_eq!(suite.tolerance(), 0.01);
        assert_eq!(suite.cases.len(), 4);

        assert_eq!(suite.cases[0].input.as_deref(), Some("usuario@dominio.com"));
        assert_eq!(suite.cases[1].input, None);
        assert_eq!(suite.cases[2].rule, Rule::TotalWithTax);
        assert_eq!(suite.cases[2].amount, Some(100.0));
        assert_eq!(suite.cases[2].expect, Outcome::Value(110.0));
        assert_eq!(suite.cases[3].expect, Outcome::Status(Status::InvalidRate));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INPUT_RULES_TEST_EMAIL", "env@example.com");

        let content = r#"
[suite]
name = "env"

[[case]]
name = "from env"
rule = "email"
input = "${INPUT_RULES_TEST_EMAIL}"
expect = true
"#;

        let suite = TomlSuiteFile::parse(content).unwrap();
        assert_eq!(suite.cases[0].input.as_deref(), Some("env@example.com"));

        std::env::remove_var("INPUT_RULES_TEST_EMAIL");
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let content = r#"
[suite]
name = "bad"

[[case]]
name = "what"
rule = "uppercase"
expect = true
"#;
        assert!(matches!(
            TomlSuiteFile::parse(content),
            Err(RuleError::TomlError(_))
        ));
    }

    #[test]
    fn test_missing_tax_arguments_fail_validation() {
        let content = r#"
[suite]
name = "bad"

[[case]]
name = "no rate"
rule = "total_with_tax"
amount = 100.0
expect = 110.0
"#;
        assert!(matches!(
            TomlSuiteFile::parse(content),
            Err(RuleError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_SUITE.as_bytes()).unwrap();

        let suite = TomlSuiteFile::new(temp_file.path()).load_suite().unwrap();
        assert_eq!(suite.suite.name, "basic");
    }
}
