use crate::domain::model::{Case, Outcome, Rule, Suite, SuiteInfo};
use crate::domain::ports::SuiteSource;
use crate::utils::error::{Result, RuleError};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Marks the empty string in the `input` column; a bare empty field means absent.
pub const EMPTY_TEXT_MARKER: &str = "''";

/// A suite stored as a CSV table with header
/// `name,rule,input,amount,rate,a,b,expect`.
///
/// The file has no suite header, so the suite takes its name from the file stem.
#[derive(Debug, Clone)]
pub struct CsvSuiteFile {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    rule: Rule,
    input: Option<String>,
    amount: Option<f64>,
    rate: Option<f64>,
    a: Option<i64>,
    b: Option<i64>,
    expect: String,
}

impl CsvRow {
    fn into_case(self) -> Result<Case> {
        let expect: Outcome = self.expect.parse().map_err(|e: RuleError| {
            RuleError::ValidationError {
                field: format!("case '{}'.expect", self.name),
                message: e.to_string(),
            }
        })?;

        let input = self.input.map(|text| {
            if text == EMPTY_TEXT_MARKER {
                String::new()
            } else {
                text
            }
        });

        Ok(Case {
            name: self.name,
            rule: self.rule,
            input,
            amount: self.amount,
            rate: self.rate,
            a: self.a,
            b: self.b,
            expect,
        })
    }
}

impl CsvSuiteFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse<R: Read>(name: &str, reader: R) -> Result<Suite> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut cases = Vec::new();
        for row in csv_reader.deserialize::<CsvRow>() {
            cases.push(row?.into_case()?);
        }

        let suite = Suite {
            suite: SuiteInfo {
                name: name.to_string(),
                description: None,
                tolerance: None,
            },
            cases,
        };
        suite.validate()?;
        Ok(suite)
    }
}

impl SuiteSource for CsvSuiteFile {
    fn load_suite(&self) -> Result<Suite> {
        tracing::debug!("Loading CSV suite from {}", self.path.display());
        let name = self
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("csv-suite")
            .to_string();
        let file = std::fs::File::open(&self.path)?;
        Self::parse(&name, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Status;
    use std::io::Write;
    use tempfile::Builder;

    const TABLE: &str = "\
name,rule,input,amount,rate,a,b,expect
valid,email,usuario@dominio.com,,,,,true
absent,email,,,,,,false
empty,email,'',,,,,false
blank guard,require_non_blank,\"   \",,,,,invalid_input
total,total_with_tax,,99.99,10,,,109.989
negative amount,total_with_tax,,-1,10,,,invalid_amount
halves,divide,,,,1,4,0.25
";

    #[test]
    fn test_parse_table() {
        let suite = CsvSuiteFile::parse("table", TABLE.as_bytes()).unwrap();

        assert_eq!(suite.suite.name, "table");
        assert_eq!(suite.cases.len(), 7);
        assert_eq!(suite.cases[0].expect, Outcome::Flag(true));
        assert_eq!(suite.cases[1].input, None);
        assert_eq!(suite.cases[2].input.as_deref(), Some(""));
        assert_eq!(suite.cases[3].input.as_deref(), Some("   "));
        assert_eq!(suite.cases[3].expect, Outcome::Status(Status::InvalidInput));
        assert_eq!(suite.cases[4].amount, Some(99.99));
        assert_eq!(suite.cases[6].a, Some(1));
    }

    #[test]
    fn test_bad_expectation_is_rejected() {
        let table = "name,rule,input,amount,rate,a,b,expect\nx,email,a@b.c,,,,,perhaps\n";
        assert!(matches!(
            CsvSuiteFile::parse("bad", table.as_bytes()),
            Err(RuleError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_load_from_file_uses_stem_as_name() {
        let mut temp_file = Builder::new().prefix("emails").suffix(".csv").tempfile().unwrap();
        temp_file.write_all(TABLE.as_bytes()).unwrap();

        let suite = CsvSuiteFile::new(temp_file.path()).load_suite().unwrap();
        assert!(suite.suite.name.starts_with("emails"));
    }
}
