pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{suite_source, CsvSuiteFile, TomlSuiteFile};

pub use self::core::{
    calculator::Calculator,
    email::EmailFormatChecker,
    runner::{evaluate, SuiteRunner},
    string_rule::StringRule,
    tax::TaxCalculator,
};
pub use domain::model::{Case, CaseResult, Outcome, Rule, RunReport, Status, Suite, SuiteInfo};
pub use domain::ports::SuiteSource;
pub use utils::error::{InputProblem, Result, RuleError, TaxArgument};
