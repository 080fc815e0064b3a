use chrono::Utc;
use std::time::Instant;

use crate::core::calculator::Calculator;
use crate::core::email::EmailFormatChecker;
use crate::core::string_rule::StringRule;
use crate::core::tax::TaxCalculator;
use crate::domain::model::{Case, CaseResult, Outcome, Rule, RunReport, Status, Suite};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_required_field};

/// Runs one case against its rule.
///
/// Rule failures (blank text, negative amounts, ...) are outcomes, not
/// errors; only a case missing a field its rule needs fails here.
pub fn evaluate(case: &Case) -> Result<Outcome> {
    let input = case.input.as_deref();

    let outcome = match case.rule {
        Rule::Email => Outcome::Flag(EmailFormatChecker::is_valid_email(input)),
        Rule::Present => Outcome::Flag(EmailFormatChecker::is_present(input)),
        Rule::NonBlank => Outcome::Flag(EmailFormatChecker::is_non_blank(input)),
        Rule::ContainsAt => Outcome::Flag(EmailFormatChecker::contains_at(input)),
        Rule::ContainsDot => Outcome::Flag(EmailFormatChecker::contains_dot(input)),
        Rule::RequireNonBlank => {
            status_of(StringRule::require_non_blank(input).map(|()| Outcome::Status(Status::Accepted)))?
        }
        Rule::Palindrome => status_of(StringRule::is_palindrome(input).map(Outcome::Flag))?,
        Rule::TotalWithTax | Rule::TaxAmount => {
            let amount = *validate_required_field("amount", &case.amount)?;
            let rate = *validate_required_field("rate", &case.rate)?;
            let result = if case.rule == Rule::TotalWithTax {
                TaxCalculator::total_with_tax(amount, rate)
            } else {
                TaxCalculator::tax_amount(amount, rate)
            };
            status_of(result.map(Outcome::Value))?
        }
        Rule::Add | Rule::Subtract | Rule::Multiply => {
            let a = *validate_required_field("a", &case.a)?;
            let b = *validate_required_field("b", &case.b)?;
            let result = match case.rule {
                Rule::Add => Calculator::add(a, b),
                Rule::Subtract => Calculator::subtract(a, b),
                _ => Calculator::multiply(a, b),
            };
            status_of(result.map(|n| Outcome::Value(n as f64)))?
        }
        Rule::Divide => {
            let a = *validate_required_field("a", &case.a)?;
            let b = *validate_required_field("b", &case.b)?;
            status_of(Calculator::divide(a, b).map(Outcome::Value))?
        }
        Rule::IsEven => {
            let n = *validate_required_field("a", &case.a)?;
            Outcome::Flag(Calculator::is_even(n))
        }
    };

    Ok(outcome)
}

/// Folds rule errors into `Outcome::Status`, passes anything else through.
fn status_of(result: Result<Outcome>) -> Result<Outcome> {
    match result {
        Ok(outcome) => Ok(outcome),
        Err(err) => match Status::from_error(&err) {
            Some(status) => Ok(Outcome::Status(status)),
            None => Err(err),
        },
    }
}

pub struct SuiteRunner {
    tolerance_override: Option<f64>,
}

impl SuiteRunner {
    pub fn new() -> Self {
        Self {
            tolerance_override: None,
        }
    }

    /// Same bounds as a suite file's `tolerance`; negative or NaN is rejected.
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        validate_range("tolerance", tolerance, 0.0, 1.0)?;
        Ok(Self {
            tolerance_override: Some(tolerance),
        })
    }

    pub fn run(&self, suite: &Suite) -> RunReport {
        let started_at = Utc::now();
        let start = Instant::now();
        let tolerance = self.tolerance_override.unwrap_or_else(|| suite.tolerance());

        tracing::info!(
            "Running suite '{}' ({} cases, tolerance {})",
            suite.suite.name,
            suite.cases.len(),
            tolerance
        );

        let results: Vec<CaseResult> = suite
            .cases
            .iter()
            .map(|case| Self::run_case(case, tolerance))
            .collect();

        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;

        tracing::info!(
            "Suite '{}' finished: {} passed, {} failed",
            suite.suite.name,
            passed,
            failed
        );

        RunReport {
            suite: suite.suite.name.clone(),
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            total: results.len(),
            passed,
            failed,
            results,
        }
    }

    fn run_case(case: &Case, tolerance: f64) -> CaseResult {
        match evaluate(case) {
            Ok(actual) => {
                let passed = actual.matches(&case.expect, tolerance);
                if passed {
                    tracing::debug!("✅ {} [{}] -> {}", case.name, case.rule, actual);
                } else {
                    tracing::warn!(
                        "❌ {} [{}]: expected {}, got {}",
                        case.name,
                        case.rule,
                        case.expect,
                        actual
                    );
                }
                CaseResult {
                    name: case.name.clone(),
                    rule: case.rule,
                    expected: case.expect,
                    actual: Some(actual),
                    passed,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("❌ {} [{}]: {}", case.name, case.rule, e);
                CaseResult {
                    name: case.name.clone(),
                    rule: case.rule,
                    expected: case.expect,
                    actual: None,
                    passed: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}
