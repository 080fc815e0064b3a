use clap::Parser;
use input_rules::utils::error::ErrorCategory;
use input_rules::utils::logger;
use input_rules::{
    suite_source, CliConfig, Command, EmailFormatChecker, RuleError, StringRule, SuiteRunner,
    TaxCalculator,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // JSON reports go to stdout, so logs switch to structured stderr output
    if matches!(config.command, Command::Run { json: true, .. }) {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(config.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);

            match e.category() {
                ErrorCategory::Rule => ExitCode::from(1),
                ErrorCategory::Config | ErrorCategory::Io => ExitCode::from(2),
            }
        }
    }
}

/// Returns whether the command's check passed.
fn run(command: Command) -> Result<bool, RuleError> {
    match command {
        Command::Run {
            file,
            json,
            tolerance,
        } => {
            tracing::info!("📁 Loading suite from: {}", file.display());
            let suite = suite_source(&file)?.load_suite()?;

            let runner = match tolerance {
                Some(tolerance) => SuiteRunner::with_tolerance(tolerance)?,
                None => SuiteRunner::new(),
            };
            let report = runner.run(&suite);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for result in &report.results {
                    let mark = if result.passed { "✅" } else { "❌" };
                    let actual = match (&result.actual, &result.error) {
                        (Some(actual), _) => actual.to_string(),
                        (None, Some(error)) => error.clone(),
                        (None, None) => "-".to_string(),
                    };
                    println!(
                        "{} {} [{}] expected {}, got {}",
                        mark, result.name, result.rule, result.expected, actual
                    );
                }
                println!(
                    "{}: {} passed, {} failed ({} ms)",
                    report.suite, report.passed, report.failed, report.duration_ms
                );
            }

            Ok(report.all_passed())
        }
        Command::Email { text } => {
            let valid = EmailFormatChecker::is_valid_email(Some(&text));
            println!("{}", valid);
            Ok(valid)
        }
        Command::Palindrome { text } => {
            let palindrome = StringRule::is_palindrome(Some(&text))?;
            println!("{}", palindrome);
            Ok(palindrome)
        }
        Command::Tax { amount, rate } => {
            let tax = TaxCalculator::tax_amount(amount, rate)?;
            let total = TaxCalculator::total_with_tax(amount, rate)?;
            println!("tax: {}", tax);
            println!("total: {}", total);
            Ok(true)
        }
    }
}
