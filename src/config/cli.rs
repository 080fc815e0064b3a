use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "input-rules")]
#[command(about = "Email, palindrome and tax rules with a table-driven scenario runner")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a scenario suite (.toml or .csv) and report the results
    Run {
        /// Path to the suite file
        file: PathBuf,

        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Override the suite's float comparison tolerance
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Check whether text looks like an email address
    Email {
        text: String,
    },

    /// Check whether text is a palindrome, ignoring whitespace and case
    Palindrome {
        text: String,
    },

    /// Compute tax and total for an amount
    Tax {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
    },
}
