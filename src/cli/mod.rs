//! CLI module for stringgen
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate <MODEL>` - Generate Swift accessors from a model document
//! - `check <MODEL>` - Validate every table without generating anything
//! - `dump <MODEL>` - Print the assembled declaration tree (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// A table broke a model invariant
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The model document could not be read or parsed
    pub const INPUT: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an input error (exit code 2).
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::INPUT)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Typed Swift accessors for localized string tables
#[derive(Parser, Debug)]
#[command(name = "stringgen")]
#[command(version = VERSION)]
#[command(about = "Generate typed Swift accessors for localized string tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Swift source from a model document
    Generate {
        /// JSON model document (one table or `{ "tables": [...] }`)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Spaces per indentation level
        #[arg(long, value_name = "N", default_value_t = 4)]
        indent: usize,
        /// Emit bare declarations without the source file wrapper
        #[arg(long)]
        bare: bool,
    },

    /// Validate a model document without generating anything
    Check {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },

    /// Print the assembled declaration tree (debug)
    Dump {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            model,
            output,
            indent,
            bare,
        } => commands::generate(&model, output.as_deref(), indent, bare),
        Command::Check { model } => commands::check(&model),
        Command::Dump { model } => commands::dump(&model),
    }
}
