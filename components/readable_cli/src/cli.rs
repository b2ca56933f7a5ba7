//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Render JSON input as human-readable diagnostic strings
#[derive(Debug, Parser)]
#[command(name = "readable", version, about)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Truncate strings longer than this many characters
    #[arg(long, global = true)]
    pub max_string_length: Option<usize>,

    /// Project root stripped from relative paths
    #[arg(long, global = true)]
    pub root_path: Option<String>,

    /// What to render
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Format a JSON value
    Value {
        /// JSON text, or `-` for stdin
        json: String,
    },
    /// Format the entries of a JSON array or object
    Values {
        /// JSON text, or `-` for stdin
        json: String,
    },
    /// Print the type name of a JSON value
    Type {
        /// JSON text, or `-` for stdin
        json: String,
    },
    /// Print the name of a severity code
    Severity {
        /// Severity code
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },
    /// Render a stack trace from a JSON array of frame objects
    Trace {
        /// JSON file, or `-` for stdin
        file: PathBuf,

        /// Leave call arguments out
        #[arg(long)]
        no_params: bool,

        /// Show paths relative to the project root
        #[arg(long)]
        relative: bool,
    },
}
