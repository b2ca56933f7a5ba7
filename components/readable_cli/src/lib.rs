//! Readable CLI Library
//!
//! Provides the argument parser, JSON input conversion and the command
//! runner behind the `readable` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod input;
pub mod runner;

pub use cli::{Cli, Command};
pub use error::{CliError, CliResult};
pub use runner::Runner;
