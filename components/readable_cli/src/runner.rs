//! Command execution
//!
//! The Runner owns the formatter configuration built from the command
//! line and turns each command into its output text.

use std::fs;
use std::io::Read;
use std::path::Path;

use readable::{Array, Config, Readable, Value};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::{CliError, CliResult};
use crate::input;

/// Executes parsed commands
#[derive(Debug, Clone, Default)]
pub struct Runner {
    readable: Readable,
}

impl Runner {
    /// Create a runner with an explicit configuration
    pub fn new(config: Config) -> Self {
        Runner {
            readable: Readable::new(config),
        }
    }

    /// Build the configuration from the command line.
    ///
    /// The configuration file is read first; explicit options override it.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Config::from_json(&fs::read_to_string(path)?)?
            }
            None => Config::default(),
        };

        if let Some(max_string_length) = cli.max_string_length {
            config.max_string_length = max_string_length;
        }
        if let Some(root_path) = &cli.root_path {
            config.root_path = root_path.clone();
        }

        Ok(Runner::new(config))
    }

    /// The formatter in use
    pub fn readable(&self) -> &Readable {
        &self.readable
    }

    /// Run a command and return its output
    pub fn run(&self, command: &Command) -> CliResult<String> {
        match command {
            Command::Value { json } => {
                let value = input::parse_value(&read_text(json)?)?;
                Ok(self.readable.format_value(&value))
            }
            Command::Values { json } => match input::parse_value(&read_text(json)?)? {
                Value::Array(array) => Ok(self.readable.format_values(&array)),
                other => Ok(self
                    .readable
                    .format_values(&Array::list(vec![other]))),
            },
            Command::Type { json } => {
                let value = input::parse_value(&read_text(json)?)?;
                Ok(self.readable.type_name(&value))
            }
            Command::Severity { code } => Ok(self.readable.describe_severity(*code)),
            Command::Trace {
                file,
                no_params,
                relative,
            } => {
                let frames = input::parse_frames(&read_file(file)?)?;
                Ok(self.readable.render_trace(&frames, !no_params, *relative))
            }
        }
    }
}

/// Inline text, or stdin for `-`
fn read_text(arg: &str) -> CliResult<String> {
    if arg == "-" {
        read_stdin()
    } else {
        Ok(arg.to_string())
    }
}

/// File contents, or stdin for `-`
fn read_file(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        read_stdin()
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn read_stdin() -> CliResult<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(CliError::Io)?;
    Ok(text)
}
