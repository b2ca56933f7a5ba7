//! Formatter configuration.
//!
//! A [`Config`] can be passed explicitly to a [`Readable`](crate::Readable),
//! or installed as the process-wide configuration read by the free
//! functions of this crate. The shared configuration is read-mostly: it is
//! typically written once at startup and read freely afterwards.

use std::collections::BTreeMap;
use std::path::{Path, MAIN_SEPARATOR};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReadableError, Result};
use crate::severity::DEFAULT_SEVERITIES;

/// Default truncation length for string values
pub const DEFAULT_MAX_STRING_LENGTH: usize = 120;

/// Default nesting limit for composite values
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// File used to locate the project root.
const ROOT_MARKER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

/// Levels between [`ROOT_MARKER`] and the project root.
const ROOT_MARKER_DEPTH: usize = 3;

static SHARED: LazyLock<RwLock<Arc<Config>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Config::default())));

/// Formatter configuration.
///
/// # Examples
///
/// ```
/// use readable::Config;
///
/// let config = Config::from_json(r#"{"max_string_length": 10}"#).unwrap();
/// assert_eq!(config.max_string_length, 10);
/// assert_eq!(config.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strings longer than this many characters are truncated
    pub max_string_length: usize,
    /// Absolute path of the project root, with a trailing separator
    pub root_path: String,
    /// Deepest composite nesting the formatter descends into
    pub max_depth: usize,
    /// Severity code to name table
    pub severity_names: BTreeMap<i64, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            root_path: default_root_path(),
            max_depth: DEFAULT_MAX_DEPTH,
            severity_names: DEFAULT_SEVERITIES
                .iter()
                .map(|&(code, name)| (code, name.to_string()))
                .collect(),
        }
    }
}

impl Config {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| ReadableError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReadableError::InvalidConfig(e.to_string()))
    }

    /// Check the configuration for values the formatter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ReadableError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the string truncation length
    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }

    /// Set the project root path
    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Project root resolved from [`ROOT_MARKER`], with a trailing separator.
pub fn default_root_path() -> String {
    match Path::new(ROOT_MARKER).ancestors().nth(ROOT_MARKER_DEPTH) {
        Some(root) => format!("{}{}", root.display(), MAIN_SEPARATOR),
        None => String::new(),
    }
}

/// Snapshot of the process-wide configuration
pub fn current() -> Config {
    Config::clone(&SHARED.read())
}

/// Handle to the process-wide configuration, without copying it
pub(crate) fn shared() -> Arc<Config> {
    Arc::clone(&SHARED.read())
}

/// Replace the process-wide configuration
pub fn set(config: Config) {
    debug!(
        max_string_length = config.max_string_length,
        root_path = %config.root_path,
        max_depth = config.max_depth,
        "readable configuration replaced"
    );
    *SHARED.write() = Arc::new(config);
}

/// Modify the process-wide configuration in place
pub fn update<F: FnOnce(&mut Config)>(f: F) {
    let mut guard = SHARED.write();
    let config = Arc::make_mut(&mut guard);
    f(config);
    debug!(
        max_string_length = config.max_string_length,
        root_path = %config.root_path,
        max_depth = config.max_depth,
        "readable configuration updated"
    );
}

/// Set the process-wide string truncation length
pub fn set_max_string_length(max_string_length: usize) {
    update(|config| config.max_string_length = max_string_length);
}

/// Set the process-wide project root path
pub fn set_root_path(root_path: impl Into<String>) {
    let root_path = root_path.into();
    update(|config| config.root_path = root_path);
}

/// Restore the process-wide configuration to its defaults
pub fn reset() {
    set(Config::default());
}
