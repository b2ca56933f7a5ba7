//! Error types and error summaries.
//!
//! This module provides [`ReadableError`], the failures this crate can
//! report, and [`Throwable`], the error record summarized by
//! [`Readable::describe_error`].

use thiserror::Error;
use tracing::trace;

use crate::severity::UNKNOWN_SEVERITY;
use crate::source::Frame;
use crate::{Readable, Value};

/// Errors reported by the fallible formatting entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadableError {
    /// Composite nesting went past the configured limit
    #[error("value is too deeply nested (limit {max_depth})")]
    TooDeeplyNested {
        /// The configured limit
        max_depth: usize,
    },
    /// Configuration could not be parsed or is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for fallible operations of this crate
pub type Result<T> = std::result::Result<T, ReadableError>;

/// Broad family an error record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrowableFamily {
    /// Recoverable exception
    Exception,
    /// Internal or engine error
    Error,
    /// Anything else that can be thrown; summarized by type name only
    Other,
}

/// An error with message, source location and captured call stack.
///
/// # Examples
///
/// ```
/// use readable::{Throwable, describe_error};
///
/// let error = Throwable::new("Exception", "got hello").with_location("/app/a.php", 38);
/// assert_eq!(
///     describe_error(&error),
///     "Exception with message: got hello in /app/a.php(38)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Throwable {
    /// Concrete type name
    pub class: String,
    /// Family the type belongs to
    pub family: ThrowableFamily,
    /// Severity code, for errors raised from a severity-coded diagnostic
    pub severity: Option<i64>,
    /// Human-readable message
    pub message: String,
    /// File where the error was created
    pub file: Option<String>,
    /// Line where the error was created
    pub line: u32,
    /// Call stack at the point of creation
    pub trace: Vec<Frame>,
}

impl Throwable {
    /// Create an exception, recording the caller's location as its source.
    #[track_caller]
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Throwable {
            class: class.into(),
            family: ThrowableFamily::Exception,
            severity: None,
            message: message.into(),
            file: Some(location.file().to_string()),
            line: location.line(),
            trace: Vec::new(),
        }
    }

    /// Summarize a Rust error, using its short type name as the class.
    #[track_caller]
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Throwable::new(short_type_name::<E>(), error.to_string())
    }

    /// Set the family
    pub fn with_family(mut self, family: ThrowableFamily) -> Self {
        self.family = family;
        self
    }

    /// Attach a severity code
    pub fn with_severity(mut self, severity: i64) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Override the source location
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = line;
        self
    }

    /// Drop the source location
    pub fn without_location(mut self) -> Self {
        self.file = None;
        self.line = 0;
        self
    }

    /// Attach a captured call stack
    pub fn with_trace(mut self, trace: Vec<Frame>) -> Self {
        self.trace = trace;
        self
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Input accepted by [`Readable::describe_error`].
#[derive(Debug, Clone, Copy)]
pub enum ErrorInput<'a> {
    /// A bare severity code
    Code(i64),
    /// An error record
    Error(&'a Throwable),
    /// Any other value
    Other(&'a Value),
}

impl From<i64> for ErrorInput<'_> {
    fn from(code: i64) -> Self {
        ErrorInput::Code(code)
    }
}

impl<'a> From<&'a Throwable> for ErrorInput<'a> {
    fn from(error: &'a Throwable) -> Self {
        ErrorInput::Error(error)
    }
}

impl<'a> From<&'a Value> for ErrorInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Integer(code) => ErrorInput::Code(*code),
            other => ErrorInput::Other(other),
        }
    }
}

impl Readable {
    /// Describe an error, or a severity code.
    ///
    /// A severity code is described by [`describe_severity`](Self::describe_severity).
    /// An error is described by its type name, followed by the severity
    /// name when it carries one, then by its message and source location
    /// unless it belongs to [`ThrowableFamily::Other`]. Any other value is
    /// described by its [`type_name`](Self::type_name).
    pub fn describe_error<'a>(&self, error: impl Into<ErrorInput<'a>>) -> String {
        let error = match error.into() {
            ErrorInput::Code(code) => return self.describe_severity(code),
            ErrorInput::Other(value) => return self.type_name(value),
            ErrorInput::Error(error) => error,
        };

        let mut type_name = error.class.clone();

        if let Some(severity) = error.severity {
            type_name = format!("{}: {}", type_name, self.describe_severity(severity));
        }

        if error.family == ThrowableFamily::Other {
            return type_name;
        }

        let message = if error.message.is_empty() {
            "{none}"
        } else {
            error.message.as_str()
        };

        let file = match error.file.as_deref() {
            Some(file) if !file.is_empty() => format!("{}({})", file, error.line),
            _ => "{no file}".to_string(),
        };

        format!("{} with message: {} in {}", type_name, message, file)
    }

    /// Name of a severity code, or `{unknown error-code}`
    pub fn describe_severity(&self, code: i64) -> String {
        match self.config().severity_names.get(&code) {
            Some(name) => name.clone(),
            None => {
                trace!(code, "unrecognized severity code");
                UNKNOWN_SEVERITY.to_string()
            }
        }
    }
}
