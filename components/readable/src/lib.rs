//! Human-readable diagnostic strings for runtime values.
//!
//! This crate turns values, callable references, errors and stack traces
//! into stable display strings for debug logging, test-failure messages
//! and exception summaries.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of the values that can be formatted
//! - [`classify`] / [`Kind`] - Semantic kind of a value
//! - [`format_value`] / [`format_values`] - Value and collection formatting
//! - [`type_name`] - Name of a value's type
//! - [`describe_callable`] - Description of something invocable
//! - [`describe_error`] / [`describe_severity`] - Error summaries
//! - [`render_trace`] - Aligned, numbered stack-trace listings
//! - [`normalize_path`] - Project-relative paths
//! - [`Config`] / [`Readable`] - Explicit and process-wide configuration
//!
//! # Examples
//!
//! ```
//! use readable::{Array, Readable, Value};
//!
//! let readable = Readable::default();
//!
//! assert_eq!(readable.format_value(&Value::Integer(123)), "123");
//! assert_eq!(readable.format_value(&Value::Float(0.12345678)), "~0.123457");
//!
//! let list = Value::Array(Array::list(vec![
//!     Value::Integer(1),
//!     Value::Integer(2),
//!     Value::Integer(3),
//! ]));
//! assert_eq!(readable.format_value(&list), "[1, 2, 3]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
mod callable;
mod error;
mod format;
mod path;
pub mod severity;
mod source;
mod trace;
mod value;

pub use config::Config;
pub use error::{ErrorInput, ReadableError, Result, Throwable, ThrowableFamily};
pub use format::Readable;
pub use source::{CallType, Frame};
pub use trace::TraceSource;
pub use value::{
    classify, Array, CallableRef, ClosureSite, DeclarationSite, Key, Kind, Record, Resource, Value,
};

/// Formats a value using the process-wide configuration.
///
/// See [`Readable::format_value`].
pub fn format_value(value: &Value) -> String {
    Readable::shared().format_value(value)
}

/// Formats the entries of a composite container using the process-wide configuration.
///
/// See [`Readable::format_values`].
pub fn format_values(array: &Array) -> String {
    Readable::shared().format_values(array)
}

/// Returns the type name of a value.
///
/// See [`Readable::type_name`].
pub fn type_name(value: &Value) -> String {
    Readable::shared().type_name(value)
}

/// Describes a callable, falling back to [`format_value`].
///
/// See [`Readable::describe_callable`].
pub fn describe_callable(callable: &Value) -> String {
    Readable::shared().describe_callable(callable)
}

/// Describes an error, or a severity code.
///
/// See [`Readable::describe_error`].
pub fn describe_error<'a>(error: impl Into<ErrorInput<'a>>) -> String {
    Readable::shared().describe_error(error)
}

/// Returns the name of a severity code, or `{unknown error-code}`.
pub fn describe_severity(code: i64) -> String {
    Readable::shared().describe_severity(code)
}

/// Renders a stack trace using the process-wide configuration.
///
/// See [`Readable::render_trace`].
pub fn render_trace<'a>(
    source: impl Into<TraceSource<'a>>,
    with_params: bool,
    relative_paths: bool,
) -> String {
    Readable::shared().render_trace(source, with_params, relative_paths)
}

/// Strips the configured project root from the front of a path.
pub fn normalize_path(path: &str) -> String {
    Readable::shared().normalize_path(path)
}
