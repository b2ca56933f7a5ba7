//! Value formatting.
//!
//! [`Readable`] renders values to display strings. It carries its own
//! [`Config`]; [`Readable::shared`] takes a snapshot of the process-wide
//! configuration.

use std::fmt::Write;
use std::sync::Arc;

use tracing::warn;

use crate::config::{self, Config};
use crate::error::{ReadableError, Result};
use crate::value::{Array, CallableRef, Record, Resource, Value};

/// Significant digits used for floats.
const FLOAT_PRECISION: usize = 6;

/// Written in place of a value nested past the depth limit.
const TOO_DEEP_MARKER: &str = "{too deeply nested}";

/// What to do when nesting passes the depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overflow {
    Fail,
    Mark,
}

/// Formatter bound to an explicit configuration.
///
/// Cloning is cheap: the configuration is shared, not copied.
///
/// # Examples
///
/// ```
/// use readable::{Config, Readable, Value};
///
/// let readable = Readable::new(Config::default().with_max_string_length(10));
///
/// assert_eq!(readable.format_value(&Value::from("0123456789")), r#""0123456789""#);
/// assert_eq!(
///     readable.format_value(&Value::from("01234567890")),
///     r#""0123456789...[11]""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Readable {
    config: Arc<Config>,
}

impl Readable {
    /// Create a formatter with the given configuration
    pub fn new(config: Config) -> Self {
        Readable {
            config: Arc::new(config),
        }
    }

    /// Create a formatter over the process-wide configuration as it is now.
    ///
    /// Later changes to the shared configuration do not affect it.
    pub fn shared() -> Self {
        Readable {
            config: config::shared(),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Format any value.
    ///
    /// Never fails: a value nested past
    /// [`Config::max_depth`](crate::Config::max_depth) is written as
    /// `{too deeply nested}`.
    pub fn format_value(&self, value: &Value) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail and Overflow::Mark never errors.
        let _ = self.write_value(&mut out, value, 0, Overflow::Mark);
        out
    }

    /// Format any value, failing on nesting past the depth limit
    pub fn try_format_value(&self, value: &Value) -> Result<String> {
        let mut out = String::new();
        self.write_value(&mut out, value, 0, Overflow::Fail)?;
        Ok(out)
    }

    /// Format the entries of a composite container, comma separated.
    ///
    /// List-like containers show values only; anything else shows
    /// `key => value` pairs. The container itself counts as one level
    /// toward [`Config::max_depth`](crate::Config::max_depth), as it does
    /// for [`format_value`](Readable::format_value).
    pub fn format_values(&self, array: &Array) -> String {
        let mut out = String::new();
        let _ = self.write_values(&mut out, array, 1, Overflow::Mark);
        out
    }

    /// Format the entries of a composite container, failing on nesting past the depth limit
    pub fn try_format_values(&self, array: &Array) -> Result<String> {
        let mut out = String::new();
        self.write_values(&mut out, array, 1, Overflow::Fail)?;
        Ok(out)
    }

    /// Name of a value's type.
    ///
    /// Records report their class; everything else reports a fixed name.
    pub fn type_name(&self, value: &Value) -> String {
        let name = match value {
            Value::Boolean(_) => "bool",
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Null => "null",
            Value::Resource(Resource::Open(_)) => "resource",
            Value::Resource(Resource::Closed) => "unknown",
            Value::Callable(CallableRef::NamedFunction(_)) => "string",
            Value::Callable(CallableRef::InvokableRecord(class)) => return class.clone(),
            Value::Callable(_) => "callable",
            Value::Record(Record { class: Some(class) }) => return class.clone(),
            Value::Record(Record { class: None }) => "object",
            Value::Closure(_) => "Closure",
            Value::Unknown(_) => "unknown",
        };
        name.to_string()
    }

    fn write_value(
        &self,
        out: &mut String,
        value: &Value,
        depth: usize,
        overflow: Overflow,
    ) -> Result<()> {
        match value {
            Value::Null => out.push_str("null"),
            Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => {
                let _ = write!(out, "{}", n);
            }
            Value::Float(n) => out.push_str(&format_float(*n)),
            Value::String(s) => self.write_string(out, s),
            Value::Array(array) => {
                if depth >= self.config.max_depth {
                    return self.overflow(out, overflow);
                }
                out.push('[');
                self.write_values(out, array, depth + 1, overflow)?;
                out.push(']');
            }
            Value::Closure(site) => {
                let _ = write!(
                    out,
                    "{{Closure in {}({})}}",
                    self.normalize_path(site.declaration_file()),
                    site.declaration_line()
                );
            }
            Value::Record(Record { class: Some(class) }) => {
                let _ = write!(out, "{{{}}}", class);
            }
            Value::Record(Record { class: None }) => out.push_str("{object}"),
            Value::Resource(Resource::Open(kind)) => {
                let _ = write!(out, "{{{}}}", kind);
            }
            Value::Resource(Resource::Closed) => out.push_str("{unknown type}"),
            Value::Callable(callable) => match callable {
                CallableRef::BoundMethod { receiver, method } => {
                    let _ = write!(out, "{{{}}}->{}()", receiver, method);
                }
                CallableRef::StaticMethod { class, method } => {
                    let _ = write!(out, "{}::{}()", class, method);
                }
                CallableRef::NamedFunction(name) => self.write_string(out, name),
                CallableRef::InvokableRecord(class) => {
                    let _ = write!(out, "{{{}}}", class);
                }
            },
            Value::Unknown(kind) => {
                let _ = write!(out, "{{{}}}", kind.to_lowercase());
            }
        }
        Ok(())
    }

    fn write_values(
        &self,
        out: &mut String,
        array: &Array,
        depth: usize,
        overflow: Overflow,
    ) -> Result<()> {
        let keyed = !array.is_list();
        for (index, (key, value)) in array.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            if keyed {
                self.write_value(out, &Value::from(key.clone()), depth, overflow)?;
                out.push_str(" => ");
            }
            self.write_value(out, value, depth, overflow)?;
        }
        Ok(())
    }

    fn write_string(&self, out: &mut String, s: &str) {
        let length = s.chars().count();
        out.push('"');
        if length > self.config.max_string_length {
            let truncated: String = s.chars().take(self.config.max_string_length).collect();
            push_escaped(out, &truncated);
            let _ = write!(out, "...[{}]", length);
        } else {
            push_escaped(out, s);
        }
        out.push('"');
    }

    fn overflow(&self, out: &mut String, overflow: Overflow) -> Result<()> {
        let max_depth = self.config.max_depth;
        match overflow {
            Overflow::Fail => Err(ReadableError::TooDeeplyNested { max_depth }),
            Overflow::Mark => {
                warn!(max_depth, "value nested past the depth limit");
                out.push_str(TOO_DEEP_MARKER);
                Ok(())
            }
        }
    }
}

/// Backslash-escape quotes, backslashes and NUL.
fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' | '\'' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
}

/// Format a float with six significant digits.
///
/// The result is prefixed with `~` unless it parses back to exactly the
/// same value.
pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "~NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "~Inf" } else { "~-Inf" }.to_string();
    }

    let formatted = format_general(n, FLOAT_PRECISION);
    match formatted.parse::<f64>() {
        Ok(parsed) if parsed == n => formatted,
        _ => format!("~{}", formatted),
    }
}

/// `%.{precision}g` for finite values.
fn format_general(n: f64, precision: usize) -> String {
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_fraction_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, n)).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
