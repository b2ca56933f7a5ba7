//! Callable descriptions.

use crate::value::{CallableRef, Value};
use crate::Readable;

impl Readable {
    /// Describe something invocable.
    ///
    /// Named functions render as `name()`, invokable records as
    /// `{Type}->__invoke()`. Closures, method references and every other
    /// value fall back to [`format_value`](Self::format_value).
    ///
    /// # Examples
    ///
    /// ```
    /// use readable::{CallableRef, Readable, Value};
    ///
    /// let readable = Readable::default();
    /// let is_array = Value::Callable(CallableRef::function("is_array"));
    ///
    /// assert_eq!(readable.describe_callable(&is_array), "is_array()");
    /// ```
    pub fn describe_callable(&self, callable: &Value) -> String {
        match callable {
            Value::Callable(CallableRef::NamedFunction(name)) => format!("{}()", name),
            Value::Callable(CallableRef::InvokableRecord(class)) => {
                format!("{{{}}}->__invoke()", class)
            }
            other => self.format_value(other),
        }
    }
}
