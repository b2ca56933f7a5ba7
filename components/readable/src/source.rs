//! Stack frame types.
//!
//! This module provides [`Frame`], one read-only entry of a captured call
//! stack, and [`CallType`], the way the frame's function was called.

use crate::{Array, Key, Value};

/// How a method was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallType {
    /// Static call, `Type::method`
    Static,
    /// Instance call, `Type->method`
    Instance,
}

impl CallType {
    /// Operator written between type and function name
    pub fn operator(&self) -> &'static str {
        match self {
            CallType::Static => "::",
            CallType::Instance => "->",
        }
    }

    /// Parse an operator; anything unrecognised is `None`
    pub fn from_operator(operator: &str) -> Option<Self> {
        match operator {
            "::" => Some(CallType::Static),
            "->" => Some(CallType::Instance),
            _ => None,
        }
    }
}

/// Represents a single frame in a call stack.
///
/// Every field is optional; the trace renderer substitutes defaults for
/// whatever is missing.
///
/// # Examples
///
/// ```
/// use readable::{CallType, Frame, Value};
///
/// let frame = Frame::new()
///     .with_file("/app/src/test.php", 77)
///     .with_method("TraceTest", CallType::Instance, "outer")
///     .with_args(vec![Value::from("hello")]);
///
/// assert_eq!(frame.line, Some(77));
/// assert_eq!(frame.function.as_deref(), Some("outer"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// File of the call site, or None for internal functions
    pub file: Option<String>,
    /// Line of the call site
    pub line: Option<u32>,
    /// Declaring type of the called function
    pub class: Option<String>,
    /// How the function was called
    pub call_type: Option<CallType>,
    /// Name of the called function
    pub function: Option<String>,
    /// Arguments passed to the call, keyed by position or name
    pub args: Option<Array>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Frame::default()
    }

    /// Set the call site
    pub fn with_file(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Set a free function name
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Set a method call
    pub fn with_method(
        mut self,
        class: impl Into<String>,
        call_type: CallType,
        function: impl Into<String>,
    ) -> Self {
        self.class = Some(class.into());
        self.call_type = Some(call_type);
        self.function = Some(function.into());
        self
    }

    /// Set the call arguments
    pub fn with_args(mut self, args: impl Into<Array>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Read a frame from a keyed record.
    ///
    /// Recognised keys are `file`, `line`, `class`, `type`, `function` and
    /// `args`. Missing or mistyped entries are left as `None`; this never
    /// fails.
    pub fn from_value(value: &Value) -> Self {
        let Value::Array(entry) = value else {
            return Frame::default();
        };

        let text = |key: &str| match entry.get_str(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };

        Frame {
            file: text("file"),
            line: match entry.get_str("line") {
                Some(Value::Integer(n)) => u32::try_from(*n).ok(),
                _ => None,
            },
            class: text("class"),
            call_type: text("type").and_then(|t| CallType::from_operator(&t)),
            function: text("function"),
            args: match entry.get_str("args") {
                Some(Value::Array(args)) => Some(args.clone()),
                _ => None,
            },
        }
    }

    /// Call text, e.g. `Type->function`, without arguments
    pub fn call_name(&self) -> String {
        let function = self.function.as_deref().unwrap_or("");
        match &self.class {
            Some(class) => {
                let operator = self.call_type.map(|t| t.operator()).unwrap_or("");
                format!("{}{}{}", class, operator, function)
            }
            None => function.to_string(),
        }
    }
}

impl From<&Frame> for Value {
    fn from(frame: &Frame) -> Self {
        let mut entry = Array::new();
        if let Some(file) = &frame.file {
            entry.insert(Key::from("file"), Value::from(file.as_str()));
        }
        if let Some(line) = frame.line {
            entry.insert(Key::from("line"), Value::Integer(i64::from(line)));
        }
        if let Some(function) = &frame.function {
            entry.insert(Key::from("function"), Value::from(function.as_str()));
        }
        if let Some(class) = &frame.class {
            entry.insert(Key::from("class"), Value::from(class.as_str()));
        }
        if let Some(call_type) = frame.call_type {
            entry.insert(Key::from("type"), Value::from(call_type.operator()));
        }
        if let Some(args) = &frame.args {
            entry.insert(Key::from("args"), Value::Array(args.clone()));
        }
        Value::Array(entry)
    }
}
