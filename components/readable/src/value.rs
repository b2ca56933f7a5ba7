//! Value representation and classification.
//!
//! This module provides the [`Value`] enum covering every kind of value the
//! formatter understands, and [`classify`], the total mapping from a value
//! to its [`Kind`].

use std::fmt;
use std::rc::Rc;

use tracing::warn;

/// Reflection capability for closure-like values.
///
/// Implemented by whatever can report where a closure was declared. The
/// formatter only ever reads these two facts.
///
/// # Examples
///
/// ```
/// use readable::{ClosureSite, DeclarationSite};
///
/// let site = ClosureSite::new("/app/src/main.rs", 22);
/// assert_eq!(site.declaration_file(), "/app/src/main.rs");
/// assert_eq!(site.declaration_line(), 22);
/// ```
pub trait DeclarationSite {
    /// Absolute path of the file declaring the closure
    fn declaration_file(&self) -> &str;
    /// Line on which the closure declaration starts
    fn declaration_line(&self) -> u32;
}

/// Plain-data declaration site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureSite {
    /// Declaring file
    pub file: String,
    /// Declaration start line
    pub line: u32,
}

impl ClosureSite {
    /// Create a new declaration site
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        ClosureSite {
            file: file.into(),
            line,
        }
    }

    /// Capture the caller's location as a declaration site.
    #[track_caller]
    pub fn here() -> Self {
        let location = std::panic::Location::caller();
        ClosureSite::new(location.file(), location.line())
    }
}

impl DeclarationSite for ClosureSite {
    fn declaration_file(&self) -> &str {
        &self.file
    }

    fn declaration_line(&self) -> u32 {
        self.line
    }
}

/// Key of a composite container entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Key::Int(key)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::Str(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key::Str(key)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Integer(n),
            Key::Str(s) => Value::String(s),
        }
    }
}

/// Ordered composite container.
///
/// Covers both list-like containers (keys `0..n-1` in order) and
/// mapping-like ones (arbitrary keys). Entries keep insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    entries: Vec<(Key, Value)>,
}

impl Array {
    /// Create an empty container
    pub fn new() -> Self {
        Array::default()
    }

    /// Create a list-like container keyed `0..n-1`
    pub fn list(values: Vec<Value>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Key::Int(index as i64), value))
            .collect();
        Array { entries }
    }

    /// Create a container from explicit key/value pairs
    pub fn map<K: Into<Key>>(pairs: Vec<(K, Value)>) -> Self {
        let entries = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Array { entries }
    }

    /// Append an entry, replacing the value of an existing key in place
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append a value under the next integer key.
    ///
    /// Returns `false`, leaving the container unchanged, when the largest
    /// integer key is already `i64::MAX`.
    pub fn push(&mut self, value: Value) -> bool {
        let largest = self
            .entries
            .iter()
            .filter_map(|(k, _)| match k {
                Key::Int(n) => Some(*n),
                Key::Str(_) => None,
            })
            .max();
        let next = match largest {
            Some(n) => match n.checked_add(1) {
                Some(next) => next.max(0),
                None => {
                    warn!("next integer key is out of range; value not appended");
                    return false;
                }
            },
            None => 0,
        };
        self.entries.push((Key::Int(next), value));
        true
    }

    /// Look up a value by key
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a value by string key
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| matches!(k, Key::Str(s) if s == key))
            .map(|(_, v)| v)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = &(Key, Value)> {
        self.entries.iter()
    }

    /// Iterate values in order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Whether the keys are exactly `0..n-1` in order.
    ///
    /// ```
    /// use readable::{Array, Value};
    ///
    /// assert!(Array::list(vec![Value::Null]).is_list());
    /// assert!(!Array::map(vec![(1i64, Value::Null)]).is_list());
    /// ```
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(index, (key, _))| *key == Key::Int(index as i64))
    }
}

/// Instance of a structured type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Concrete type name, or `None` for a plain anonymous record
    pub class: Option<String>,
}

impl Record {
    /// Create a record of the named type
    pub fn new(class: impl Into<String>) -> Self {
        Record {
            class: Some(class.into()),
        }
    }

    /// Create a plain record with no declared type
    pub fn plain() -> Self {
        Record { class: None }
    }
}

/// Reference to something invocable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallableRef {
    /// Method bound to a receiver instance
    BoundMethod {
        /// Type name of the receiver
        receiver: String,
        /// Method name
        method: String,
    },
    /// Static method of a type
    StaticMethod {
        /// Declaring type name
        class: String,
        /// Method name
        method: String,
    },
    /// Free function resolved by name
    NamedFunction(String),
    /// Record exposing an invocation operator
    InvokableRecord(String),
}

impl CallableRef {
    /// Bound method reference
    pub fn bound(receiver: impl Into<String>, method: impl Into<String>) -> Self {
        CallableRef::BoundMethod {
            receiver: receiver.into(),
            method: method.into(),
        }
    }

    /// Static method reference
    pub fn static_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        CallableRef::StaticMethod {
            class: class.into(),
            method: method.into(),
        }
    }

    /// Named function reference
    pub fn function(name: impl Into<String>) -> Self {
        CallableRef::NamedFunction(name.into())
    }

    /// Invokable record reference
    pub fn invokable(class: impl Into<String>) -> Self {
        CallableRef::InvokableRecord(class.into())
    }

    /// Whether this reference is method-shaped (bound or static).
    pub fn is_method(&self) -> bool {
        matches!(
            self,
            CallableRef::BoundMethod { .. } | CallableRef::StaticMethod { .. }
        )
    }
}

/// Handle to an external resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Open handle of the named kind
    Open(String),
    /// Handle whose kind can no longer be queried
    Closed,
}

/// Represents any value the formatter accepts.
///
/// # Examples
///
/// ```
/// use readable::{Kind, Value, classify};
///
/// assert_eq!(classify(&Value::Null), Kind::Null);
/// assert_eq!(classify(&Value::from("text")), Kind::String);
/// assert_eq!(classify(&Value::Float(1.5)), Kind::Float);
/// ```
#[derive(Clone)]
pub enum Value {
    /// Absence of a value
    Null,
    /// Boolean (true or false)
    Boolean(bool),
    /// Signed integer
    Integer(i64),
    /// IEEE 754 double-precision floating point
    Float(f64),
    /// Text
    String(String),
    /// Composite container
    Array(Array),
    /// Structured type instance
    Record(Record),
    /// Closure, introspected through its declaration site
    Closure(Rc<dyn DeclarationSite>),
    /// Callable reference
    Callable(CallableRef),
    /// Resource handle
    Resource(Resource),
    /// Anything not otherwise classifiable, tagged with its kind name
    Unknown(String),
}

impl Value {
    /// Closure declared at the given site
    pub fn closure(file: impl Into<String>, line: u32) -> Self {
        Value::Closure(Rc::new(ClosureSite::new(file, line)))
    }

    /// Record of the named type
    pub fn record(class: impl Into<String>) -> Self {
        Value::Record(Record::new(class))
    }

    /// Open resource of the named kind
    pub fn resource(kind: impl Into<String>) -> Self {
        Value::Resource(Resource::Open(kind.into()))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(a) => f.debug_tuple("Array").field(a).finish(),
            Value::Record(r) => f.debug_tuple("Record").field(r).finish(),
            Value::Closure(site) => f
                .debug_struct("Closure")
                .field("file", &site.declaration_file())
                .field("line", &site.declaration_line())
                .finish(),
            Value::Callable(c) => f.debug_tuple("Callable").field(c).finish(),
            Value::Resource(r) => f.debug_tuple("Resource").field(r).finish(),
            Value::Unknown(kind) => f.debug_tuple("Unknown").field(kind).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Callable(a), Value::Callable(b)) => a == b,
            (Value::Resource(a), Value::Resource(b)) => a == b,
            (Value::Unknown(a), Value::Unknown(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array::list(values)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<CallableRef> for Value {
    fn from(callable: CallableRef) -> Self {
        Value::Callable(callable)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Semantic kind of a value, for formatting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// null
    Null,
    /// boolean
    Boolean,
    /// integer
    Integer,
    /// float
    Float,
    /// string
    String,
    /// composite container
    Array,
    /// typed or plain record
    Record,
    /// closure
    Closure,
    /// bound or static method reference
    Callable,
    /// open resource handle
    Resource,
    /// closed resource handle
    ClosedResource,
    /// anything else
    Unknown,
}

impl Kind {
    /// Lowercase kind name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Record => "record",
            Kind::Closure => "closure",
            Kind::Callable => "callable",
            Kind::Resource => "resource",
            Kind::ClosedResource => "resource (closed)",
            Kind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the semantic kind of a value.
///
/// Method references are the only callable kind; a named function
/// reference is text-shaped and an invokable record is record-shaped, so
/// they classify as [`Kind::String`] and [`Kind::Record`].
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Callable(callable) if callable.is_method() => Kind::Callable,
        Value::Callable(CallableRef::NamedFunction(_)) => Kind::String,
        Value::Callable(_) => Kind::Record,
        Value::Null => Kind::Null,
        Value::Boolean(_) => Kind::Boolean,
        Value::Integer(_) => Kind::Integer,
        Value::Float(_) => Kind::Float,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Record(_) => Kind::Record,
        Value::Closure(_) => Kind::Closure,
        Value::Resource(Resource::Open(_)) => Kind::Resource,
        Value::Resource(Resource::Closed) => Kind::ClosedResource,
        Value::Unknown(_) => Kind::Unknown,
    }
}
