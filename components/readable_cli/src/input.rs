//! JSON input conversion
//!
//! Maps JSON onto [`Value`]: integral numbers that fit `i64` become
//! integers, other numbers floats, arrays lists and objects keyed
//! containers. Object keys written as canonical decimal integers become
//! integer keys.

use readable::{Array, Frame, Key, Value};
use serde_json::Value as Json;

use crate::error::{CliError, CliResult};

/// Parse JSON text into a value
pub fn parse_value(text: &str) -> CliResult<Value> {
    let json: Json = serde_json::from_str(text)?;
    Ok(value_from_json(&json))
}

/// Parse a JSON array of frame objects
pub fn parse_frames(text: &str) -> CliResult<Vec<Frame>> {
    match parse_value(text)? {
        Value::Array(entries) if entries.is_list() => {
            Ok(entries.values().map(Frame::from_value).collect())
        }
        _ => Err(CliError::Input(
            "a stack trace must be a JSON array of frame objects".to_string(),
        )),
    }
}

/// Convert a JSON document into a value
pub fn value_from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Boolean(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::Array(Array::list(items.iter().map(value_from_json).collect())),
        Json::Object(map) => {
            let mut array = Array::new();
            for (key, value) in map {
                array.insert(key_from_json(key), value_from_json(value));
            }
            Value::Array(array)
        }
    }
}

fn key_from_json(key: &str) -> Key {
    match key.parse::<i64>() {
        Ok(n) if n.to_string() == key => Key::Int(n),
        _ => Key::Str(key.to_string()),
    }
}
