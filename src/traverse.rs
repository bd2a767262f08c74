//! Total traversal over untyped JSON
//!
//! Vendor payloads are deeply nested arrays whose shape is only loosely
//! stable. Fields are reached by walking a fixed path of indices and keys;
//! any step that does not apply to the value at hand ends the walk with
//! `None` instead of an error.

use serde_json::Value;

/// One step of a path: an array index or an object key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Index(usize),
    Key(&'static str),
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

impl From<&'static str> for Step {
    fn from(key: &'static str) -> Self {
        Step::Key(key)
    }
}

/// Walk `path` from `root`, returning the value at its end if every step applies
pub fn traverse<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    path.iter().try_fold(root, |value, step| match (step, value) {
        (Step::Index(i), Value::Array(items)) => items.get(*i),
        (Step::Key(k), Value::Object(map)) => map.get(*k),
        _ => None,
    })
}

/// Same as [`traverse`] for paths made only of indices
pub fn traverse_indices<'a>(root: &'a Value, path: &[usize]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |value, &i| value.as_array().and_then(|items| items.get(i)))
}

/// Render a value as text: strings verbatim, null as empty, everything else as JSON
pub fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Read a value as a finite number, accepting numeric strings; anything else is 0
pub fn number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Whether a value counts as empty: null, false, zero, or an empty string, array or object
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
