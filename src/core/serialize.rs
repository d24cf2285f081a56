//! Purpose: Render a `Selector` back into its JSON form.
//! Exports: `to_value`, `to_string`, `to_string_pretty`.
//! Role: Structural inverse of `core::parse` on well-formed selectors.
//! Invariants: A lone plain level is emitted as a bare string, never a one-element array.
//! Invariants: Shadow levels are always arrays, even with a single step.
use serde_json::Value;

use crate::core::selector::{FrameLevel, Selector};

pub fn to_value(selector: &Selector) -> Value {
    if let [FrameLevel::Plain(text)] = selector.levels() {
        return Value::String(text.clone());
    }
    Value::Array(selector.levels().iter().map(level_value).collect())
}

pub fn to_string(selector: &Selector) -> String {
    to_value(selector).to_string()
}

pub fn to_string_pretty(selector: &Selector) -> String {
    // Value trees of strings and arrays always encode.
    serde_json::to_string_pretty(&to_value(selector)).unwrap_or_default()
}

fn level_value(level: &FrameLevel) -> Value {
    match level {
        FrameLevel::Plain(text) => Value::String(text.clone()),
        FrameLevel::Shadow(steps) => {
            Value::Array(steps.iter().cloned().map(Value::String).collect())
        }
    }
}
