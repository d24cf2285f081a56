//! Purpose: Borrowed view over a JSON value, narrowed to the shapes the grammar cares about.
//! Exports: `TokenView`, `TokenKind`.
//! Role: Decouples validation and parsing from `serde_json::Value` matching.
//! Invariants: Views never copy the underlying value.
use std::fmt;

use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Null => "null",
            TokenKind::Bool => "boolean",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Array => "array",
            TokenKind::Object => "object",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenView<'a> {
    String(&'a str),
    Array(&'a [Value]),
    Other(TokenKind),
}

impl<'a> TokenView<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(text) => TokenView::String(text),
            Value::Array(items) => TokenView::Array(items),
            Value::Null => TokenView::Other(TokenKind::Null),
            Value::Bool(_) => TokenView::Other(TokenKind::Bool),
            Value::Number(_) => TokenView::Other(TokenKind::Number),
            Value::Object(_) => TokenView::Other(TokenKind::Object),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            TokenView::String(_) => TokenKind::String,
            TokenView::Array(_) => TokenKind::Array,
            TokenView::Other(kind) => *kind,
        }
    }
}

impl<'a> From<&'a Value> for TokenView<'a> {
    fn from(value: &'a Value) -> Self {
        TokenView::of(value)
    }
}
