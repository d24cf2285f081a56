//! Purpose: Decode JSON text into a `serde_json::Value` with typed syntax errors.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Text-level gate in front of the selector grammar check.
//! Invariants: Failures map to `ErrorKind::Syntax` and keep the decoder error as source.
//! Invariants: Hints name the category and context, never echo the input payload.
use serde_json::Value;
use serde_json::error::Category;

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; line {}, column {}; context: {context}",
        categorize_error(err).as_str(),
        err.line(),
        err.column()
    )
}

pub fn from_str(input: &str) -> Result<Value, Error> {
    serde_json::from_str(input).map_err(|err| {
        let hint = hint_for_error(&err, "selector");
        Error::new(ErrorKind::Syntax)
            .with_message("input is not valid JSON")
            .with_hint(hint)
            .with_source(err)
    })
}
