//! Purpose: Single error type shared by parsing, construction, and the CLI.
//! Exports: `Error`, `ErrorKind`, `MalformedReason`, `Position`, `to_exit_code`.
//! Role: Typed failure surface; every rejection names its reason and location.
//! Invariants: `Malformed` errors always carry a `MalformedReason` and a `Position`.
//! Invariants: Run-context shape errors use `InvalidContext`, never `Malformed`.
//! Invariants: Exit codes are stable once published.
use std::error::Error as StdError;
use std::fmt;

use crate::core::token::TokenKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    Syntax,
    Malformed,
    InvalidArgument,
    InvalidContext,
    Io,
}

/// Why a JSON value does not match the selector grammar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MalformedReason {
    WrongRootType,
    EmptyArray,
    EmptyString,
    InvalidFrameLevelElement,
    InvalidShadowStepElement,
}

impl MalformedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MalformedReason::WrongRootType => "wrong-root-type",
            MalformedReason::EmptyArray => "empty-array",
            MalformedReason::EmptyString => "empty-string",
            MalformedReason::InvalidFrameLevelElement => "invalid-frame-level-element",
            MalformedReason::InvalidShadowStepElement => "invalid-shadow-step-element",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            MalformedReason::WrongRootType => "selector must be a string or an array",
            MalformedReason::EmptyArray => "selector arrays must not be empty",
            MalformedReason::EmptyString => "selector strings must not be empty",
            MalformedReason::InvalidFrameLevelElement => {
                "frame level must be a string or an array of strings"
            }
            MalformedReason::InvalidShadowStepElement => "shadow step must be a non-empty string",
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a sub-token inside a selector document.
///
/// `level` indexes the root array, `step` indexes a shadow array inside that
/// level. Rendered as `$`, `$[1]`, or `$[1][0]`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub level: Option<usize>,
    pub step: Option<usize>,
}

impl Position {
    pub const ROOT: Position = Position {
        level: None,
        step: None,
    };

    pub fn level(level: usize) -> Self {
        Self {
            level: Some(level),
            step: None,
        }
    }

    pub fn step(level: usize, step: usize) -> Self {
        Self {
            level: Some(level),
            step: Some(step),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        if let Some(level) = self.level {
            write!(f, "[{level}]")?;
        }
        if let Some(step) = self.step {
            write!(f, "[{step}]")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    reason: Option<MalformedReason>,
    message: Option<String>,
    hint: Option<String>,
    position: Option<Position>,
    found: Option<TokenKind>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            reason: None,
            message: None,
            hint: None,
            position: None,
            found: None,
            source: None,
        }
    }

    /// Grammar rejection at `position`.
    pub fn malformed(reason: MalformedReason, position: Position) -> Self {
        let mut err = Self::new(ErrorKind::Malformed);
        err.reason = Some(reason);
        err.position = Some(position);
        err.with_message(reason.describe())
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn reason(&self) -> Option<MalformedReason> {
        self.reason
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn found(&self) -> Option<TokenKind> {
        self.found
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == ErrorKind::Malformed
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_found(mut self, found: TokenKind) -> Self {
        self.found = Some(found);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(reason) = self.reason {
            write!(f, " ({reason})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(position) = self.position {
            write!(f, " (at: {position})")?;
        }
        if let Some(found) = self.found {
            write!(f, " (found: {found})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::Syntax => 3,
        ErrorKind::Malformed => 4,
        ErrorKind::InvalidArgument => 5,
        ErrorKind::InvalidContext => 6,
        ErrorKind::Io => 8,
    }
}
