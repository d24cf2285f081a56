//! Purpose: Immutable selector value addressing one element through frames and shadow roots.
//! Exports: `Selector`, `FrameLevel`.
//! Role: Shared data model consumed by the parser, serializer, and run-context builder.
//! Invariants: A `Selector` holds at least one level; every level holds non-empty text.
//! Invariants: Only validating constructors produce a `Selector`; it is never mutated after.
//! Notes: Levels read outer to inner; the last level is the target.
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::core::error::{Error, ErrorKind, Position};
use crate::core::validate::is_legal_text;
use crate::core::{parse, serialize};

/// One browsing-context boundary, or the final target when it is the last level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameLevel {
    /// CSS selector resolved in the current context without crossing a shadow root.
    Plain(String),
    /// Steps piercing successive shadow hosts; the last step addresses the element.
    Shadow(Vec<String>),
}

impl FrameLevel {
    pub fn plain(text: impl Into<String>) -> Self {
        FrameLevel::Plain(text.into())
    }

    pub fn shadow<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FrameLevel::Shadow(steps.into_iter().map(Into::into).collect())
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self, FrameLevel::Shadow(_))
    }

    /// Selector steps at this level; a plain level has exactly one.
    pub fn steps(&self) -> &[String] {
        match self {
            FrameLevel::Plain(text) => std::slice::from_ref(text),
            FrameLevel::Shadow(steps) => steps,
        }
    }

    fn check(&self, level: usize) -> Result<(), Error> {
        match self {
            FrameLevel::Plain(text) if !is_legal_text(text) => {
                Err(argument_error("selector text must not be empty", Position::level(level)))
            }
            FrameLevel::Plain(_) => Ok(()),
            FrameLevel::Shadow(steps) if steps.is_empty() => Err(argument_error(
                "shadow chain must have at least one step",
                Position::level(level),
            )),
            FrameLevel::Shadow(steps) => match steps.iter().position(|step| !is_legal_text(step)) {
                Some(step) => Err(argument_error(
                    "shadow step must not be empty",
                    Position::step(level, step),
                )),
                None => Ok(()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    levels: Vec<FrameLevel>,
}

#[allow(clippy::len_without_is_empty)]
impl Selector {
    /// Single-context selector.
    pub fn new(target: impl Into<String>) -> Result<Self, Error> {
        Self::from_levels(vec![FrameLevel::Plain(target.into())])
    }

    /// `frames` are iframe selectors, outermost first; `target` is resolved in the innermost.
    pub fn from_target_and_frames<I, S>(target: impl Into<String>, frames: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = target.into();
        let mut levels: Vec<FrameLevel> = frames
            .into_iter()
            .map(|frame| FrameLevel::Plain(frame.into()))
            .collect();
        if !is_legal_text(&target) {
            return Err(argument_error(
                "target selector must not be empty",
                Position::level(levels.len()),
            ));
        }
        levels.push(FrameLevel::Plain(target));
        Self::from_levels(levels)
    }

    /// Each group becomes one level. Multi-step groups are shadow chains;
    /// a single-step group is a plain selector at that level.
    pub fn from_frame_shadow_groups<I, G, S>(groups: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut levels = Vec::new();
        for (index, group) in groups.into_iter().enumerate() {
            let mut steps: Vec<String> = group.into_iter().map(Into::into).collect();
            let level = match steps.len() {
                0 => {
                    return Err(argument_error(
                        "frame group must have at least one selector",
                        Position::level(index),
                    ));
                }
                1 => FrameLevel::Plain(steps.remove(0)),
                _ => FrameLevel::Shadow(steps),
            };
            levels.push(level);
        }
        Self::from_levels(levels)
    }

    pub fn from_levels(levels: Vec<FrameLevel>) -> Result<Self, Error> {
        if levels.is_empty() {
            return Err(argument_error(
                "selector must have at least one level",
                Position::ROOT,
            ));
        }
        for (index, level) in levels.iter().enumerate() {
            level.check(index)?;
        }
        Ok(Self { levels })
    }

    /// Caller guarantees the levels already passed the grammar check.
    pub(crate) fn from_checked_levels(levels: Vec<FrameLevel>) -> Self {
        debug_assert!(!levels.is_empty());
        Self { levels }
    }

    pub fn levels(&self) -> &[FrameLevel] {
        &self.levels
    }

    pub fn target(&self) -> &FrameLevel {
        // Non-empty by construction.
        &self.levels[self.levels.len() - 1]
    }

    /// Levels to descend through before resolving the target.
    pub fn frames(&self) -> &[FrameLevel] {
        &self.levels[..self.levels.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when resolution crosses any frame or shadow boundary.
    pub fn is_nested(&self) -> bool {
        self.levels.len() > 1 || self.target().is_shadow()
    }

    pub fn to_value(&self) -> Value {
        serialize::to_value(self)
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse::from_str(input)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize::to_string(self))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize::to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        parse::from_value(&value).map_err(D::Error::custom)
    }
}

fn argument_error(message: &str, position: Position) -> Error {
    Error::new(ErrorKind::InvalidArgument)
        .with_message(message)
        .with_position(position)
}
