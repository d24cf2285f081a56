//! Purpose: Define the stable public Rust API boundary for axe-selector.
//! Exports: Selector model, JSON conversions, errors, and the run-context payload.
//! Role: Public, additive-only surface used by the CLI and by embedding crates.
//! Invariants: Selectors reachable through this module are always well formed.

mod context;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind, MalformedReason, Position};
pub use crate::core::parse::{from_str as parse, from_value as parse_value};
pub use crate::core::selector::{FrameLevel, Selector};
pub use crate::core::serialize::{
    to_string as serialize, to_string_pretty as serialize_pretty, to_value as serialize_value,
};
pub use crate::core::token::{TokenKind, TokenView};
pub use context::RunContext;
