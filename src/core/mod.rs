// Selector data model, grammar checks, and the JSON conversions in both directions.
pub mod error;
pub mod parse;
pub mod selector;
pub mod serialize;
pub mod token;
pub mod validate;
