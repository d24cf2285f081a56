//! Purpose: Include/exclude selector lists handed to the accessibility engine as run context.
//! Exports: `RunContext`.
//! Role: Run-options payload built from validated selectors.
//! Invariants: Every selector inside a context already satisfies the selector grammar.
//! Invariants: Empty lists are omitted on output; unknown keys are rejected on input.
//! Invariants: Context shape errors are `InvalidContext`; selector errors stay `Malformed`.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};
use crate::core::parse;
use crate::core::selector::Selector;
use crate::json;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunContext {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    include: Vec<Selector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    exclude: Vec<Selector>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, selector: Selector) -> Self {
        self.include.push(selector);
        self
    }

    pub fn exclude(mut self, selector: Selector) -> Self {
        self.exclude.push(selector);
        self
    }

    pub fn included(&self) -> &[Selector] {
        &self.include
    }

    pub fn excluded(&self) -> &[Selector] {
        &self.exclude
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if !self.include.is_empty() {
            map.insert("include".to_string(), selector_list(&self.include));
        }
        if !self.exclude.is_empty() {
            map.insert("exclude".to_string(), selector_list(&self.exclude));
        }
        Value::Object(map)
    }

    /// Parse JSON text, keeping selector failures typed as `Malformed`.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let value = json::parse::from_str(input)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let Value::Object(map) = value else {
            return Err(Error::new(ErrorKind::InvalidContext)
                .with_message("run context must be a JSON object"));
        };
        let mut context = RunContext::new();
        for (key, entry) in map {
            let target = match key.as_str() {
                "include" => &mut context.include,
                "exclude" => &mut context.exclude,
                other => {
                    return Err(Error::new(ErrorKind::InvalidContext)
                        .with_message(format!("unknown run context key `{other}`"))
                        .with_hint("Only `include` and `exclude` are accepted."));
                }
            };
            let Value::Array(items) = entry else {
                return Err(Error::new(ErrorKind::InvalidContext)
                    .with_message(format!("run context `{key}` must be an array of selectors")));
            };
            for (index, item) in items.iter().enumerate() {
                let selector = parse::from_value(item)
                    .map_err(|err| err.with_hint(format!("in run context `{key}[{index}]`")))?;
                target.push(selector);
            }
        }
        Ok(context)
    }
}

fn selector_list(selectors: &[Selector]) -> Value {
    Value::Array(selectors.iter().map(Selector::to_value).collect())
}
