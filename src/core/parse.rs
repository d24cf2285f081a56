//! Purpose: Turn untrusted JSON into a `Selector`, or a typed `Malformed` error.
//! Exports: `from_str`, `from_value`, `from_token`.
//! Role: Grammar entry point for selectors arriving as JSON text or values.
//! Invariants: Shape is fully checked before any level is extracted; no partial results.
//! Invariants: Level order in the output matches input order.
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::error::{Error, ErrorKind};
use crate::core::selector::{FrameLevel, Selector};
use crate::core::token::TokenView;
use crate::core::validate::{first_violation, is_legal_selector_root};
use crate::json;

pub fn from_str(input: &str) -> Result<Selector, Error> {
    let value = json::parse::from_str(input)?;
    from_value(&value)
}

pub fn from_value(value: &Value) -> Result<Selector, Error> {
    from_token(TokenView::of(value))
}

pub fn from_token(token: TokenView<'_>) -> Result<Selector, Error> {
    if !is_legal_selector_root(token) {
        return Err(rejection(token));
    }
    let levels = match token {
        TokenView::String(text) => vec![FrameLevel::Plain(text.to_string())],
        TokenView::Array(items) => items.iter().filter_map(extract_level).collect(),
        TokenView::Other(_) => return Err(rejection(token)),
    };
    trace!(levels = levels.len(), "parsed selector");
    Ok(Selector::from_checked_levels(levels))
}

// Only called on elements that already passed `is_legal_frame_level`.
fn extract_level(item: &Value) -> Option<FrameLevel> {
    match item {
        Value::String(text) => Some(FrameLevel::Plain(text.clone())),
        Value::Array(steps) => Some(FrameLevel::Shadow(
            steps
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )),
        _ => None,
    }
}

fn rejection(token: TokenView<'_>) -> Error {
    let Some(violation) = first_violation(token) else {
        return Error::new(ErrorKind::Internal)
            .with_message("selector rejected without a grammar violation");
    };
    debug!(
        reason = %violation.reason,
        position = %violation.position,
        found = %violation.found,
        "rejected malformed selector"
    );
    Error::malformed(violation.reason, violation.position).with_found(violation.found)
}

#[cfg(test)]
mod tests {
    use super::{from_str, from_value};
    use crate::core::error::{ErrorKind, MalformedReason, Position};
    use crate::core::selector::FrameLevel;
    use crate::core::token::TokenKind;
    use serde_json::json;

    #[test]
    fn bare_string_is_single_plain_level() {
        let selector = from_str("\"simple string selector\"").expect("selector");
        assert_eq!(
            selector.levels(),
            &[FrameLevel::plain("simple string selector")]
        );
    }

    #[test]
    fn mixed_levels_preserve_order() {
        let selector = from_value(&json!([["a", "b"], "c", ["d", "e"]])).expect("selector");
        assert_eq!(
            selector.levels(),
            &[
                FrameLevel::shadow(["a", "b"]),
                FrameLevel::plain("c"),
                FrameLevel::shadow(["d", "e"]),
            ]
        );
    }

    #[test]
    fn single_step_shadow_array_stays_a_chain() {
        let selector = from_value(&json!([["only"]])).expect("selector");
        assert_eq!(selector.levels(), &[FrameLevel::shadow(["only"])]);
    }

    #[test]
    fn rejection_carries_reason_and_position() {
        let err = from_value(&json!(["selector", ["selector", []]])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert_eq!(err.reason(), Some(MalformedReason::InvalidShadowStepElement));
        assert_eq!(err.position(), Some(Position::step(1, 1)));
        assert_eq!(err.found(), Some(TokenKind::Array));
    }

    #[test]
    fn empty_root_string_is_rejected() {
        let err = from_str("\"\"").unwrap_err();
        assert_eq!(err.reason(), Some(MalformedReason::EmptyString));
        assert_eq!(err.position(), Some(Position::ROOT));
    }

    #[test]
    fn invalid_json_text_is_a_syntax_error() {
        let err = from_str("[\"a\",").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.reason(), None);
    }
}
