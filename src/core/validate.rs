//! Purpose: Legality predicates for the selector grammar.
//! Exports: `is_legal_target_string`, `is_legal_shadow_step`, `is_legal_frame_level`,
//! `is_legal_selector_root`, `is_legal_text`, `first_violation`.
//! Role: Shape check run before any value extraction; shared by parser and constructors.
//! Invariants: Predicates are total and pure; no allocation on the success path.
//! Invariants: `first_violation` returns `None` exactly when `is_legal_selector_root` is true.
use crate::core::error::{MalformedReason, Position};
use crate::core::token::{TokenKind, TokenView};

/// A grammar violation: what went wrong, where, and what token sat there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Violation {
    pub reason: MalformedReason,
    pub position: Position,
    pub found: TokenKind,
}

pub fn is_legal_text(text: &str) -> bool {
    !text.is_empty()
}

pub fn is_legal_target_string(token: TokenView<'_>) -> bool {
    matches!(token, TokenView::String(text) if is_legal_text(text))
}

pub fn is_legal_shadow_step(token: TokenView<'_>) -> bool {
    is_legal_target_string(token)
}

pub fn is_legal_frame_level(token: TokenView<'_>) -> bool {
    match token {
        TokenView::String(_) => is_legal_target_string(token),
        TokenView::Array(items) => {
            !items.is_empty()
                && items
                    .iter()
                    .all(|item| is_legal_shadow_step(TokenView::of(item)))
        }
        TokenView::Other(_) => false,
    }
}

pub fn is_legal_selector_root(token: TokenView<'_>) -> bool {
    match token {
        TokenView::String(_) => is_legal_target_string(token),
        TokenView::Array(items) => {
            !items.is_empty()
                && items
                    .iter()
                    .all(|item| is_legal_frame_level(TokenView::of(item)))
        }
        TokenView::Other(_) => false,
    }
}

/// Locate the first violation in document order.
pub fn first_violation(token: TokenView<'_>) -> Option<Violation> {
    match token {
        TokenView::String(text) => check_text(text, Position::ROOT),
        TokenView::Array(items) => {
            if items.is_empty() {
                return Some(violation(MalformedReason::EmptyArray, Position::ROOT, token));
            }
            items
                .iter()
                .enumerate()
                .find_map(|(level, item)| frame_level_violation(TokenView::of(item), level))
        }
        TokenView::Other(_) => Some(violation(
            MalformedReason::WrongRootType,
            Position::ROOT,
            token,
        )),
    }
}

fn frame_level_violation(token: TokenView<'_>, level: usize) -> Option<Violation> {
    let position = Position::level(level);
    match token {
        TokenView::String(text) => check_text(text, position),
        TokenView::Array(steps) => {
            if steps.is_empty() {
                return Some(violation(MalformedReason::EmptyArray, position, token));
            }
            steps
                .iter()
                .enumerate()
                .find_map(|(step, item)| shadow_step_violation(TokenView::of(item), level, step))
        }
        TokenView::Other(_) => Some(violation(
            MalformedReason::InvalidFrameLevelElement,
            position,
            token,
        )),
    }
}

fn shadow_step_violation(token: TokenView<'_>, level: usize, step: usize) -> Option<Violation> {
    let position = Position::step(level, step);
    match token {
        TokenView::String(text) => check_text(text, position),
        // Arrays here would be a third nesting level.
        TokenView::Array(_) | TokenView::Other(_) => Some(violation(
            MalformedReason::InvalidShadowStepElement,
            position,
            token,
        )),
    }
}

fn check_text(text: &str, position: Position) -> Option<Violation> {
    if is_legal_text(text) {
        return None;
    }
    Some(Violation {
        reason: MalformedReason::EmptyString,
        position,
        found: TokenKind::String,
    })
}

fn violation(reason: MalformedReason, position: Position, token: TokenView<'_>) -> Violation {
    Violation {
        reason,
        position,
        found: token.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        first_violation, is_legal_frame_level, is_legal_selector_root, is_legal_shadow_step,
        is_legal_target_string,
    };
    use crate::core::error::{MalformedReason, Position};
    use crate::core::token::{TokenKind, TokenView};
    use serde_json::{Value, json};

    fn view(value: &Value) -> TokenView<'_> {
        TokenView::of(value)
    }

    #[test]
    fn target_string_requires_non_empty_text() {
        assert!(is_legal_target_string(view(&json!("main"))));
        assert!(!is_legal_target_string(view(&json!(""))));
        assert!(!is_legal_target_string(view(&json!(["main"]))));
        assert!(!is_legal_target_string(view(&json!(null))));
    }

    #[test]
    fn shadow_step_rejects_every_non_string() {
        for value in [json!(null), json!(0), json!(false), json!({}), json!([]), json!(["x"])] {
            assert!(!is_legal_shadow_step(view(&value)), "accepted {value}");
        }
        assert!(is_legal_shadow_step(view(&json!("#host"))));
    }

    #[test]
    fn frame_level_accepts_string_or_non_empty_string_array() {
        assert!(is_legal_frame_level(view(&json!("iframe"))));
        assert!(is_legal_frame_level(view(&json!(["host", "inner"]))));
        assert!(!is_legal_frame_level(view(&json!([]))));
        assert!(!is_legal_frame_level(view(&json!(["host", ""]))));
        assert!(!is_legal_frame_level(view(&json!([["host"]]))));
        assert!(!is_legal_frame_level(view(&json!(1))));
    }

    #[test]
    fn selector_root_caps_nesting_at_two_levels() {
        assert!(is_legal_selector_root(view(&json!("a"))));
        assert!(is_legal_selector_root(view(&json!(["a", ["b", "c"]]))));
        assert!(!is_legal_selector_root(view(&json!([[["a"]]]))));
        assert!(!is_legal_selector_root(view(&json!(""))));
        assert!(!is_legal_selector_root(view(&json!({}))));
    }

    #[test]
    fn first_violation_reports_reason_position_and_token() {
        let cases = [
            (json!(null), MalformedReason::WrongRootType, Position::ROOT, TokenKind::Null),
            (json!([]), MalformedReason::EmptyArray, Position::ROOT, TokenKind::Array),
            (json!(""), MalformedReason::EmptyString, Position::ROOT, TokenKind::String),
            (json!([[]]), MalformedReason::EmptyArray, Position::level(0), TokenKind::Array),
            (
                json!([[[]]]),
                MalformedReason::InvalidShadowStepElement,
                Position::step(0, 0),
                TokenKind::Array,
            ),
            (
                json!(["selector", {}]),
                MalformedReason::InvalidFrameLevelElement,
                Position::level(1),
                TokenKind::Object,
            ),
            (
                json!(["selector", ["ok", ""]]),
                MalformedReason::EmptyString,
                Position::step(1, 1),
                TokenKind::String,
            ),
        ];
        for (value, reason, position, found) in cases {
            let violation = first_violation(view(&value)).expect("violation");
            assert_eq!(violation.reason, reason, "input {value}");
            assert_eq!(violation.position, position, "input {value}");
            assert_eq!(violation.found, found, "input {value}");
        }
    }

    #[test]
    fn first_violation_agrees_with_root_predicate() {
        let inputs = [
            json!("a"),
            json!(["a"]),
            json!([["a"]]),
            json!(["a", ["b", ""]]),
            json!([0]),
            json!(["a", ["b", ["c"]]]),
            json!(true),
        ];
        for value in inputs {
            assert_eq!(
                first_violation(view(&value)).is_none(),
                is_legal_selector_root(view(&value)),
                "disagreement on {value}"
            );
        }
    }
}
