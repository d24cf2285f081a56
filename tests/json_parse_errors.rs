//! Purpose: Regression coverage for JSON text failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by selector parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.

use axe_selector::api::{ErrorKind, parse};
use axe_selector::json::parse::{self as json_parse, ParseFailureCategory};
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_and_eof_errors() {
    let syntax_err = serde_json::from_str::<Value>(r#"["a",}"#).unwrap_err();
    assert_eq!(
        json_parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = serde_json::from_str::<Value>(r#"[["a""#).unwrap_err();
    assert_eq!(
        json_parse::categorize_error(&eof_err),
        ParseFailureCategory::Eof
    );
}

#[test]
fn hint_contains_category_and_context() {
    let err = serde_json::from_str::<Value>("[\"secret-selector\" \"x\"]").unwrap_err();
    let hint = json_parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: syntax"));
    assert!(hint.contains("context: test.context"));
    assert!(!hint.contains("secret-selector"));
}

#[test]
fn selector_text_errors_are_syntax_not_malformed() {
    for input in ["", "[", "'single'", "[\"a\"] trailing"] {
        let err = parse(input).expect_err(input);
        assert_eq!(err.kind(), ErrorKind::Syntax, "input {input:?}");
        assert!(err.reason().is_none());
    }
}

#[test]
fn surrounding_whitespace_is_accepted() {
    let selector = parse(" \n\t\"main\" \n").expect("selector");
    assert_eq!(selector.len(), 1);
}
