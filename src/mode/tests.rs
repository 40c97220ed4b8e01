//! Unit tests for the laszlo mode.
//!
//! This module contains tests for the built-in ruleset including:
//! - Keywords, string literals and comments
//! - Escape sequences inside strings
//! - Fallback behavior for unterminated strings and non-ASCII text
//! - The no-transition invariant

use crate::classifier::classifier::{Lexer, DEFAULT_CATEGORY};

use super::laszlo;

fn categories_and_text(line: &str) -> Vec<(String, String)> {
    let mode = laszlo::mode();
    let classified = mode.classify(line, mode.initial_state()).unwrap();

    classified
        .tokens
        .into_iter()
        .map(|token| (token.category, token.text))
        .collect()
}

#[test]
fn test_mode_shape() {
    let mode = laszlo::mode();

    assert_eq!(mode.name(), "laszlo");
    assert_eq!(mode.initial_state(), "start");

    let rules = mode.rules().rules_for("start").unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].category(), "keyword");
    assert_eq!(rules[1].category(), "string");
    assert_eq!(rules[2].category(), "comment");
    assert!(rules.iter().all(|rule| rule.next_state().is_none()));
}

#[test]
fn test_keyword_at_line_start() {
    let tokens = categories_and_text("let x = 1");

    assert_eq!(tokens[0], ("keyword".to_string(), "let".to_string()));
    assert!(tokens[1..]
        .iter()
        .all(|(category, _)| category == DEFAULT_CATEGORY));
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = categories_and_text("Let");

    assert!(tokens
        .iter()
        .all(|(category, _)| category == DEFAULT_CATEGORY));
}

#[test]
fn test_keyword_needs_left_word_boundary() {
    // "let" inside "xlet" has no boundary before it.
    let tokens = categories_and_text("xlet");

    assert!(tokens
        .iter()
        .all(|(category, _)| category == DEFAULT_CATEGORY));
}

#[test]
fn test_keyword_prefix_of_identifier() {
    // No right-hand boundary: the keyword prefix still classifies.
    let tokens = categories_and_text("forbidden");

    assert_eq!(tokens[0], ("keyword".to_string(), "for".to_string()));

    let rest: String = tokens[1..].iter().map(|(_, text)| text.as_str()).collect();
    assert_eq!(rest, "bidden");
    assert!(tokens[1..]
        .iter()
        .all(|(category, _)| category == DEFAULT_CATEGORY));
}

#[test]
fn test_println_wins_over_print() {
    let tokens = categories_and_text("printlnx");

    assert_eq!(tokens[0], ("keyword".to_string(), "println".to_string()));
}

#[test]
fn test_string_between_text() {
    let tokens = categories_and_text(r#"println("hello")"#);

    assert_eq!(
        tokens,
        vec![
            ("keyword".to_string(), "println".to_string()),
            (DEFAULT_CATEGORY.to_string(), "(".to_string()),
            ("string".to_string(), "\"hello\"".to_string()),
            (DEFAULT_CATEGORY.to_string(), ")".to_string()),
        ]
    );
}

#[test]
fn test_string_with_escaped_quote() {
    // The \" pair is part of the literal, not a terminator.
    let tokens = categories_and_text(r#""a\"b""#);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0], ("string".to_string(), r#""a\"b""#.to_string()));
}

#[test]
fn test_unterminated_string_falls_back() {
    let tokens = categories_and_text(r#"x = "abc"#);

    let text: String = tokens.iter().map(|(_, text)| text.as_str()).collect();
    assert_eq!(text, r#"x = "abc"#);

    // The open quote and everything after it are single characters.
    assert!(tokens[4..]
        .iter()
        .all(|(category, text)| category == DEFAULT_CATEGORY && text.chars().count() == 1));
}

#[test]
fn test_comment_runs_to_end_of_line() {
    let tokens = categories_and_text("x = 1 // comment");

    let last = tokens.last().unwrap();
    assert_eq!(last, &("comment".to_string(), "// comment".to_string()));
}

#[test]
fn test_comment_beats_division_lookalikes() {
    let tokens = categories_and_text("// let \"quoted\"");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].0, "comment");
    assert_eq!(tokens[0].1, "// let \"quoted\"");
}

#[test]
fn test_non_ascii_falls_back_per_character() {
    let tokens = categories_and_text("é=λ");

    assert_eq!(
        tokens,
        vec![
            (DEFAULT_CATEGORY.to_string(), "é".to_string()),
            (DEFAULT_CATEGORY.to_string(), "=".to_string()),
            (DEFAULT_CATEGORY.to_string(), "λ".to_string()),
        ]
    );
}

#[test]
fn test_next_state_is_always_start() {
    let mode = laszlo::mode();

    for line in ["", "let x = 1", "// comment", "\"open", "?!?"] {
        let classified = mode.classify(line, "start").unwrap();
        assert_eq!(classified.next_state, "start");
    }
}

#[test]
fn test_keyword_pattern_lists_println_before_print() {
    let println_at = laszlo::KEYWORDS.iter().position(|k| *k == "println");
    let print_at = laszlo::KEYWORDS.iter().position(|k| *k == "print");

    assert!(println_at.unwrap() < print_at.unwrap());
}
