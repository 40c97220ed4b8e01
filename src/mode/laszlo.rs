use lazy_static::lazy_static;

use crate::mode::mode::Mode;
use crate::rules::rules::RuleSetBuilder;

/// Reserved words of the laszlo language, in rule priority order.
/// "println" must stay ahead of "print" so the longer word wins.
pub const KEYWORDS: &[&str] = &[
    "Array", "Bool", "Function", "I32", "Char", "Range", "String", "and",
    "assert", "break", "continue", "else", "false", "for", "function", "if",
    "in", "let", "mod", "or", "println", "print", "return", "true", "typeof",
    "while", "split", "delete", "new", "struct", "write", "read",
];

/// A double-quoted string on a single line. Escaped pairs are consumed
/// by `\\.`; an unterminated string matches nothing and falls through
/// to per-character default tokens.
pub const STRING_PATTERN: &str = r#"["](?:(?:\\.)|(?:[^"\\]))*?["]"#;

/// A line comment running to end of line.
pub const COMMENT_PATTERN: &str = "//.*$";

lazy_static! {
    static ref LASZLO: Mode = {
        let mut builder = RuleSetBuilder::new("start");
        builder.rule("start", "keyword", &keyword_pattern());
        builder.rule("start", "string", STRING_PATTERN);
        builder.rule("start", "comment", COMMENT_PATTERN);
        Mode::new("laszlo", builder.build().unwrap())
    };
}

/// The keyword pattern: a word boundary on the left, none on the right,
/// so identifiers that merely start with a keyword classify the keyword
/// prefix and leave the rest unclassified.
pub fn keyword_pattern() -> String {
    format!("\\b(?:{})", KEYWORDS.join("|"))
}

pub fn mode() -> &'static Mode {
    &LASZLO
}
