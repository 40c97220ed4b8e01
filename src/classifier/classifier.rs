use std::fmt::Display;

use crate::errors::errors::Error;
use crate::rules::rules::RuleSet;

/// Category given to characters no rule claims.
pub const DEFAULT_CATEGORY: &str = "text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}  {}  {:?}",
            self.start, self.end, self.category, self.text
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub tokens: Vec<Token>,
    pub next_state: String,
}

/// A line classifier a host can call without knowing how the rules are
/// stored. Implemented by [`RuleSet`] and by modes wrapping one.
pub trait Lexer {
    fn initial_state(&self) -> &str;

    fn classify(&self, line: &str, state: &str) -> Result<ClassifiedLine, Error>;
}

impl Lexer for RuleSet {
    fn initial_state(&self) -> &str {
        RuleSet::initial_state(self)
    }

    fn classify(&self, line: &str, state: &str) -> Result<ClassifiedLine, Error> {
        classify(self, line, state)
    }
}

pub fn classify(rules: &RuleSet, line: &str, state: &str) -> Result<ClassifiedLine, Error> {
    let mut active = rules.rules_for(state).ok_or_else(|| Error::UnknownState {
        state: String::from(state),
    })?;
    let mut next_state = String::from(state);
    let mut tokens = vec![];
    let mut offset = 0;

    while offset < line.len() {
        let mut matched = false;

        for rule in active {
            if let Some(found) = rule.pattern().find_at(line, offset) {
                // A match further right, or one consuming nothing, does
                // not count for this position.
                if found.start() != offset || found.is_empty() {
                    continue;
                }

                tokens.push(Token {
                    category: String::from(rule.category()),
                    text: String::from(found.as_str()),
                    start: found.start(),
                    end: found.end(),
                });
                offset = found.end();

                if let Some(target) = rule.next_state() {
                    active = rules.rules_for(target).ok_or_else(|| Error::UnknownState {
                        state: String::from(target),
                    })?;
                    next_state = String::from(target);
                }

                matched = true;
                break;
            }
        }

        if !matched {
            let end = offset + line[offset..].chars().next().map_or(1, char::len_utf8);

            tokens.push(Token {
                category: String::from(DEFAULT_CATEGORY),
                text: String::from(&line[offset..end]),
                start: offset,
                end,
            });
            offset = end;
        }
    }

    Ok(ClassifiedLine { tokens, next_state })
}

pub fn classify_source(rules: &RuleSet, source: &str) -> Result<Vec<ClassifiedLine>, Error> {
    let mut state = String::from(rules.initial_state());
    let mut lines = vec![];

    for line in source.lines() {
        let classified = classify(rules, line, &state)?;
        state = classified.next_state.clone();
        lines.push(classified);
    }

    Ok(lines)
}
