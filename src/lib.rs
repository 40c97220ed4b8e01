#![allow(clippy::module_inception)]

//! Regex-table syntax highlighting: ordered (category, pattern) rules
//! per lexer state, applied left-to-right over one line at a time.
//!
//! The built-in laszlo mode lives in [`mode::laszlo`]; hosts with their
//! own languages build a [`rules::rules::RuleSet`] and call
//! [`classifier::classifier::classify`] (or go through the
//! [`classifier::classifier::Lexer`] trait) per visible line.

pub mod classifier;
pub mod errors;
pub mod mode;
pub mod rules;

extern crate regex;
