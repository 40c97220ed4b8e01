//! Lexical classification of single lines of text.
//!
//! This module contains the classifier that turns a line into a run of
//! categorized tokens for rendering. It handles:
//!
//! - Scanning left-to-right, trying the active state's rules in
//!   priority order at each position
//! - Anchored matching: a rule only wins if its match starts exactly at
//!   the scan position
//! - Default "text" tokens for characters no rule claims
//! - Threading the lexer state from line to line

pub mod classifier;
