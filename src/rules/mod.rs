//! Highlighting rule tables.
//!
//! This module contains the data model the classifier runs against:
//!
//! - Ordered (category, pattern) rules grouped by lexer state, where
//!   order within a state is priority
//! - Optional per-rule transitions to another state
//! - A builder that compiles patterns and validates state references
//!   before a ruleset can be used

pub mod rules;
