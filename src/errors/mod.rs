//! Error types for ruleset construction and classification.
//!
//! This module defines the errors a host can see. It includes:
//!
//! - Unknown lexer states, whether requested directly or named as a
//!   transition target
//! - Rule patterns that fail to compile
//!
//! Input text never produces an error: unclassifiable characters fall
//! through to default tokens instead.

pub mod errors;
