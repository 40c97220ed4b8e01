//! Highlighting modes.
//!
//! This module contains the mode objects a host editor registers:
//!
//! - A named wrapper around a ruleset, queryable per state
//! - The built-in laszlo mode, compiled once on first use

pub mod laszlo;
pub mod mode;

#[cfg(test)]
mod tests;
