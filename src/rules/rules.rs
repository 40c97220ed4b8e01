use std::collections::HashMap;

use log::{debug, warn};
use regex::Regex;

use crate::errors::errors::Error;

#[derive(Clone)]
pub struct Rule {
    category: String,
    pattern: Regex,
    next_state: Option<String>,
}

impl Rule {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn next_state(&self) -> Option<&str> {
        self.next_state.as_deref()
    }
}

#[derive(Clone)]
pub struct RuleSet {
    states: HashMap<String, Vec<Rule>>,
    initial: String,
}

impl RuleSet {
    pub fn rules_for(&self, state: &str) -> Option<&[Rule]> {
        self.states.get(state).map(Vec::as_slice)
    }

    pub fn initial_state(&self) -> &str {
        &self.initial
    }
}

struct RawRule {
    category: String,
    pattern: String,
    next_state: Option<String>,
}

pub struct RuleSetBuilder {
    initial: String,
    states: HashMap<String, Vec<RawRule>>,
}

impl RuleSetBuilder {
    pub fn new(initial: &str) -> RuleSetBuilder {
        RuleSetBuilder {
            initial: String::from(initial),
            states: HashMap::new(),
        }
    }

    /// Declares a state without adding rules, so it can be a valid
    /// transition target even when empty.
    pub fn state(&mut self, name: &str) {
        self.states.entry(String::from(name)).or_default();
    }

    pub fn rule(&mut self, state: &str, category: &str, pattern: &str) {
        self.push_rule(state, category, pattern, None);
    }

    pub fn rule_to(&mut self, state: &str, category: &str, pattern: &str, next_state: &str) {
        self.push_rule(state, category, pattern, Some(String::from(next_state)));
    }

    fn push_rule(&mut self, state: &str, category: &str, pattern: &str, next_state: Option<String>) {
        self.states
            .entry(String::from(state))
            .or_default()
            .push(RawRule {
                category: String::from(category),
                pattern: String::from(pattern),
                next_state,
            });
    }

    pub fn build(self) -> Result<RuleSet, Error> {
        if !self.states.contains_key(&self.initial) {
            return Err(Error::UnknownState { state: self.initial });
        }

        let names: Vec<String> = self.states.keys().cloned().collect();
        let mut states = HashMap::new();
        let mut total = 0;

        for (name, raw_rules) in self.states {
            let mut rules = vec![];

            for raw in raw_rules {
                if let Some(target) = &raw.next_state {
                    if !names.contains(target) {
                        return Err(Error::UnknownState {
                            state: target.clone(),
                        });
                    }
                }

                let pattern = Regex::new(&raw.pattern).map_err(|source| Error::InvalidPattern {
                    pattern: raw.pattern.clone(),
                    source,
                })?;

                if pattern.is_match("") {
                    warn!(
                        "pattern {:?} can match the empty string, empty matches are ignored",
                        raw.pattern
                    );
                }

                rules.push(Rule {
                    category: raw.category,
                    pattern,
                    next_state: raw.next_state,
                });
            }

            total += rules.len();
            states.insert(name, rules);
        }

        debug!("built ruleset: {} states, {} rules", states.len(), total);

        Ok(RuleSet {
            states,
            initial: self.initial,
        })
    }
}
