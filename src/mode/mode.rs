use crate::classifier::classifier::{classify, ClassifiedLine, Lexer};
use crate::errors::errors::Error;
use crate::rules::rules::RuleSet;

/// A named, host-registrable highlighting mode. The host queries the
/// rule table through [`rules`](Mode::rules) or drives classification
/// through the [`Lexer`] impl.
#[derive(Clone)]
pub struct Mode {
    name: String,
    rules: RuleSet,
}

impl Mode {
    pub fn new(name: &str, rules: RuleSet) -> Mode {
        Mode {
            name: String::from(name),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Lexer for Mode {
    fn initial_state(&self) -> &str {
        self.rules.initial_state()
    }

    fn classify(&self, line: &str, state: &str) -> Result<ClassifiedLine, Error> {
        classify(&self.rules, line, state)
    }
}
