//! Deterministic rewriting: rule tables and the [`GrammarSystem`] that owns
//! an axiom and a current generation.
//!
//! Rewriting is split in two. [`GrammarSystem::rewrite_once`] and
//! [`GrammarSystem::generate`] are pure and never touch the stored state;
//! [`GrammarSystem::advance`] is the only call that replaces it.
//!
//! # Symbol policy
//!
//! | Symbol                         | Rewritten as            |
//! |--------------------------------|-------------------------|
//! | constant                       | itself                  |
//! | variable with a rule           | the rule's replacement  |
//! | variable without a rule        | itself                  |
//! | undeclared (non-strict mode)   | itself, or its rule     |
//!
//! In strict mode undeclared symbols are rejected instead: in the axiom and
//! rules when they are set, and in the input of
//! [`GrammarSystem::rewrite_once`].

use crate::alphabet::Alphabet;
use crate::config::LSystemConfig;
use crate::error::{LSystemError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Default cap on the number of symbols a single generation may hold.
pub const DEFAULT_MAX_LENGTH: usize = 1 << 22;

/// A table of substitution rules, one replacement string per symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: BTreeMap<char, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `symbol` (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.insert(symbol, replacement);
        self
    }

    /// Adds or replaces the rule for `symbol`, returning the previous replacement.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) -> Option<String> {
        self.rules.insert(symbol, replacement.into())
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.rules.iter().map(|(&k, v)| (k, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

/// Rewrites `input` once. Constants are never replaced; every other symbol
/// takes its rule's replacement if it has one and is copied otherwise.
///
/// No growth limit applies here; see [`GrammarSystem::rewrite_once`] for the capped version.
pub fn rewrite(alphabet: &Alphabet, rules: &RuleSet, input: &str) -> String {
    rewrite_bounded(alphabet, rules, input, usize::MAX).unwrap_or_default()
}

/// Same as [`rewrite`], but gives up as soon as the output passes `limit` symbols.
fn rewrite_bounded(
    alphabet: &Alphabet,
    rules: &RuleSet,
    input: &str,
    limit: usize,
) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut count = 0usize;
    for c in input.chars() {
        match rules.get(c) {
            Some(replacement) if !alphabet.is_constant(c) => {
                count += replacement.chars().count();
                out.push_str(replacement);
            }
            _ => {
                count += 1;
                out.push(c);
            }
        }
        if count > limit {
            return None;
        }
    }
    Some(out)
}

/// An L-system: alphabet, axiom, optional rule set and the current generation.
#[derive(Clone, Debug)]
pub struct GrammarSystem {
    alphabet: Alphabet,
    rules: Option<RuleSet>,
    axiom: String,
    state: String,
    /// Whether `state` has been taken from the current axiom yet.
    seeded: bool,
    generation: usize,
    strict: bool,
    max_length: usize,
}

impl GrammarSystem {
    /// Creates a grammar with an empty axiom and no rule set attached.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            rules: None,
            axiom: String::new(),
            state: String::new(),
            seeded: false,
            generation: 0,
            strict: false,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Builds a grammar from a configuration, attaching its rules (if any) and axiom.
    pub fn from_config(config: &LSystemConfig) -> Result<Self> {
        config.alphabet.check_disjoint()?;
        let mut grammar = Self::new(config.alphabet.clone())
            .with_max_length(config.max_length)
            .with_strict(config.strict)?;
        if let Some(rules) = &config.rules {
            grammar.attach_rules(rules.clone())?;
        }
        if !config.axiom.is_empty() {
            grammar.set_axiom(&config.axiom)?;
        }
        Ok(grammar)
    }

    /// Attaches `rules` (builder pattern).
    pub fn with_rules(mut self, rules: RuleSet) -> Result<Self> {
        self.attach_rules(rules)?;
        Ok(self)
    }

    /// Enables or disables strict alphabet validation.
    ///
    /// Turning strict mode on re-validates the axiom and any attached rules.
    pub fn with_strict(mut self, strict: bool) -> Result<Self> {
        if strict {
            self.alphabet.validate(&self.axiom, "axiom")?;
            if let Some(rules) = &self.rules {
                self.validate_rules(rules)?;
            }
        }
        self.strict = strict;
        Ok(self)
    }

    /// Sets the maximum number of symbols a generation may contain.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Attaches a rule set, replacing any previous one.
    pub fn attach_rules(&mut self, rules: RuleSet) -> Result<()> {
        if self.strict {
            self.validate_rules(&rules)?;
        }
        self.rules = Some(rules);
        Ok(())
    }

    /// Removes the rule set; rewriting fails until another is attached.
    pub fn detach_rules(&mut self) -> Option<RuleSet> {
        self.rules.take()
    }

    /// Sets the axiom. It can only be set once.
    ///
    /// Any state advanced before the axiom existed is discarded; the next
    /// [`advance`](Self::advance) starts from the new axiom.
    pub fn set_axiom(&mut self, axiom: &str) -> Result<()> {
        if !self.axiom.is_empty() {
            return Err(LSystemError::AxiomAlreadySet);
        }
        if self.strict {
            self.alphabet.validate(axiom, "axiom")?;
        }
        self.axiom = axiom.to_string();
        self.state.clear();
        self.seeded = false;
        self.generation = 0;
        Ok(())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn rules(&self) -> Option<&RuleSet> {
        self.rules.as_ref()
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The current generation string. Empty until the first [`advance`](Self::advance)
    /// after the axiom is set.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// How many times [`advance`](Self::advance) has rewritten the state.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Rewrites `input` once without touching the stored state.
    ///
    /// In strict mode `input` must only use declared symbols. A growth-limit
    /// error from here reports generation 1, counted from `input`.
    pub fn rewrite_once(&self, input: &str) -> Result<String> {
        let rules = self.require_rules()?;
        if self.strict {
            self.alphabet.validate(input, "input")?;
        }
        self.rewrite_generation(rules, input, 1)
    }

    /// Returns generation `n`: the axiom rewritten `n` times. Pure.
    ///
    /// Fails with [`LSystemError::MissingRules`] for every `n`, including 0,
    /// when no rule set is attached.
    pub fn generate(&self, n: usize) -> Result<String> {
        let rules = self.require_rules()?;
        let mut current = self.axiom.clone();
        for generation in 1..=n {
            let next = self.rewrite_generation(rules, &current, generation)?;
            if next == current {
                // Fixed point: every later generation is identical.
                debug!(generation, "rewriting reached a fixed point");
                break;
            }
            current = next;
        }
        Ok(current)
    }

    /// Returns generations `0..=n` in order.
    ///
    /// The whole history counts against the growth limit: every generation
    /// costs its length in symbols (at least one), and the sum may not exceed
    /// [`max_length`](Self::max_length).
    pub fn history(&self, n: usize) -> Result<Vec<String>> {
        let rules = self.require_rules()?;
        if n >= self.max_length {
            return Err(self.growth_limit(self.max_length));
        }
        let mut total = self.axiom.chars().count().max(1);
        if total > self.max_length {
            return Err(self.growth_limit(0));
        }
        let mut generations = vec![self.axiom.clone()];
        for generation in 1..=n {
            let next = self.rewrite_generation(rules, &generations[generation - 1], generation)?;
            total += next.chars().count().max(1);
            if total > self.max_length {
                return Err(self.growth_limit(generation));
            }
            generations.push(next);
        }
        Ok(generations)
    }

    /// Replaces the state with its next generation and returns it.
    ///
    /// The first call after the axiom is set starts from the axiom. On error
    /// the state is left untouched.
    pub fn advance(&mut self) -> Result<&str> {
        let rules = self.require_rules()?;
        let source = if self.seeded { &self.state } else { &self.axiom };
        let next = self.rewrite_generation(rules, source, self.generation + 1)?;
        self.state = next;
        self.seeded = true;
        self.generation += 1;
        Ok(&self.state)
    }

    /// Like [`advance`](Self::advance), adopting `input` as the axiom if none is set yet.
    pub fn advance_from(&mut self, input: &str) -> Result<&str> {
        if self.axiom.is_empty() {
            self.set_axiom(input)?;
        }
        self.advance()
    }

    /// Puts the state back at the axiom (generation 0).
    pub fn reset(&mut self) {
        self.state = self.axiom.clone();
        self.seeded = true;
        self.generation = 0;
    }

    fn require_rules(&self) -> Result<&RuleSet> {
        self.rules.as_ref().ok_or(LSystemError::MissingRules)
    }

    fn rewrite_generation(
        &self,
        rules: &RuleSet,
        input: &str,
        generation: usize,
    ) -> Result<String> {
        match rewrite_bounded(&self.alphabet, rules, input, self.max_length) {
            Some(out) => {
                debug!(generation, length = out.chars().count(), "rewrote generation");
                Ok(out)
            }
            None => Err(self.growth_limit(generation)),
        }
    }

    fn growth_limit(&self, generation: usize) -> LSystemError {
        warn!(generation, limit = self.max_length, "growth limit exceeded");
        LSystemError::GrowthLimit {
            generation,
            limit: self.max_length,
        }
    }

    fn validate_rules(&self, rules: &RuleSet) -> Result<()> {
        for (symbol, replacement) in rules.iter() {
            if !self.alphabet.is_variable(symbol) {
                return Err(LSystemError::UnknownSymbol {
                    symbol,
                    context: "rule key".to_string(),
                });
            }
            self.alphabet
                .validate(replacement, &format!("rule for '{symbol}'"))?;
        }
        Ok(())
    }
}
