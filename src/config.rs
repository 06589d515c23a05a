//! Serializable L-system configuration.
//!
//! An [`LSystemConfig`] is the full description of a grammar plus the
//! turtle bindings needed to draw it. Presets are just named values of
//! this type (see [`crate::preset`]).

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::grammar::{DEFAULT_MAX_LENGTH, GrammarSystem, RuleSet};
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use crate::turtle::TurtleOp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_angle() -> f32 {
    90.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemConfig {
    /// Human-readable name, e.g. `"Koch Curve"`.
    #[serde(default)]
    pub name: String,

    pub alphabet: Alphabet,

    /// Seed string. May be left empty and set later on the grammar.
    #[serde(default)]
    pub axiom: String,

    /// `None` means no rule set is attached; `Some` of an empty table is the
    /// identity rewrite.
    #[serde(default)]
    pub rules: Option<RuleSet>,

    /// Turn angle in degrees applied by `Yaw`/`Pitch`/`Roll`.
    #[serde(default = "default_angle")]
    pub angle_degrees: f32,

    /// Symbol-to-operation bindings for the turtle. Unlisted symbols are ignored.
    #[serde(default)]
    pub actions: BTreeMap<char, TurtleOp>,

    /// Reject symbols outside the alphabet.
    #[serde(default)]
    pub strict: bool,

    /// Maximum number of symbols a generation may hold.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl LSystemConfig {
    /// A configuration with the given alphabet, no axiom, no rules and no actions.
    pub fn new(name: impl Into<String>, alphabet: Alphabet) -> Self {
        Self {
            name: name.into(),
            alphabet,
            axiom: String::new(),
            rules: None,
            angle_degrees: default_angle(),
            actions: BTreeMap::new(),
            strict: false,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_axiom(mut self, axiom: impl Into<String>) -> Self {
        self.axiom = axiom.into();
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle_degrees = degrees;
        self
    }

    pub fn with_action(mut self, symbol: char, op: TurtleOp) -> Self {
        self.actions.insert(symbol, op);
        self
    }

    /// Parses a JSON configuration and checks the alphabet invariant.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.alphabet.check_disjoint()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the grammar described by this configuration.
    pub fn grammar(&self) -> Result<GrammarSystem> {
        GrammarSystem::from_config(self)
    }

    /// Turtle settings with this configuration's angle and default step/stack.
    pub fn turtle_config(&self) -> TurtleConfig {
        TurtleConfig {
            angle: self.angle_degrees.to_radians(),
            ..Default::default()
        }
    }

    /// Builds an interpreter bound to this configuration's action table.
    pub fn interpreter(&self) -> TurtleInterpreter {
        TurtleInterpreter::from_config(self)
    }
}
