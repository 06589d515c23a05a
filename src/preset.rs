//! Named L-system presets.
//!
//! A preset is a configuration value, not a type: [`Preset::config`] returns
//! an [`LSystemConfig`] carrying the alphabet, the declared rules, the turn
//! angle and the turtle action table.
//!
//! | Preset              | Variables | Constants    | Declared rules           | Angle |
//! |---------------------|-----------|--------------|--------------------------|-------|
//! | Sierpinski Triangle | `A B`     | `+ -`        | `A→B-A-B`, `B→A+B+A`     | 60°   |
//! | Koch Curve          | `F`       | `+ -`        | none                     | 90°   |
//! | Koch Snowflake      | `F`       | `+ -`        | none                     | 60°   |
//! | Simple Plant        | `A F`     | `+ - [ ]`    | none                     | 25°   |
//! | Dragon Curve        | `A B`     | `F + -`      | none                     | 90°   |
//!
//! Presets without declared rules rewrite as the identity. The textbook rule
//! tables are available from [`Preset::classic_rules`] and
//! [`Preset::complete_config`].

use crate::alphabet::Alphabet;
use crate::config::LSystemConfig;
use crate::error::{LSystemError, Result};
use crate::grammar::{GrammarSystem, RuleSet};
use crate::turtle::TurtleOp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    SierpinskiTriangle,
    KochCurve,
    KochSnowflake,
    SimplePlant,
    DragonCurve,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::SierpinskiTriangle,
        Preset::KochCurve,
        Preset::KochSnowflake,
        Preset::SimplePlant,
        Preset::DragonCurve,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "Sierpinski Triangle",
            Self::KochCurve => "Koch Curve",
            Self::KochSnowflake => "Koch Snowflake",
            Self::SimplePlant => "Simple Plant",
            Self::DragonCurve => "Dragon Curve",
        }
    }

    /// `(variables, constants)` as symbol strings.
    pub fn symbols(self) -> (&'static str, &'static str) {
        match self {
            Self::SierpinskiTriangle => ("AB", "+-"),
            Self::KochCurve | Self::KochSnowflake => ("F", "+-"),
            Self::SimplePlant => ("AF", "+-[]"),
            Self::DragonCurve => ("AB", "F+-"),
        }
    }

    pub fn alphabet(self) -> Alphabet {
        let (variables, constants) = self.symbols();
        Alphabet::from_disjoint(variables.chars(), constants.chars())
    }

    pub fn angle_degrees(self) -> f32 {
        match self {
            Self::SierpinskiTriangle | Self::KochSnowflake => 60.0,
            Self::KochCurve | Self::DragonCurve => 90.0,
            Self::SimplePlant => 25.0,
        }
    }

    pub fn default_axiom(self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "A",
            Self::KochCurve => "F",
            Self::KochSnowflake => "F++F++F",
            Self::SimplePlant => "A",
            Self::DragonCurve => "FA",
        }
    }

    /// Rules the preset itself declares. Empty for partial presets.
    pub fn declared_rules(self) -> RuleSet {
        match self {
            Self::SierpinskiTriangle => RuleSet::new()
                .with_rule('A', "B-A-B")
                .with_rule('B', "A+B+A"),
            _ => RuleSet::new(),
        }
    }

    /// The textbook rule table for this curve.
    pub fn classic_rules(self) -> RuleSet {
        match self {
            Self::SierpinskiTriangle => self.declared_rules(),
            Self::KochCurve => RuleSet::new().with_rule('F', "F+F-F-F+F"),
            Self::KochSnowflake => RuleSet::new().with_rule('F', "F-F++F-F"),
            Self::SimplePlant => RuleSet::new()
                .with_rule('A', "F+[[A]-A]-F[-FA]+A")
                .with_rule('F', "FF"),
            Self::DragonCurve => RuleSet::new()
                .with_rule('A', "A+BF+")
                .with_rule('B', "-FA-B"),
        }
    }

    /// Symbol bindings for drawing this preset.
    pub fn actions(self) -> BTreeMap<char, TurtleOp> {
        let mut actions =
            BTreeMap::from([('+', TurtleOp::Yaw(1.0)), ('-', TurtleOp::Yaw(-1.0))]);
        match self {
            Self::SierpinskiTriangle => {
                actions.insert('A', TurtleOp::Draw);
                actions.insert('B', TurtleOp::Draw);
            }
            Self::KochCurve | Self::KochSnowflake => {
                actions.insert('F', TurtleOp::Draw);
            }
            Self::SimplePlant => {
                actions.insert('F', TurtleOp::Draw);
                actions.insert('A', TurtleOp::Ignore);
                actions.insert('[', TurtleOp::Push);
                actions.insert(']', TurtleOp::Pop);
            }
            Self::DragonCurve => {
                actions.insert('F', TurtleOp::Draw);
                actions.insert('A', TurtleOp::Ignore);
                actions.insert('B', TurtleOp::Ignore);
            }
        }
        actions
    }

    /// The preset as declared: alphabet, default axiom, declared rules, angle and actions.
    pub fn config(self) -> LSystemConfig {
        LSystemConfig {
            actions: self.actions(),
            ..LSystemConfig::new(self.name(), self.alphabet())
                .with_axiom(self.default_axiom())
                .with_rules(self.declared_rules())
                .with_angle(self.angle_degrees())
        }
    }

    /// [`config`](Self::config) with [`classic_rules`](Self::classic_rules) attached.
    pub fn complete_config(self) -> LSystemConfig {
        self.config().with_rules(self.classic_rules())
    }

    /// A grammar built from [`config`](Self::config).
    pub fn grammar(self) -> Result<GrammarSystem> {
        GrammarSystem::from_config(&self.config())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LSystemError;

    /// Accepts names case-insensitively, ignoring spaces, dashes and underscores
    /// (`"Koch Curve"`, `"koch-curve"`, `"KochCurve"`).
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().replace(' ', "").to_ascii_lowercase() == key)
            .ok_or_else(|| LSystemError::UnknownPreset(s.to_string()))
    }
}
