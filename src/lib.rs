//! # lindenmayer-turtle
//!
//! Deterministic Lindenmayer-system rewriting and an engine-agnostic turtle
//! interpreter built on [`glam`].
//!
//! A [`GrammarSystem`] rewrites an axiom generation by generation using a
//! [`RuleSet`]. A [`TurtleInterpreter`] walks a generation string and records
//! [`TurtleCommand`]s (draw, move, rotate, push, pop) that a renderer, game
//! engine or plotter can consume. Both are configured from a serializable
//! [`LSystemConfig`]; [`Preset`] provides the classic curves.
//!
//! ```
//! use lindenmayer_turtle::Preset;
//!
//! let config = Preset::SierpinskiTriangle.config();
//! let grammar = config.grammar().unwrap();
//! assert_eq!(grammar.generate(1).unwrap(), "B-A-B");
//!
//! let mut turtle = config.interpreter();
//! turtle.render(&grammar.generate(2).unwrap()).unwrap();
//! assert_eq!(turtle.segments().count(), 9);
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod preset;
pub mod turtle;

pub use alphabet::*;
pub use config::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use preset::*;
pub use turtle::*;
