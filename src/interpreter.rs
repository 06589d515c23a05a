//! Interpreter that converts a generation string into turtle commands.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`] (or build it straight from an
//! [`LSystemConfig`]), then call [`TurtleInterpreter::interpret`].

use crate::config::LSystemConfig;
use crate::error::{LSystemError, Result};
use crate::turtle::{Pose, TurtleCommand, TurtleOp};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::PI;
use tracing::{debug, warn};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Distance covered by one `Draw`/`Move` at unit scale.
    pub step_length: f32,
    /// Rotation angle (in radians) for Yaw/Pitch/Roll.
    pub angle: f32,
    /// Maximum stack depth for push/pop operations.
    pub max_stack_depth: usize,
    /// Pose the turtle starts from and returns to on [`TurtleInterpreter::reset`].
    pub origin: Pose,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            angle: 90.0f32.to_radians(),
            max_stack_depth: 1024,
            origin: Pose::default(),
        }
    }
}

/// Walks symbol strings and records the resulting turtle commands.
///
/// The interpreter keeps its pose, stack and command list between calls to
/// [`interpret`](Self::interpret), so a long string can be fed in pieces.
/// Call [`reset`](Self::reset) before interpreting an unrelated string.
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
    pose: Pose,
    stack: Vec<Pose>,
    commands: Vec<TurtleCommand>,
    halted: bool,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            pose: config.origin,
            config,
            stack: Vec::new(),
            commands: Vec::new(),
            halted: false,
        }
    }

    /// Creates an interpreter using the angle and action table of `config`.
    pub fn from_config(config: &LSystemConfig) -> Self {
        Self::new(config.turtle_config())
            .with_map(config.actions.iter().map(|(&c, &op)| (c, op)).collect())
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional turtle-graphics bindings.
    ///
    /// Existing bindings for these symbols are overwritten; other symbols are kept.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Draw),
            ('G', TurtleOp::Draw),
            ('f', TurtleOp::Move),
            ('+', TurtleOp::Yaw(1.0)),
            ('-', TurtleOp::Yaw(-1.0)),
            ('&', TurtleOp::Pitch(1.0)),
            ('^', TurtleOp::Pitch(-1.0)),
            ('\\', TurtleOp::Roll(1.0)),
            ('/', TurtleOp::Roll(-1.0)),
            ('|', TurtleOp::TurnAround),
            ('!', TurtleOp::Scale(0.5)),
            ('\'', TurtleOp::Scale(2.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    pub fn op(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// The current pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// All commands recorded since the last reset.
    pub fn commands(&self) -> &[TurtleCommand] {
        &self.commands
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Clears the stack and recorded output and returns the turtle to its origin.
    pub fn reset(&mut self) {
        self.pose = self.config.origin;
        self.stack.clear();
        self.commands.clear();
        self.halted = false;
    }

    /// Resets, then interprets `symbols` from the origin.
    pub fn render(&mut self, symbols: &str) -> Result<&[TurtleCommand]> {
        self.reset();
        self.interpret(symbols)
    }

    /// Interprets `symbols` from the current pose and returns the commands it produced.
    ///
    /// Symbols with no registered mapping are ignored. A pop on an empty
    /// stack or a push past `max_stack_depth` aborts the run and halts the
    /// interpreter; commands emitted before the failing symbol are kept and
    /// further calls fail with [`LSystemError::InterpreterHalted`] until
    /// [`reset`](Self::reset).
    pub fn interpret(&mut self, symbols: &str) -> Result<&[TurtleCommand]> {
        if self.halted {
            return Err(LSystemError::InterpreterHalted);
        }
        let start = self.commands.len();

        for (index, symbol) in symbols.chars().enumerate() {
            let op = self.op(symbol);
            if let Err(e) = self.apply(index, op) {
                warn!(index, symbol = %symbol, error = %e, "turtle interpretation aborted");
                self.halted = true;
                return Err(e);
            }
        }

        debug!(
            symbols = symbols.chars().count(),
            commands = self.commands.len() - start,
            depth = self.stack.len(),
            "interpreted symbol string"
        );
        Ok(&self.commands[start..])
    }

    fn apply(&mut self, index: usize, op: TurtleOp) -> Result<()> {
        let angle = self.config.angle;
        match op {
            // --- SPATIAL ---
            TurtleOp::Draw | TurtleOp::Move => {
                let from = self.pose;
                self.pose.advance(self.config.step_length * self.pose.scale.y);
                let to = self.pose;
                self.commands.push(if op == TurtleOp::Draw {
                    TurtleCommand::Draw { from, to }
                } else {
                    TurtleCommand::Move { from, to }
                });
            }
            TurtleOp::Yaw(s) => self.rotate(|p| p.rotate_local_z(angle * s)),
            TurtleOp::Pitch(s) => self.rotate(|p| p.rotate_local_x(angle * s)),
            TurtleOp::Roll(s) => self.rotate(|p| p.rotate_local_y(angle * s)),
            TurtleOp::TurnAround => self.rotate(|p| p.rotate_local_z(PI)),
            TurtleOp::Scale(factor) => {
                self.pose.scale *= factor;
                self.commands.push(TurtleCommand::Scale(self.pose));
            }

            // --- FLOW ---
            TurtleOp::Push => {
                if self.stack.len() >= self.config.max_stack_depth {
                    return Err(LSystemError::StackOverflow {
                        index,
                        depth: self.config.max_stack_depth,
                    });
                }
                self.stack.push(self.pose);
                self.commands.push(TurtleCommand::Push {
                    pose: self.pose,
                    depth: self.stack.len(),
                });
            }
            TurtleOp::Pop => {
                self.pose = self
                    .stack
                    .pop()
                    .ok_or(LSystemError::StackUnderflow { index })?;
                self.commands.push(TurtleCommand::Pop {
                    pose: self.pose,
                    depth: self.stack.len(),
                });
            }
            TurtleOp::Ignore => {}
        }
        Ok(())
    }

    fn rotate(&mut self, f: impl FnOnce(&mut Pose)) {
        f(&mut self.pose);
        self.commands.push(TurtleCommand::Rotate(self.pose));
    }

    /// `(start, end)` pose pairs of every drawn segment, in order.
    pub fn segments(&self) -> impl Iterator<Item = (Pose, Pose)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            TurtleCommand::Draw { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Axis-aligned `(min, max)` corners of every position the turtle visited,
    /// including the origin.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let origin = self.config.origin.position;
        self.commands
            .iter()
            .map(|cmd| cmd.pose().position)
            .fold((origin, origin), |(min, max), p| (min.min(p), max.max(p)))
    }
}
