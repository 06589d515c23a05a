//! Error types for grammar rewriting and turtle interpretation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LSystemError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LSystemError {
    /// A rewrite was requested but no rule set is attached to the grammar.
    #[error("no rule set attached to the grammar")]
    MissingRules,

    /// `]` was reached with nothing on the pose stack.
    #[error("pose stack underflow at symbol index {index}")]
    StackUnderflow { index: usize },

    /// `[` would push past the configured maximum stack depth.
    #[error("pose stack overflow at symbol index {index} (max depth {depth})")]
    StackOverflow { index: usize, depth: usize },

    /// The interpreter hit a fatal error and must be reset before reuse.
    #[error("interpreter halted by a previous error; call reset() first")]
    InterpreterHalted,

    /// Rewriting produced more symbols than the configured cap.
    /// `generation` is counted from the string that was being rewritten.
    #[error("generation {generation} exceeds the growth limit of {limit} symbols")]
    GrowthLimit { generation: usize, limit: usize },

    /// A symbol was declared both as a variable and as a constant.
    #[error("symbol '{0}' is declared as both variable and constant")]
    OverlappingSymbol(char),

    /// Strict mode rejected a symbol outside the alphabet.
    #[error("undeclared symbol '{symbol}' in {context}")]
    UnknownSymbol { symbol: char, context: String },

    /// The axiom is fixed once set.
    #[error("axiom is already set")]
    AxiomAlreadySet,

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LSystemError {
    fn from(e: serde_json::Error) -> Self {
        LSystemError::Serialization(e.to_string())
    }
}
