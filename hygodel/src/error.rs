use strum::EnumIs;
use thiserror::Error;

use crate::symbol::Symbol;

/// A single violation of the strict grammar.
///
/// Positions are 0-based character offsets into the formula string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum GrammarError {
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token `{found}` at position {position}")]
    UnexpectedToken { found: Symbol, position: usize },

    /// The formula ended while the grammar still expected a token.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },
}

impl GrammarError {
    /// Character offset the error points at.
    pub fn position(&self) -> usize {
        match self {
            GrammarError::UnexpectedToken { position, .. }
            | GrammarError::UnexpectedEndOfInput { position } => *position,
        }
    }
}

/// Errors reported by the encoding and strict parsing entry points.
///
/// Characters outside the alphabet are never an error: they encode with code `0`.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum Error {
    /// The formula has more characters than there are primes in the encoder's table.
    #[error(
        "Formula of {length} characters cannot be encoded: only {available} primes are available."
    )]
    PrimeExhausted { length: usize, available: usize },

    /// The requested prime table is larger than an encoder may hold.
    #[error("Cannot build a table of {requested} primes: at most {max} are supported.")]
    CapacityTooLarge { requested: usize, max: usize },

    /// Strict parsing rejected the formula.
    #[error(
        "Formula does not follow the grammar: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    MalformedGrammar(Vec<GrammarError>),

    /// The number is not the Gödel number of any symbol sequence.
    #[error("{value} is not a Gödel number: {reason}")]
    NotAGodelNumber { value: String, reason: String },
}

/// Result type used across the crate.
pub type GodelResult<T> = Result<T, Error>;
