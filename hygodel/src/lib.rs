//! Hygodel: Gödel numbering and primitive-recursive construction of Peano arithmetic formulas.
//!
//! A formula is a string over a 17-symbol alphabet (quantifiers, connectives, `=`, `0`, `S`,
//! `+`, `*`, parentheses and the variables `x`, `y`, `z`). Two independent views are
//! computed from it:
//!  - the tree view: the string is tokenized, parsed into a [`ast::Node`] tree, and the tree
//!    is turned into an ordered list of primitive recursive construction steps;
//!  - the arithmetic view: every character `c_i` is mapped to `p_i ^ code(c_i)` and the
//!    product of those factors is the Gödel number of the formula.
//!
//! Parsing is permissive by default: any input yields some tree, so the steps can always be
//! shown while a formula is being typed. A strict parser reporting positioned grammar errors
//! is available alongside.
//!
//! Example
//! ```
//! use hygodel::prelude::*;
//!
//! let tree = parse_formula("S0");
//! let steps = build_steps(&tree);
//! assert_eq!(steps[1].label, "f_2 = S(f_1)");
//!
//! // `S` has code 14 and `0` code 13: 2^14 * 3^13
//! let encoding = godel_encode("S0").unwrap();
//! assert_eq!(encoding.godel_number_string(), "26121388032");
//! assert_eq!(tree.pretty_string(), "S0");
//! ```

/// Formula trees produced by the parser.
pub mod ast;
/// Configuration of the encoder and parser.
pub mod config;
/// Gödel encoding and decoding over a table of primes.
pub mod encoding;
/// Error types.
pub mod error;
/// Tokenizer.
pub mod lexer;
/// Permissive and strict parsers.
pub mod parser;
/// Tokenize, parse, build steps and encode in one call.
pub mod pipeline;
/// Pretty-printer for formula trees.
pub mod pretty;
/// Primitive recursive construction steps.
pub mod steps;
/// The formula alphabet.
pub mod symbol;

pub use error::{Error, GodelResult};

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - Alphabet and tree types
    //! - Tokenizer and parser entry points
    //! - Step builder and Gödel encoder
    //! - Pretty-printing via `PrettyNode`
    pub use crate::ast::{BinaryOperator, Node, QuantifierKind, UnaryOperator};
    pub use crate::symbol::Symbol;

    pub use crate::lexer::{tokenize, tokenize_spanned};
    pub use crate::parser::{parse, parse_formula, parse_formula_strict, parse_prefix};

    pub use crate::encoding::{EncodingResult, GodelEncoder, godel_decode, godel_encode};
    pub use crate::steps::{ConstructionStep, StepKind, build_steps};

    pub use crate::config::GodelConfig;
    pub use crate::pipeline::{Analysis, Pipeline};
    pub use crate::pretty::PrettyNode;

    pub use crate::error::{Error, GodelResult};
}
