//! The whole pipeline in one call: tokenize, parse, build steps and encode.
//!
//! The tree and its construction steps come from the token stream, while the Gödel
//! encoding is computed from the raw characters of the formula. Every run starts from
//! scratch; nothing is cached between formulas.
use log::info;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::ast::Node;
use crate::config::GodelConfig;
use crate::encoding::{EncodingResult, GodelEncoder};
use crate::error::GodelResult;
use crate::lexer::tokenize_spanned;
use crate::parser::{parse_prefix, parse_strict};
use crate::steps::{ConstructionStep, build_steps};
use crate::symbol::Symbol;

/// Everything computed for one formula.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Analysis {
    /// The formula as given.
    pub formula: String,
    /// Alphabet symbols of the formula, in order.
    pub tokens: Vec<Symbol>,
    /// Number of leading tokens the grammar used.
    pub consumed: usize,
    /// Parsed tree.
    pub ast: Node,
    /// Primitive recursive construction of the tree.
    pub steps: Vec<ConstructionStep>,
    /// Gödel encoding of the raw characters.
    pub encoding: EncodingResult,
}

/// Pipeline bound to a configuration and its encoder.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: GodelConfig,
    encoder: GodelEncoder,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            config: GodelConfig::default(),
            encoder: GodelEncoder::default(),
        }
    }
}

impl Pipeline {
    /// Build a pipeline, sizing the prime table from `config`.
    ///
    /// Fails with [`Error::CapacityTooLarge`](crate::error::Error::CapacityTooLarge) when the
    /// configured capacity is past the supported maximum.
    pub fn new(config: GodelConfig) -> GodelResult<Self> {
        let encoder = config.encoder()?;
        Ok(Self { config, encoder })
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &GodelConfig {
        &self.config
    }

    /// Encoder in use.
    #[inline]
    pub fn encoder(&self) -> &GodelEncoder {
        &self.encoder
    }

    /// Run every stage on `formula`.
    ///
    /// Fails when the formula is longer than the prime table, or, in strict mode, when it
    /// does not follow the grammar. The length is checked first, so the tree stages only
    /// ever see formulas the prime table can hold.
    ///
    /// Example
    /// ```
    /// use hygodel::pipeline::Pipeline;
    /// let analysis = Pipeline::default().run("x+y").unwrap();
    /// assert_eq!(analysis.tokens.len(), 3);
    /// assert_eq!(analysis.steps.len(), 3);
    /// assert_eq!(analysis.encoding.items.len(), 3);
    /// ```
    pub fn run(&self, formula: &str) -> GodelResult<Analysis> {
        let encoding = self.encoder.encode(formula)?;

        let spanned = tokenize_spanned(formula);
        let tokens: Vec<Symbol> = spanned.iter().map(|(symbol, _)| *symbol).collect();

        let (ast, consumed) = if self.config.strict {
            let ast = parse_strict(&spanned, formula.chars().count())?;
            (ast, tokens.len())
        } else {
            let parsed = parse_prefix(&tokens);
            (parsed.root, parsed.consumed)
        };

        let steps = build_steps(&ast);

        info!(
            "Analyzed formula of {} tokens: {} steps, Gödel number of {} digits",
            tokens.len(),
            steps.len(),
            encoding.godel_number_string().len()
        );
        Ok(Analysis {
            formula: formula.to_string(),
            tokens,
            consumed,
            ast,
            steps,
            encoding,
        })
    }
}
