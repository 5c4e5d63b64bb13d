//! Tokenizer turning a formula string into a sequence of [`Symbol`]s.
//!
//! Every token is exactly one character of the alphabet, so the lexer is a single
//! `chumsky` pass over the characters of the input. Characters outside the
//! alphabet (whitespace included) are dropped without an error: tokenizing is a
//! matched-pattern extraction, and nothing checks that the surviving tokens
//! reconstruct the source.
//!
//! Spans are measured in characters, not bytes, so they line up with the
//! per-character positions used by the Gödel encoder.
use chumsky::prelude::*;
use log::trace;

use crate::symbol::Symbol;

/// Character-offset span of a token in its source string.
pub type Span = SimpleSpan;

/// A value paired with the span it was read from.
pub type Spanned<T> = (T, Span);

fn lexer<'a>() -> impl Parser<'a, &'a [char], Vec<Spanned<Symbol>>, extra::Err<Rich<'a, char>>> {
    any()
        .map_with(|c: char, e| Symbol::from_char(c).map(|symbol| (symbol, e.span())))
        .repeated()
        .collect::<Vec<_>>()
        .map(|tokens| tokens.into_iter().flatten().collect())
}

/// Tokenize `src`, keeping the character span of every token.
///
/// Example
/// ```
/// use hygodel::lexer::tokenize_spanned;
/// use hygodel::symbol::Symbol;
/// let tokens = tokenize_spanned("S x");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].0, Symbol::X);
/// assert_eq!(tokens[1].1.start, 2);
/// ```
pub fn tokenize_spanned(src: &str) -> Vec<Spanned<Symbol>> {
    let chars: Vec<char> = src.chars().collect();
    // The lexer accepts every character, so there is always an output.
    let tokens = lexer()
        .parse(chars.as_slice())
        .into_output()
        .unwrap_or_default();
    trace!(
        "Tokenized {} characters into {} symbols",
        chars.len(),
        tokens.len()
    );
    tokens
}

/// Tokenize `src` into its alphabet symbols, in source order.
///
/// Example
/// ```
/// use hygodel::lexer::tokenize;
/// use hygodel::symbol::Symbol;
/// assert_eq!(tokenize("x + y"), vec![Symbol::X, Symbol::Plus, Symbol::Y]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(src: &str) -> Vec<Symbol> {
    tokenize_spanned(src)
        .into_iter()
        .map(|(symbol, _)| symbol)
        .collect()
}
