//! Recursive-descent parser for formulas, built with chumsky over the token stream.
//!
//! Grammar (two mutually recursive rules):
//! - `Expression := Term (BinOp Term)*`, where every binary operator shares one precedence
//!   level and associates to the left: `x + y * z` parses as `(x + y) * z`.
//! - `Term := ( Expression ) | ¬ Term | (∀|∃) <token> Expression | S Term | <token>`.
//!
//! Two entry points share that grammar:
//! - [`parse`] / [`parse_prefix`] are permissive and total. Whatever follows a parenthesized
//!   expression is consumed as its closing parenthesis, the quantifier takes the next token as
//!   its variable without checking it, any token in term position becomes an atom, and reading
//!   past the end yields the sentinel atom `Node::Atom(None)`. No input makes them fail, which
//!   keeps as-you-type feedback responsive.
//! - [`parse_strict`] checks the shape: `)` must close a parenthesized expression, a quantifier
//!   must bind `x`, `y` or `z`, atoms are `0` or a variable, and every token must be used.
//!   Violations come back as [`GrammarError`]s with character positions.
use chumsky::{input::ValueInput, prelude::*};
use log::debug;

use crate::ast::{BinaryOperator, Node, QuantifierKind};
use crate::error::{Error, GodelResult, GrammarError};
use crate::lexer::{Span, Spanned, tokenize, tokenize_spanned};
use crate::symbol::Symbol;

type ParserExtra<'tokens> = extra::Err<Rich<'tokens, Symbol, Span>>;

// ---------------- Shared pieces ----------------

fn binary_operator<'tokens, I>()
-> impl Parser<'tokens, I, BinaryOperator, ParserExtra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Symbol, Span = Span>,
{
    select! {
        Symbol::Plus => BinaryOperator::Add,
        Symbol::Times => BinaryOperator::Mul,
        Symbol::Or => BinaryOperator::Or,
        Symbol::And => BinaryOperator::And,
        Symbol::Implies => BinaryOperator::Implies,
        Symbol::Iff => BinaryOperator::Iff,
        Symbol::Equal => BinaryOperator::Equal,
    }
    .labelled("binary operator")
}

fn quantifier_kind<'tokens, I>()
-> impl Parser<'tokens, I, QuantifierKind, ParserExtra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Symbol, Span = Span>,
{
    select! {
        Symbol::ForAll => QuantifierKind::Universal,
        Symbol::Exists => QuantifierKind::Existential,
    }
    .labelled("quantifier")
}

// ---------------- Permissive grammar ----------------

fn permissive_parser<'tokens, I>() -> impl Parser<'tokens, I, Node, ParserExtra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Symbol, Span = Span>,
{
    recursive(|expression| {
        let term = recursive(|term| {
            // The token after the inner expression is taken as `)` whatever it is.
            let parenthesized = just(Symbol::LParen)
                .ignore_then(expression.clone())
                .then_ignore(any().or_not());

            let negation = just(Symbol::Not)
                .ignore_then(term.clone())
                .map(Node::not);

            let quantifier = quantifier_kind()
                .then(any().or_not())
                .then(expression.clone())
                .map(|((kind, variable), body)| Node::quantifier(kind, variable, body));

            let successor = just(Symbol::Succ).ignore_then(term).map(Node::successor);

            // Fallback: one token of any kind, or the sentinel once the input is exhausted.
            let atom = any().or_not().map(Node::Atom);

            choice((parenthesized, negation, quantifier, successor, atom))
        });

        term.clone().foldl(
            binary_operator().then(term).repeated(),
            |left, (operator, right)| Node::binary(operator, left, right),
        )
    })
}

// ---------------- Strict grammar ----------------

fn strict_parser<'tokens, I>() -> impl Parser<'tokens, I, Node, ParserExtra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Symbol, Span = Span>,
{
    recursive(|expression| {
        let term = recursive(|term| {
            let variable = select! {
                symbol @ (Symbol::X | Symbol::Y | Symbol::Z) => symbol,
            }
            .labelled("variable");

            let parenthesized = expression
                .clone()
                .delimited_by(just(Symbol::LParen), just(Symbol::RParen))
                .labelled("parentheses");

            let negation = just(Symbol::Not)
                .ignore_then(term.clone())
                .map(Node::not);

            let quantifier = quantifier_kind()
                .then(variable)
                .then(expression.clone())
                .map(|((kind, variable), body)| Node::quantifier(kind, Some(variable), body));

            let successor = just(Symbol::Succ).ignore_then(term).map(Node::successor);

            let atom = select! {
                Symbol::Zero => Node::atom(Symbol::Zero),
                symbol if symbol.is_variable() => Node::atom(symbol),
            }
            .labelled("atom");

            choice((parenthesized, negation, quantifier, successor, atom)).labelled("term")
        });

        term.clone().foldl(
            binary_operator().then(term).repeated(),
            |left, (operator, right)| Node::binary(operator, left, right),
        )
    })
    .then_ignore(end())
}

// ---------------- Public API ----------------

/// Outcome of a permissive parse: the tree and how many tokens the grammar used.
///
/// Tokens past `consumed` were not reachable by the grammar (for instance the `y`
/// in `x y`) and are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Root of the parsed tree.
    pub root: Node,
    /// Number of leading tokens consumed by the grammar.
    pub consumed: usize,
}

/// Permissively parse `tokens`, reporting how far the grammar got.
///
/// Example
/// ```
/// use hygodel::parser::parse_prefix;
/// use hygodel::lexer::tokenize;
/// let parsed = parse_prefix(&tokenize("x y"));
/// assert_eq!(parsed.consumed, 1);
/// ```
pub fn parse_prefix(tokens: &[Symbol]) -> Parsed {
    let (root, consumed) = permissive_parser()
        .map_with(|root, e| (root, e.span()))
        .then_ignore(any().repeated())
        .parse(tokens)
        .into_output()
        .map(|(root, span): (Node, Span)| (root, span.end))
        .unwrap_or((Node::Atom(None), 0));

    debug!(
        "Parsed {consumed} of {} tokens into a tree of {} nodes",
        tokens.len(),
        root.size()
    );
    Parsed { root, consumed }
}

/// Permissively parse `tokens` into a tree. Never fails.
///
/// Example
/// ```
/// use hygodel::ast::{BinaryOperator, Node};
/// use hygodel::lexer::tokenize;
/// use hygodel::parser::parse;
/// use hygodel::symbol::Symbol;
/// let tree = parse(&tokenize("x+y"));
/// assert_eq!(
///     tree,
///     Node::binary(BinaryOperator::Add, Node::atom(Symbol::X), Node::atom(Symbol::Y))
/// );
/// ```
pub fn parse(tokens: &[Symbol]) -> Node {
    parse_prefix(tokens).root
}

/// Parse `tokens` against the strict grammar.
///
/// `source_len` is the length of the source in characters; it is the position reported
/// when the input ends too early. Token positions come from the spans of `tokens`.
pub fn parse_strict(tokens: &[Spanned<Symbol>], source_len: usize) -> GodelResult<Node> {
    let symbols: Vec<Symbol> = tokens.iter().map(|(symbol, _)| *symbol).collect();
    let (root, errors) = strict_parser()
        .parse(symbols.as_slice())
        .into_output_errors();

    if errors.is_empty() {
        if let Some(root) = root {
            return Ok(root);
        }
    }

    let errors: Vec<GrammarError> = errors
        .into_iter()
        .map(|err| match err.found() {
            Some(found) => GrammarError::UnexpectedToken {
                found: *found,
                position: tokens
                    .get(err.span().start)
                    .map_or(source_len, |(_, span)| span.start),
            },
            None => GrammarError::UnexpectedEndOfInput {
                position: source_len,
            },
        })
        .collect();
    debug!("Strict parse rejected the formula with {} errors", errors.len());
    Err(Error::MalformedGrammar(errors))
}

/// Tokenize and permissively parse a formula string.
pub fn parse_formula(src: &str) -> Node {
    parse(&tokenize(src))
}

/// Tokenize and strictly parse a formula string.
///
/// Example
/// ```
/// use hygodel::parser::parse_formula_strict;
/// assert!(parse_formula_strict("∀x(x=x)").is_ok());
/// assert!(parse_formula_strict("(x").is_err());
/// ```
pub fn parse_formula_strict(src: &str) -> GodelResult<Node> {
    parse_strict(&tokenize_spanned(src), src.chars().count())
}
