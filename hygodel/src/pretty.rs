//! RcDoc-based pretty-printer with termcolor annotations for formula trees.
//!
//! Role
//! - Turn a [`Node`] back into formula text using the alphabet characters.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! Parentheses are only emitted where the grammar needs them, so re-tokenizing and
//! re-parsing the output yields the same tree for every tree the strict parser produces:
//! - a binary right operand that is itself binary (all operators associate to the left);
//! - a binary operand of `¬` or `S`, which apply to a single term;
//! - a quantifier that is followed by more of the enclosing expression, since its body
//!   would otherwise swallow the rest;
//! - a binary quantifier body, for readability (`∀x (x = x)`).
use std::io::{self, Write};

use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::Node;
use crate::symbol::Symbol;

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Quantifier, // ∀ ∃
    Operator,   // ¬ ∨ ∧ → ↔ = + *
    Variable,   // x y z
    Constant,   // 0 S
}

/// Colors cycled through by parenthesis depth.
const PAREN_PALETTE: [Color; 3] = [Color::Blue, Color::Green, Color::Yellow];

impl Style {
    fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Style::Paren(depth) => {
                let fg = PAREN_PALETTE[usize::from(depth) % PAREN_PALETTE.len()];
                spec.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Quantifier => {
                spec.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                spec.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Variable => {
                spec.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Constant => {
                spec.set_fg(Some(Color::Magenta));
            }
        }
        spec
    }
}

fn symbol_style(symbol: Symbol) -> Style {
    match symbol {
        Symbol::ForAll | Symbol::Exists => Style::Quantifier,
        Symbol::LParen | Symbol::RParen => Style::Paren(0),
        Symbol::Zero | Symbol::Succ => Style::Constant,
        Symbol::X | Symbol::Y | Symbol::Z => Style::Variable,
        _ => Style::Operator,
    }
}

fn symbol(symbol: Symbol) -> RcDoc<'static, Style> {
    RcDoc::as_string(symbol).annotate(symbol_style(symbol))
}

fn optional_symbol(s: Option<Symbol>) -> RcDoc<'static, Style> {
    s.map_or_else(RcDoc::nil, symbol)
}

#[inline]
fn parenthesized(inner: RcDoc<'static, Style>, depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(")
        .annotate(Style::Paren(depth))
        .append(inner)
        .append(RcDoc::as_string(")").annotate(Style::Paren(depth)))
        .group()
}

/// Operand of a prefix operator (`¬`, `S`), which binds a single term.
fn prefix_operand(node: &Node, depth: u8, tail: bool) -> RcDoc<'static, Style> {
    match node {
        Node::Binary { .. } => {
            parenthesized(to_doc(node, depth.wrapping_add(1), true), depth)
        }
        _ => to_doc(node, depth, tail),
    }
}

/// `tail` is true when nothing of the enclosing expression follows `node`.
fn to_doc(node: &Node, depth: u8, tail: bool) -> RcDoc<'static, Style> {
    match node {
        Node::Atom(s) => optional_symbol(*s),
        Node::Successor(operand) => symbol(Symbol::Succ).append(prefix_operand(operand, depth, tail)),
        Node::Unary { operator, operand } => {
            symbol(operator.symbol()).append(prefix_operand(operand, depth, tail))
        }
        Node::Binary {
            operator,
            left,
            right,
        } => {
            let right = match right.as_ref() {
                Node::Binary { .. } => {
                    parenthesized(to_doc(right, depth.wrapping_add(1), true), depth)
                }
                _ => to_doc(right, depth, tail),
            };
            to_doc(left, depth, false)
                .append(RcDoc::space())
                .append(symbol(operator.symbol()))
                .append(RcDoc::space())
                .append(right)
                .group()
        }
        Node::Quantifier {
            kind,
            variable,
            body,
        } => {
            let inner_depth = if tail { depth } else { depth.wrapping_add(1) };
            let body = match body.as_ref() {
                Node::Binary { .. } => {
                    parenthesized(to_doc(body, inner_depth.wrapping_add(1), true), inner_depth)
                }
                _ => to_doc(body, inner_depth, true),
            };
            let doc = symbol(kind.symbol())
                .append(optional_symbol(*variable))
                .append(RcDoc::space())
                .append(body)
                .group();
            if tail {
                doc
            } else {
                parenthesized(doc, depth)
            }
        }
    }
}

/// Sink that paints annotated text. Closing an annotation restores the enclosing one.
struct Painter<'w, W> {
    out: &'w mut W,
    styles: Vec<ColorSpec>,
}

impl<'w, W: WriteColor> Painter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self {
            out,
            styles: Vec::new(),
        }
    }
}

impl<'a, W: WriteColor> RenderAnnotated<'a, Style> for Painter<'_, W> {
    fn push_annotation(&mut self, style: &'a Style) -> io::Result<()> {
        let spec = style.color_spec();
        self.out.set_color(&spec)?;
        self.styles.push(spec);
        Ok(())
    }

    fn pop_annotation(&mut self) -> io::Result<()> {
        self.styles.pop();
        match self.styles.last() {
            Some(outer) => self.out.set_color(outer),
            None => self.out.reset(),
        }
    }
}

impl<W: WriteColor> pretty::Render for Painter<'_, W> {
    type Error = io::Error;

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.write_str_all(s).map(|()| s.len())
    }

    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    fn fail_doc(&self) -> Self::Error {
        io::Error::other("cannot render formula")
    }
}

/// Formulas are printed on one line whatever the terminal width.
const RENDER_WIDTH: usize = 1 << 20;

/// Pretty-printing conveniences for formula trees.
pub trait PrettyNode {
    /// Build an RcDoc representation of this tree with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render this tree with colors to any termcolor writer.
    fn pretty_render_to<W: WriteColor + Write>(&self, out: &mut W) -> io::Result<()>;

    /// Print this tree to stdout with colors (TTY-aware).
    fn pretty_print(&self) -> io::Result<()>;

    /// Format this tree into a plain string (no colors).
    fn pretty_string(&self) -> String;
}

impl PrettyNode for Node {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc(self, 0, true)
    }

    fn pretty_render_to<W: WriteColor + Write>(&self, out: &mut W) -> io::Result<()> {
        self.pretty_doc()
            .render_raw(RENDER_WIDTH, &mut Painter::new(out))
    }

    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        self.pretty_render_to(&mut stdout)
    }

    fn pretty_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut w = FmtWrite::new(f);
        self.pretty_doc().render_raw(RENDER_WIDTH, &mut w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_formula, parse_formula_strict};

    fn reprint(src: &str) -> String {
        parse_formula_strict(src)
            .expect("well-formed formula")
            .pretty_string()
    }

    #[test]
    fn atoms_and_prefix_operators() {
        assert_eq!(reprint("0"), "0");
        assert_eq!(reprint("SSx"), "SSx");
        assert_eq!(reprint("¬x"), "¬x");
    }

    #[test]
    fn left_associative_chain_needs_no_parentheses() {
        assert_eq!(reprint("x+y*z"), "x + y * z");
        assert_eq!(reprint("((x+y)*z)"), "x + y * z");
    }

    #[test]
    fn right_nested_binary_is_parenthesized() {
        assert_eq!(reprint("x+(y*z)"), "x + (y * z)");
        assert_eq!(reprint("S(x+y)"), "S(x + y)");
    }

    #[test]
    fn quantifiers() {
        assert_eq!(reprint("∀x(x=x)"), "∀x (x = x)");
        assert_eq!(reprint("(∀x x=x)∧y=y"), "(∀x (x = x)) ∧ y = y");
        assert_eq!(reprint("y=y∧∃x x=0"), "y = y ∧ ∃x (x = 0)");
    }

    #[test]
    fn sentinel_prints_as_nothing() {
        assert_eq!(parse_formula("S").pretty_string(), "S");
        assert_eq!(parse_formula("").pretty_string(), "");
    }

    #[test]
    fn paren_colors_cycle_with_depth() {
        assert_eq!(Style::Paren(0).color_spec(), Style::Paren(3).color_spec());
        assert_ne!(Style::Paren(0).color_spec(), Style::Paren(1).color_spec());
        assert_eq!(Style::Paren(u8::MAX).color_spec().fg(), Some(&Color::Blue));
    }

    #[test]
    fn colored_render_keeps_the_text() {
        let tree = parse_formula_strict("S(x+y)").unwrap();
        let mut buf = termcolor::Buffer::ansi();
        tree.pretty_render_to(&mut buf).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('+'));
    }

    #[test]
    fn render_to_plain_buffer() {
        let tree = parse_formula("x=0");
        let mut buf = termcolor::Buffer::no_color();
        tree.pretty_render_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.into_inner()).unwrap(), "x = 0");
    }
}
