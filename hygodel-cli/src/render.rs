//! Terminal and JSON rendering of analysis results.
use std::io::{self, Write};

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use hygodel::error::GrammarError;
use hygodel::pipeline::Analysis;
use hygodel::pretty::PrettyNode;
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

/// Indentation of every detail line.
const INDENT: &str = "  ";

/// Width used when the terminal size is unknown (e.g. output is piped).
const FALLBACK_WIDTH: usize = 80;

/// Result of `--decode` in JSON form.
#[derive(Debug, Serialize)]
pub struct Decoded<'a> {
    pub number: &'a str,
    pub formula: &'a str,
}

fn header_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_intense(true).set_bold(true);
    spec
}

fn warning_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Yellow)).set_intense(true);
    spec
}

fn header<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(&header_color())?;
    writeln!(out, "{title}")?;
    out.reset()
}

/// Split a run of digits into lines of at most `width` characters.
pub fn wrap_digits(digits: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut lines = Vec::with_capacity(digits.len().div_ceil(width));
    let mut rest = digits;
    while rest.len() > width {
        let (line, tail) = rest.split_at(width);
        lines.push(line);
        rest = tail;
    }
    lines.push(rest);
    lines
}

fn terminal_width() -> usize {
    term_size::dimensions().map_or(FALLBACK_WIDTH, |(width, _)| width)
}

/// Human-readable report: tokens, tree, steps, per-character encoding and the number.
pub fn print_analysis<W: WriteColor>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    header(out, "Formula:")?;
    writeln!(out, "{INDENT}{}", analysis.formula)?;

    header(out, &format!("Tokens ({}):", analysis.tokens.len()))?;
    let tokens: Vec<String> = analysis.tokens.iter().map(ToString::to_string).collect();
    writeln!(out, "{INDENT}{}", tokens.join(" "))?;
    let ignored = analysis.tokens.len() - analysis.consumed;
    if ignored > 0 {
        out.set_color(&warning_color())?;
        writeln!(out, "{INDENT}{ignored} trailing tokens are not part of the expression")?;
        out.reset()?;
    }

    header(out, "Syntax tree:")?;
    write!(out, "{INDENT}")?;
    analysis.ast.pretty_render_to(out)?;
    writeln!(out)?;

    header(out, &format!("Construction steps ({}):", analysis.steps.len()))?;
    let label_width = analysis
        .steps
        .iter()
        .map(|step| step.label.chars().count())
        .max()
        .unwrap_or(0);
    for step in &analysis.steps {
        writeln!(
            out,
            "{INDENT}{:<label_width$}  {}",
            step.label, step.description
        )?;
    }

    header(out, "Encoding:")?;
    for item in &analysis.encoding.items {
        writeln!(out, "{INDENT}{item}")?;
    }

    let digits = analysis.encoding.godel_number_string();
    header(out, &format!("Gödel number ({} digits):", digits.len()))?;
    let width = terminal_width().saturating_sub(INDENT.len());
    for line in wrap_digits(&digits, width) {
        writeln!(out, "{INDENT}{line}")?;
    }
    Ok(())
}

/// Human-readable result of `--decode`.
pub fn print_decoded<W: WriteColor>(out: &mut W, number: &str, formula: &str) -> io::Result<()> {
    header(out, "Decoded formula:")?;
    writeln!(out, "{INDENT}{formula}")?;
    header(out, "From Gödel number:")?;
    let width = terminal_width().saturating_sub(INDENT.len());
    for line in wrap_digits(number, width) {
        writeln!(out, "{INDENT}{line}")?;
    }
    Ok(())
}

pub fn analysis_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

pub fn decoded_json(number: &str, formula: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Decoded { number, formula })
}

/// Report every grammar error of `formula` on stderr, pointing at the offending character.
pub fn report_grammar_errors(name: &str, formula: &str, errors: &[GrammarError]) -> io::Result<()> {
    let length = formula.chars().count();
    let mut colors = ColorGenerator::new();
    let color = colors.next();

    for error in errors {
        let start = error.position().min(length);
        let end = (start + 1).min(length);
        let span = (name.to_string(), start..end);
        let label = match error {
            GrammarError::UnexpectedToken { .. } => "This token is not allowed here",
            GrammarError::UnexpectedEndOfInput { .. } => "The formula ends too early",
        };

        Report::build(ReportKind::Error, span.clone())
            .with_message(error.to_string())
            .with_label(Label::new(span).with_message(label).with_color(color))
            .finish()
            .eprint((name.to_string(), Source::from(formula)))?;
    }
    Ok(())
}
