use std::io::{Read, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use hygodel::prelude::*;
use log::{debug, error};
use num_bigint::BigUint;
use termcolor::{ColorChoice, StandardStream};

use crate::error::{CliError, CliResult};

mod error;
mod logger;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Analyze a Peano arithmetic formula: parse it, build its primitive recursive
/// construction and compute its Gödel number
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Specify the formula in the command line (overrides file and stdin)
    #[arg(short, long)]
    pub code: Option<String>,

    /// Whether to read stdin (if set, file is ignored)
    #[arg(short, long, default_value_t = false)]
    pub stdin: bool,

    /// File holding the formula
    #[arg(short, long)]
    pub file: Option<String>,

    /// Reject formulas that do not follow the grammar
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Number of primes available to the encoder (longest encodable formula)
    #[arg(long)]
    pub primes: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Decode a Gödel number instead of analyzing a formula
    #[arg(long, value_name = "NUMBER")]
    pub decode: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration file values, overridden by flags.
fn load_config(args: &Args) -> CliResult<GodelConfig> {
    let mut config = match &args.config {
        Some(file) => {
            let text = std::fs::read_to_string(file)?;
            toml::from_str(&text).map_err(|source| CliError::Config {
                file: file.clone(),
                source,
            })?
        }
        None => GodelConfig::default(),
    };

    if let Some(primes) = args.primes {
        config.prime_capacity = primes;
    }
    config.strict |= args.strict;
    config.validate()?;
    debug!("Using {config:?}");
    Ok(config)
}

/// The formula and a name for it in reports. Precedence: code, stdin, file.
fn read_input(args: &Args) -> CliResult<(String, String)> {
    if let Some(code) = &args.code {
        return Ok(("<code>".to_string(), code.clone()));
    }

    let (name, src) = if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        ("<stdin>".to_string(), buffer)
    } else if let Some(file) = &args.file {
        (file.clone(), std::fs::read_to_string(file)?)
    } else {
        return Err(CliError::NoInput);
    };

    Ok((name, strip_line_break(&src).to_string()))
}

fn strip_line_break(src: &str) -> &str {
    src.strip_suffix('\n')
        .map_or(src, |s| s.strip_suffix('\r').unwrap_or(s))
}

fn decode(args: &Args, config: &GodelConfig, number: &str) -> CliResult<()> {
    let value: BigUint = number
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber(number.to_string()))?;
    let formula = config.encoder()?.decode_formula(&value)?;
    let number = value.to_string();

    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stdout = stdout.lock();
    match args.format {
        Format::Text => render::print_decoded(&mut stdout, &number, &formula)?,
        Format::Json => writeln!(stdout, "{}", render::decoded_json(&number, &formula)?)?,
    }
    stdout.flush()?;
    Ok(())
}

fn analyze(args: &Args, config: GodelConfig) -> CliResult<()> {
    let (name, formula) = read_input(args)?;
    let pipeline = Pipeline::new(config)?;

    let analysis = match pipeline.run(&formula) {
        Ok(analysis) => analysis,
        Err(Error::MalformedGrammar(errors)) => {
            return Err(CliError::Grammar {
                name,
                formula,
                errors,
            });
        }
        Err(err) => return Err(err.into()),
    };

    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stdout = stdout.lock();
    match args.format {
        Format::Text => render::print_analysis(&mut stdout, &analysis)?,
        Format::Json => writeln!(stdout, "{}", render::analysis_json(&analysis)?)?,
    }
    stdout.flush()?;
    Ok(())
}

fn run(args: &Args) -> CliResult<()> {
    let config = load_config(args)?;
    match &args.decode {
        Some(number) => decode(args, &config, number),
        None => analyze(args, config),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Grammar {
            name,
            formula,
            errors,
        }) => {
            if let Err(err) = render::report_grammar_errors(&name, &formula, &errors) {
                error!("Cannot render the grammar report: {err}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
