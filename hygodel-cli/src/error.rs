use hygodel::error::GrammarError;
use thiserror::Error;

/// Everything that can make the command line fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file `{file}`: {source}")]
    Config {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot serialize the result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Godel(#[from] hygodel::Error),

    /// Strict parsing failed; the source is kept to point at the offending characters.
    #[error("`{name}` does not follow the grammar ({} errors)", .errors.len())]
    Grammar {
        name: String,
        formula: String,
        errors: Vec<GrammarError>,
    },

    #[error("`{0}` is not a decimal natural number")]
    InvalidNumber(String),

    #[error("no input provided, use --code <FORMULA>, --stdin or --file <FILE>")]
    NoInput,
}

pub type CliResult<T> = Result<T, CliError>;
