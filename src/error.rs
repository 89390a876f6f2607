use rug::Integer;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a reconstruction run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("point {index}: {source}")]
    Decode {
        index: u64,
        #[source]
        source: DecodeError,
    },
    #[error("missing input data: {0}")]
    MissingData(String),
    #[error("no points to interpolate")]
    NoPoints,
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticFault),
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed settings {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A digit string or base that cannot be turned into an integer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unsupported base {0} (expected 2..=36)")]
    UnsupportedBase(String),
    #[error("base {0:?} is not a decimal integer")]
    MalformedBase(String),
    #[error("empty digit string")]
    Empty,
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("digit string {0:?} rejected by the integer parser")]
    Unparsable(String),
}

/// Faults raised while evaluating the Lagrange terms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithmeticFault {
    #[error("zero Lagrange denominator for the point at x = {x}")]
    ZeroDenominator { x: Integer },
    #[error("distinct points share x = {x}")]
    DuplicateX { x: Integer },
    #[error("Lagrange term for the point at x = {x} does not divide exactly")]
    InexactDivision { x: Integer },
    #[error("interpolated constant term {value} is not an integer")]
    NonIntegerSecret { value: String },
}
