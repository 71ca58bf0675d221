//! Error definitions.
//!
//! The datapath itself has no error channel: illegal encodings, oversized
//! immediates and writes to `x0` are all absorbed deterministically. Errors only
//! exist at the edges of the crate, where text or files are turned into
//! instructions and configuration:
//! 1. **Parse Errors:** A single assembly line that could not be understood.
//! 2. **Crate Errors:** Parse errors with their line number, configuration and I/O failures.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to assemble one line of assembly text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The mnemonic does not name any operation of the core.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// A register operand is not one of `x0`-`x7` or `zero`.
    #[error("invalid register `{0}`")]
    InvalidRegister(String),

    /// An immediate operand could not be parsed as an integer.
    #[error("invalid immediate `{0}`")]
    InvalidImmediate(String),

    /// An immediate operand does not fit the 8-bit signed or unsigned range.
    #[error("immediate {value} out of range [{min}, {max}]")]
    ImmediateOutOfRange {
        /// The parsed value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// The mnemonic was given the wrong number of operands.
    #[error("`{mnemonic}` takes {expected} operand(s), found {found}")]
    OperandCount {
        /// The mnemonic as written.
        mnemonic: String,
        /// Number of operands the mnemonic takes.
        expected: usize,
        /// Number of operands supplied.
        found: usize,
    },
}

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An assembly line failed to parse.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// A line of a hex program is not a 16-bit hexadecimal word.
    #[error("line {line}: invalid instruction word `{text}`")]
    InvalidWord {
        /// 1-based line number in the source text.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// Configuration JSON could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A program or configuration file could not be read.
    #[error("could not read `{path}`: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used by fallible crate APIs.
pub type Result<T> = std::result::Result<T, Error>;
