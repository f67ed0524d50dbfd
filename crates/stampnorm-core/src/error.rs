//! Error types for stampnorm-core.
//!
//! Every failure is fatal to the run. Callers only need to propagate; the
//! binary prints the chain and exits non-zero.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Any error produced while reading, parsing or normalising a record.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The input path does not exist, could not be opened, or is not valid
    /// UTF-8 text. The io error names the cause.
    #[error("cannot read {} as text", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not have the expected line shape.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A value segment is not a valid 64-bit integer.
    #[error("line {line}: {value:?} is not an integer")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The offset from `Before` does not fit in an `i64`.
    #[error("line {line}: offset from the Before sample overflows a 64-bit integer")]
    Overflow { line: usize },
}

/// Structural problems with the input file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("line {line}: expected `<tag>: <value>` with exactly one ':', found {text:?}")]
    MissingSeparator { line: usize, text: String },

    #[error("line {line}: expected tag {expected:?}, found {found:?}")]
    UnexpectedTag {
        line: usize,
        expected: String,
        found: String,
    },

    #[error("expected at least 3 lines (label, Before, After), found {lines}")]
    TooShort { lines: usize },
}

/// Coarse classification of a [`NormalizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    Format,
    Parse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::FileNotFound => write!(f, "FileNotFoundError"),
            ErrorKind::Format => write!(f, "FormatError"),
            ErrorKind::Parse => write!(f, "ParseError"),
        }
    }
}

impl NormalizeError {
    /// Which of the three failure classes this error belongs to. Overflow is
    /// reported as a parse failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::FileNotFound { .. } => ErrorKind::FileNotFound,
            NormalizeError::Format(_) => ErrorKind::Format,
            NormalizeError::Parse { .. } | NormalizeError::Overflow { .. } => ErrorKind::Parse,
        }
    }
}
