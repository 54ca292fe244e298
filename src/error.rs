use std::num::ParseFloatError;

use crate::attribute::AttributeKind;

/// Errors produced while converting a mesh description or reading welded mesh text.
///
/// Line numbers are 1-based, counted over the whole input stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: `{directive}` argument {token:?} is not a number: {source}")]
    Parse {
        line: usize,
        directive: &'static str,
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: `{directive}` expects {expected} numeric arguments, found {found}")]
    MissingComponent {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: corner {token:?} references {attribute} {index}, but only 1..={len} are loaded")]
    IndexOutOfRange {
        line: usize,
        token: String,
        attribute: AttributeKind,
        index: i64,
        len: usize,
    },
    #[error("line {line}: malformed face corner {token:?}")]
    MalformedCorner { line: usize, token: String },
    #[error("welded vertex count {count} does not fit the output index type")]
    IndexOverflow { count: usize },
    #[error("line {line}: malformed welded mesh: {reason}")]
    Welded { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The input line this error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. }
            | Self::MissingComponent { line, .. }
            | Self::IndexOutOfRange { line, .. }
            | Self::MalformedCorner { line, .. }
            | Self::Welded { line, .. } => Some(*line),
            Self::IndexOverflow { .. } | Self::Io(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
