//! Error type shared by loading, configuration and simulation.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SchedError>;

/// An error raised while loading input or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of simulation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A line of process input could not be parsed (1-based line number).
    Parse { line: usize },
    /// The process list cannot be scheduled or measured.
    InvalidInput,
    /// A scheduler parameter is out of range (e.g. time quantum <= 0).
    InvalidArgument,
    /// Reading input or configuration failed.
    Io,
}

impl SchedError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse { line }, message)
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Parse { line } => write!(f, "parse error on line {line}: {}", self.message),
            ErrorKind::InvalidInput => write!(f, "invalid input: {}", self.message),
            ErrorKind::InvalidArgument => write!(f, "invalid argument: {}", self.message),
            ErrorKind::Io => write!(f, "i/o error: {}", self.message),
        }
    }
}

impl std::error::Error for SchedError {}

impl From<std::io::Error> for SchedError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}
