// crates/shared-kernel/src/error.rs
use std::fmt;

use thiserror::Error;

/// Caller-supplied argument named in a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Text,
    Chars,
    StartIndex,
    EndIndex,
    Limit,
}

impl Param {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Chars => "chars",
            Self::StartIndex => "start_index",
            Self::EndIndex => "end_index",
            Self::Limit => "limit",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which bound a numeric argument crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolation {
    /// Value is below zero.
    Negative,
    /// Value is past the last valid position of the text (`len` chars long).
    PastLength { len: usize },
    /// Start index lies after the end index.
    AfterEnd { end: isize },
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => f.write_str("is less than zero"),
            Self::PastLength { len } => write!(f, "is past the end of a text of {len} chars"),
            Self::AfterEnd { end } => write!(f, "is greater than end_index ({end})"),
        }
    }
}

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CharsCounterError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CharsCounterError>,
    },

    #[error("Invalid argument: {param} is required")]
    InvalidArgument { param: Param },

    #[error("Argument out of range: {param} = {value} {reason}")]
    OutOfRange {
        param: Param,
        value: isize,
        reason: RangeViolation,
    },
}

pub type Result<T> = std::result::Result<T, CharsCounterError>;

impl CharsCounterError {
    pub const fn invalid_argument(param: Param) -> Self {
        Self::InvalidArgument { param }
    }

    pub const fn out_of_range(param: Param, value: isize, reason: RangeViolation) -> Self {
        Self::OutOfRange { param, value, reason }
    }

    /// Innermost error, skipping any `Context` layers.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), Self::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.root(), Self::OutOfRange { .. })
    }

    /// Argument the failure is about.
    pub fn param(&self) -> Param {
        match self {
            Self::Context { source, .. } => source.param(),
            Self::InvalidArgument { param } | Self::OutOfRange { param, .. } => *param,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CharsCounterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CharsCounterError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CharsCounterError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
