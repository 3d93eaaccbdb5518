//! Error types for the name classifier.

use std::fmt;

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while reading, featurizing, or training.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text cannot be interpreted as `left entity... right`.
    #[error(transparent)]
    InvalidExample(InvalidExampleError),

    /// A data line carried a label other than `1` or `-1`.
    #[error("line {line}: invalid label '{label}', expected 1 or -1")]
    InvalidLabel { line: usize, label: String },

    /// A data line had a label but no example text.
    #[error("line {line}: missing example text after the label")]
    InvalidLine { line: usize },

    /// Training was requested on a dataset with no examples.
    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_example<S>(text: S, reason: &'static str) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidExample(InvalidExampleError {
            text: text.into(),
            reason,
        })
    }
}

/// Error used when a text does not satisfy the example invariant.
#[derive(Debug)]
pub struct InvalidExampleError {
    /// The offending text.
    pub text: String,

    /// Why the text was rejected.
    pub reason: &'static str,
}

impl fmt::Display for InvalidExampleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidExample: '{}': {}", self.text, self.reason)
    }
}

impl std::error::Error for InvalidExampleError {}
