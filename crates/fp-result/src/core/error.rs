//! Main [`Error`] struct

use crate::kinds::ErrorKind;

/// Error value carried by [`Result`](crate::Result)
///
/// Pairs one [`ErrorKind`] with a free-text message. Equality is structural:
/// two errors are equal when both the kind and the message match.
///
/// Renders as `[Error: [<KindName>] <message>]`:
///
/// ```rust
/// use fp_result::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::InvalidArgument, "bad input");
/// assert_eq!(err.to_string(), "[Error: [InvalidArgument] bad input]");
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("[Error: [{kind}] {message}]")]
pub struct Error {
    /// Category of the failure
    pub kind: ErrorKind,
    /// Free-text explanation, empty when none was given
    pub message: String,
}

impl Error {
    /// Create a new [`Error`]
    #[must_use]
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Get the error kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check whether this error is of the given kind
    #[inline]
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, String::new())
    }
}
