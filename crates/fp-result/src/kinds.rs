//! Error kind taxonomy
//!
//! A closed set of seventeen failure categories modelled on the canonical
//! status codes used by RPC systems. Sixteen of them classify failures that
//! callers decide on themselves; [`ErrorKind::Exception`] is produced by
//! [`try_to_result`](crate::try_to_result) when a wrapped computation panics.
//!
//! ## Usage
//!
//! ```rust
//! use fp_result::{ErrorKind, render};
//!
//! assert_eq!(render(ErrorKind::InvalidArgument), "InvalidArgument");
//! assert_eq!("NotFound".parse::<ErrorKind>(), Ok(ErrorKind::NotFound));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category of a failure
///
/// Declaration order is the stable ordinal of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Failure that could not be classified
    #[default]
    Unknown,
    /// Operation was cancelled, typically by the caller
    Cancelled,
    /// Caller supplied a malformed argument
    InvalidArgument,
    /// Deadline expired before the operation completed
    Timeout,
    /// Requested entity does not exist
    NotFound,
    /// Entity the caller tried to create already exists
    AlreadyExists,
    /// Caller lacks permission for the operation
    PermissionDenied,
    /// Some quota or capacity ran out
    ResourceExhausted,
    /// System is not in a state required for the operation
    FailedPrecondition,
    /// Operation was aborted, usually due to a concurrency conflict
    Aborted,
    /// Operation was attempted past the valid range
    OutOfRange,
    /// Operation is not implemented or not supported
    Unimplemented,
    /// Broken invariant inside the system
    Internal,
    /// Service is currently unavailable
    Unavailable,
    /// Unrecoverable data loss or corruption
    DataLoss,
    /// Request lacks valid authentication credentials
    Unauthenticated,
    /// A wrapped computation panicked
    Exception,
}

impl ErrorKind {
    /// Every kind in ordinal order
    pub const ALL: [Self; 17] = [
        Self::Unknown,
        Self::Cancelled,
        Self::InvalidArgument,
        Self::Timeout,
        Self::NotFound,
        Self::AlreadyExists,
        Self::PermissionDenied,
        Self::ResourceExhausted,
        Self::FailedPrecondition,
        Self::Aborted,
        Self::OutOfRange,
        Self::Unimplemented,
        Self::Internal,
        Self::Unavailable,
        Self::DataLoss,
        Self::Unauthenticated,
        Self::Exception,
    ];

    /// Canonical display name of the kind
    ///
    /// The match has no wildcard arm: a new variant does not compile until it
    /// is given a name here.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Cancelled => "Cancelled",
            Self::InvalidArgument => "InvalidArgument",
            Self::Timeout => "Timeout",
            Self::NotFound => "NotFound",
            Self::AlreadyExists => "AlreadyExists",
            Self::PermissionDenied => "PermissionDenied",
            Self::ResourceExhausted => "ResourceExhausted",
            Self::FailedPrecondition => "FailedPrecondition",
            Self::Aborted => "Aborted",
            Self::OutOfRange => "OutOfRange",
            Self::Unimplemented => "Unimplemented",
            Self::Internal => "Internal",
            Self::Unavailable => "Unavailable",
            Self::DataLoss => "DataLoss",
            Self::Unauthenticated => "Unauthenticated",
            Self::Exception => "Exception",
        }
    }
}

/// Render an [`ErrorKind`] as its canonical name
#[inline]
#[must_use]
pub const fn render(kind: ErrorKind) -> &'static str {
    kind.as_str()
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not the canonical name of any [`ErrorKind`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error kind: '{name}'")]
pub struct ParseErrorKindError {
    /// The rejected input
    pub name: String,
}

impl FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseErrorKindError { name: s.to_owned() })
    }
}
