//! Conversions from standard library errors into [`Error`]
//!
//! Each conversion picks the closest [`ErrorKind`] and keeps the source
//! error's text as the message, so `?` works on std failures inside
//! functions returning [`Result`](crate::Result).

use std::io;

use crate::core::error::Error;
use crate::kinds::{ErrorKind, ParseErrorKindError};

// =============================================================================
// I/O
// =============================================================================

impl From<io::ErrorKind> for ErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            io::ErrorKind::TimedOut => Self::Timeout,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => Self::InvalidArgument,
            io::ErrorKind::Interrupted => Self::Cancelled,
            io::ErrorKind::OutOfMemory | io::ErrorKind::StorageFull => Self::ResourceExhausted,
            io::ErrorKind::Unsupported => Self::Unimplemented,
            io::ErrorKind::UnexpectedEof | io::ErrorKind::WriteZero => Self::DataLoss,
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::WouldBlock => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }
}

// =============================================================================
// Parsing and formatting
// =============================================================================

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("Integer parsing error: {err}"),
        )
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("Float parsing error: {err}"),
        )
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::new(ErrorKind::InvalidArgument, format!("UTF-8 error: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("UTF-8 conversion error: {err}"),
        )
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Self::new(ErrorKind::Internal, "Formatting error")
    }
}

impl From<ParseErrorKindError> for Error {
    fn from(err: ParseErrorKindError) -> Self {
        Self::new(ErrorKind::InvalidArgument, err.to_string())
    }
}
