//! Named [`Error`] constructors, one per [`ErrorKind`]
//!
//! Each function is shorthand for [`Error::new`] with a fixed kind, so call
//! sites read as `not_found("user 42")` instead of spelling out the struct.
//! Pass `""` for an error without a message.

use crate::core::error::Error;
use crate::kinds::ErrorKind;

/// Generate a constructor for one error kind
///
/// ```rust,ignore
/// kind_constructor!(not_found, NotFound);
/// // Expands to:
/// pub fn not_found(message: impl Into<String>) -> Error {
///     Error::new(ErrorKind::NotFound, message)
/// }
/// ```
macro_rules! kind_constructor {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Create an [`ErrorKind::", stringify!($kind), "`] error")]
        #[inline]
        pub fn $name(message: impl Into<String>) -> Error {
            Error::new(ErrorKind::$kind, message)
        }
    };
}

kind_constructor!(unknown, Unknown);
kind_constructor!(cancelled, Cancelled);
kind_constructor!(invalid_argument, InvalidArgument);
kind_constructor!(timeout, Timeout);
kind_constructor!(not_found, NotFound);
kind_constructor!(already_exists, AlreadyExists);
kind_constructor!(permission_denied, PermissionDenied);
kind_constructor!(resource_exhausted, ResourceExhausted);
kind_constructor!(failed_precondition, FailedPrecondition);
kind_constructor!(aborted, Aborted);
kind_constructor!(out_of_range, OutOfRange);
kind_constructor!(unimplemented, Unimplemented);
kind_constructor!(internal, Internal);
kind_constructor!(unavailable, Unavailable);
kind_constructor!(data_loss, DataLoss);
kind_constructor!(unauthenticated, Unauthenticated);
kind_constructor!(exception, Exception);
