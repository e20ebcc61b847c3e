//! # fp-result
//!
//! A value-or-error [`Result`] with a fixed taxonomy of [`ErrorKind`]s,
//! first-failure aggregation, and a panic-to-result adapter.
//!
//! ## Quick Start
//!
//! ```rust
//! use fp_result::prelude::*;
//!
//! fn parse_age(raw: &str) -> Result<u8> {
//!     let age = raw.parse::<u8>().or_kind(ErrorKind::InvalidArgument)?;
//!     ensure!(age >= 18, out_of_range("Must be 18+"));
//!     Ok(age)
//! }
//!
//! assert_eq!(parse_age("42"), Ok(42));
//! assert_eq!(
//!     parse_age("7").unwrap_err().to_string(),
//!     "[Error: [OutOfRange] Must be 18+]"
//! );
//! ```
//!
//! ## Features
//!
//! - **Closed taxonomy**: seventeen [`ErrorKind`]s with canonical names
//! - **Aggregation**: [`maybe_error`] reports the first failure of many
//! - **Panic lifting**: [`try_to_result`] turns a panic into an
//!   [`ErrorKind::Exception`] error
//! - **Stable rendering**: `[Error: [Kind] message]` and `[Result<T>: ...]`
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ErrorKind`] and [`Error`]

pub mod core;
pub mod kinds;

pub mod macros;

/// Error value pairing a kind with a message
pub use crate::core::Error;

/// Result type alias with [`Error`] as the default failure type
pub use crate::core::Result;

/// Closed error taxonomy
pub use kinds::{ErrorKind, ParseErrorKindError, render};

/// Result construction, inspection and display
pub use crate::core::{ResultDisplay, ResultExt, has_error, make_error, make_result};

/// Aggregation and panic lifting
pub use crate::core::{Fallible, maybe_error, try_to_result};

/// Named constructors, one per kind
pub use crate::core::constructors;
pub use crate::core::constructors::{
    aborted, already_exists, cancelled, data_loss, exception, failed_precondition, internal,
    invalid_argument, not_found, out_of_range, permission_denied, resource_exhausted, timeout,
    unauthenticated, unavailable, unimplemented, unknown,
};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::constructors::*;
    pub use super::{
        Error, ErrorKind, Fallible, Result, ResultDisplay, ResultExt, has_error, make_error,
        make_result, maybe_error, render, try_to_result,
    };

    pub use crate::ensure;
}
