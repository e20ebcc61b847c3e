//! Core error types and combinators
//!
//! - [`error`](crate::core::error) - the [`Error`](crate::Error) value
//! - [`constructors`](crate::core::constructors) - one named constructor per kind
//! - [`result`](crate::core::result) - [`Result`](crate::Result) alias, constructors and display
//! - [`aggregate`](crate::core::aggregate) - first-failure aggregation
//! - [`adapter`](crate::core::adapter) - panic-to-result adapter
//! - [`conversion`](crate::core::conversion) - std error conversions

pub mod adapter;
pub mod aggregate;
pub mod constructors;
pub mod conversion;
pub mod error;
pub mod result;

pub use adapter::try_to_result;
pub use aggregate::{Fallible, maybe_error};
pub use error::Error;
pub use result::{Result, ResultDisplay, ResultExt, has_error, make_error, make_result};
