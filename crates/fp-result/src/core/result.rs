//! Result type, constructors and extension traits

use std::fmt;

use crate::core::error::Error;
use crate::kinds::ErrorKind;

/// Result type with [`Error`] as the default failure type
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Make a successful [`Result`] from a value
#[inline]
pub const fn make_result<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Make a failed [`Result`] from an error
#[inline]
pub const fn make_error<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Check whether a [`Result`] holds a failure
#[inline]
#[must_use]
pub const fn has_error<T, E>(result: &Result<T, E>) -> bool {
    result.is_err()
}

/// Extension trait for [`Result`] values
pub trait ResultExt<T, E> {
    /// Check whether this result holds a failure
    fn has_error(&self) -> bool;

    /// Borrow this result as a [`ResultDisplay`] for logging
    fn display(&self) -> ResultDisplay<'_, T, E>;

    /// Convert any displayable failure into an [`Error`] of the given kind
    ///
    /// The failure's `Display` output becomes the message.
    fn or_kind(self, kind: ErrorKind) -> Result<T>
    where
        E: fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn has_error(&self) -> bool {
        self.is_err()
    }

    fn display(&self) -> ResultDisplay<'_, T, E> {
        ResultDisplay::new(self)
    }

    fn or_kind(self, kind: ErrorKind) -> Result<T>
    where
        E: fmt::Display,
    {
        self.map_err(|e| Error::new(kind, e.to_string()))
    }
}

/// Display adapter for a borrowed [`Result`]
///
/// Renders `[Result<T>: value=<T>]` on success and `[Result<T>: <E>]` on
/// failure. The `Result<T>` text is literal; it does not name the actual
/// value type.
///
/// ```rust
/// use fp_result::{ResultExt, make_result, not_found, Result};
///
/// let ok: Result<i32> = make_result(7);
/// assert_eq!(ok.display().to_string(), "[Result<T>: value=7]");
///
/// let err: Result<i32> = Err(not_found("user 42"));
/// assert_eq!(err.display().to_string(), "[Result<T>: [Error: [NotFound] user 42]]");
/// ```
#[derive(Debug)]
pub struct ResultDisplay<'a, T, E = Error> {
    result: &'a Result<T, E>,
}

impl<'a, T, E> ResultDisplay<'a, T, E> {
    /// Wrap a borrowed result
    #[must_use]
    pub const fn new(result: &'a Result<T, E>) -> Self {
        Self { result }
    }
}

impl<T, E> fmt::Display for ResultDisplay<'_, T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(value) => write!(f, "[Result<T>: value={value}]"),
            Err(error) => write!(f, "[Result<T>: {error}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constructors::{internal, invalid_argument, not_found};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constructors_fix_the_discriminant() {
        let ok: Result<i32> = make_result(1);
        let err: Result<i32> = make_error(internal("boom"));

        assert!(!has_error(&ok));
        assert!(has_error(&err));
        assert_eq!(ok, Ok(1));
        assert_eq!(err, Err(internal("boom")));
    }

    #[test]
    fn test_has_error_agrees_with_extension() {
        let ok: Result<&str, String> = make_result("value");
        let err: Result<&str, String> = make_error("nope".to_owned());

        assert_eq!(has_error(&ok), ok.has_error());
        assert_eq!(has_error(&err), err.has_error());
    }

    #[test]
    fn test_display_success() {
        let result: Result<i32> = make_result(7);
        assert_eq!(result.display().to_string(), "[Result<T>: value=7]");

        let text: Result<String> = make_result("hello".to_owned());
        assert_eq!(text.display().to_string(), "[Result<T>: value=hello]");
    }

    #[test]
    fn test_display_failure() {
        let result: Result<i32> = make_error(invalid_argument("bad input"));

        assert_eq!(
            ResultDisplay::new(&result).to_string(),
            "[Result<T>: [Error: [InvalidArgument] bad input]]"
        );
    }

    #[test]
    fn test_or_kind_maps_foreign_errors() {
        let parsed: Result<i32> = "abc"
            .parse::<i32>()
            .or_kind(ErrorKind::InvalidArgument);

        let error = parsed.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.message(), "invalid digit found in string");
    }

    #[test]
    fn test_or_kind_keeps_success() {
        let result: Result<u8, String> = Ok(3);
        assert_eq!(result.or_kind(ErrorKind::Internal), Ok(3));

        let missing: Result<u8, &str> = Err("gone");
        assert_eq!(missing.or_kind(ErrorKind::NotFound), Err(not_found("gone")));
    }
}
