//! Convenient macros for common patterns

/// Return early with an error if a condition is not met
///
/// The error is passed through `From::from`, so anything convertible into
/// the function's error type works.
///
/// # Examples
///
/// ```rust
/// use fp_result::{Result, ensure, out_of_range};
///
/// fn percent(value: u32) -> Result<u32> {
///     ensure!(value <= 100, out_of_range(format!("{value} > 100")));
///     Ok(value)
/// }
///
/// assert_eq!(percent(40), Ok(40));
/// assert!(percent(140).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::From::from($err));
        }
    };
}

/// Return the first failure among several results, left to right
///
/// Accepts results with different success types as long as they share an
/// error type. Arguments after the first failure are not evaluated.
///
/// # Examples
///
/// ```rust
/// use fp_result::{Result, internal, maybe_error, not_found};
///
/// let id: Result<u64> = Ok(1);
/// let name: Result<String> = Err(not_found("a"));
/// let age: Result<u8> = Err(internal("b"));
///
/// assert_eq!(maybe_error!(id, name, age), Some(not_found("a")));
/// assert_eq!(maybe_error!(id), None);
/// ```
#[macro_export]
macro_rules! maybe_error {
    ($($result:expr),+ $(,)?) => {{
        let mut first = ::core::option::Option::None;
        $(
            if first.is_none() {
                first = $crate::Fallible::failure(&$result).cloned();
            }
        )+
        first
    }};
}
