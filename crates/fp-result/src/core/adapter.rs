//! Panic-to-result adapter
//!
//! [`try_to_result`] is the one place where a panicking computation is turned
//! into a failed [`Result`]. Everything downstream only sees
//! [`ErrorKind::Exception`](crate::ErrorKind::Exception) errors.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::core::constructors::exception;
use crate::core::result::Result;

/// Type name reported when a panic payload is neither `&str` nor `String`
pub const OPAQUE_PAYLOAD_TYPE: &str = "Box<dyn Any>";

const OPAQUE_PAYLOAD_MESSAGE: &str = "opaque panic payload";

/// Run `f`, turning a panic into an [`Exception`](crate::ErrorKind::Exception) error
///
/// A normal return becomes `Ok`. A panic is caught and becomes an error whose
/// message is `[<TypeName>: <what>]`, where the type name is that of the
/// panic payload. The panic does not propagate past this call.
///
/// Only unwinding panics can be caught. Under `panic = "abort"` the process
/// still aborts. The global panic hook runs before the panic is caught, so
/// the default hook still prints to stderr.
///
/// ```rust
/// use fp_result::{ErrorKind, try_to_result};
///
/// assert_eq!(try_to_result(|| 42), Ok(42));
///
/// let err = try_to_result(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Exception);
/// assert_eq!(err.message(), "[&str: boom]");
/// ```
pub fn try_to_result<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let (type_name, what) = describe_payload(payload.as_ref());
        tracing::debug!(
            payload_type = type_name,
            message = %what,
            "Converted panic into exception error"
        );
        exception(format!("[{type_name}: {what}]"))
    })
}

/// Recover a type name and text from a panic payload
fn describe_payload(payload: &(dyn Any + Send)) -> (&'static str, &str) {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        ("&str", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        ("String", s.as_str())
    } else {
        (OPAQUE_PAYLOAD_TYPE, OPAQUE_PAYLOAD_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normal_return_is_success() {
        assert_eq!(try_to_result(|| 42), Ok(42));
    }

    #[test]
    fn test_static_str_panic() {
        let error = try_to_result(|| -> i32 { panic!("boom") }).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Exception);
        assert_eq!(error.message(), "[&str: boom]");
    }

    #[test]
    fn test_formatted_panic_reports_string_payload() {
        let limit = 3;
        let error = try_to_result(|| -> u8 { panic!("limit {limit} exceeded") }).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Exception);
        assert_eq!(error.message(), "[String: limit 3 exceeded]");
    }

    #[test]
    fn test_opaque_payload_uses_placeholder() {
        let result: Result<()> = try_to_result(|| std::panic::panic_any(17_u32));
        let error = result.unwrap_err();

        assert_eq!(
            error.message(),
            format!("[{OPAQUE_PAYLOAD_TYPE}: {OPAQUE_PAYLOAD_MESSAGE}]")
        );
    }

    #[test]
    fn test_side_effects_before_panic_are_kept() {
        let mut seen = Vec::new();
        let result: Result<()> = try_to_result(|| {
            seen.push(1);
            panic!("after push");
        });

        assert!(result.is_err());
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_closure_may_return_result() {
        let nested = try_to_result(|| "12".parse::<i32>());
        assert_eq!(nested, Ok(Ok(12)));
    }
}
