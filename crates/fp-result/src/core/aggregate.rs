//! First-failure aggregation over several results
//!
//! When several independent steps have already run, [`maybe_error`] picks the
//! single error to report: the first failure in argument order. Results with
//! different success types are mixed through `&dyn Fallible<E>`, or through
//! the [`maybe_error!`](crate::maybe_error!) macro which does the casting.
//!
//! ```rust
//! use fp_result::{Fallible, Result, internal, maybe_error, not_found};
//!
//! let id: Result<u64> = Ok(1);
//! let name: Result<String> = Err(not_found("a"));
//! let age: Result<u8> = Err(internal("b"));
//!
//! let first = maybe_error([&id as &dyn Fallible, &name, &age]);
//! assert_eq!(first, Some(not_found("a")));
//! ```

use crate::core::error::Error;
use crate::core::result::Result;

/// A value that may hold a failure of type `E`
///
/// Object safe, so results with different success types can share one
/// sequence as `&dyn Fallible<E>`.
pub trait Fallible<E = Error> {
    /// Borrow the failure, if any
    fn failure(&self) -> Option<&E>;

    /// Check whether a failure is held
    fn is_failure(&self) -> bool {
        self.failure().is_some()
    }
}

impl<T, E> Fallible<E> for Result<T, E> {
    #[inline]
    fn failure(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

impl<E, F> Fallible<E> for &F
where
    F: Fallible<E> + ?Sized,
{
    #[inline]
    fn failure(&self) -> Option<&E> {
        (**self).failure()
    }
}

/// Return the first failure in `results`, scanning left to right
///
/// Returns `None` when every result succeeded. Scanning stops at the first
/// failure; later failures are never inspected.
pub fn maybe_error<'a, E, R, I>(results: I) -> Option<E>
where
    E: Clone + 'a,
    R: Fallible<E> + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    results.into_iter().find_map(|result| result.failure()).cloned()
}
