//! Constructors that lift plain values, errors and fallible futures into outcomes.
//!
//! - [`succeed`] and [`fail`] produce an already-settled outcome.
//! - [`convert`] adapts code that may return `Err` *or* panic, funnelling both
//!   into the domain error type through a single `catch` function.
//!   [`convert_with`] does the same with an asynchronous `catch`.
//!
//! [`convert`] and [`convert_with`] are the only places in this crate that capture a panic. Panics
//! raised anywhere else in a chain keep unwinding to whoever polls it.
//!
//! # Examples
//!
//! ```
//! use chain_rail::convert::{convert, fail, succeed};
//! use chain_rail::Thrown;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! assert_eq!(succeed::<_, &str>(3).await, Ok(3));
//! assert_eq!(fail::<i32, _>("nope").await, Err("nope"));
//!
//! let parsed = convert(
//!     || async { "42".parse::<u16>() },
//!     |thrown: Thrown<std::num::ParseIntError>| thrown.to_string(),
//! )
//! .await;
//! assert_eq!(parsed, Ok(42));
//! # }
//! ```

use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use crate::async_ext::CatchUnwind;
use crate::types::{Outcome, Panic, Settled, Thrown};

/// Returns an outcome that always resolves to `Ok(value)`.
///
/// `succeed(())` is the value-less form.
#[inline]
pub fn succeed<V, E>(value: V) -> Settled<V, E> {
    core::future::ready(Ok(value))
}

/// Returns an outcome that always resolves to `Err(error)`.
///
/// The error is moved in as is; it is never wrapped.
#[inline]
pub fn fail<V, E>(error: E) -> Settled<V, E> {
    core::future::ready(Err(error))
}

/// Runs `attempt` and converts both of its failure modes into `E`.
///
/// - `Ok(value)` resolves to `Ok(value)`.
/// - `Err(error)` resolves to `Err(catch(Thrown::Error(error)))`.
/// - A panic while calling `attempt` or while polling its future resolves to
///   `Err(catch(Thrown::Panic(panic)))`.
///
/// A panic raised by `catch` itself is not captured.
///
/// # Examples
///
/// ```
/// use chain_rail::convert::convert;
/// use chain_rail::Thrown;
///
/// #[derive(Debug, PartialEq)]
/// enum LoadError {
///     Io(String),
///     Crashed(String),
/// }
///
/// async fn read_disk() -> Result<u8, std::io::Error> {
///     panic!("disk on fire")
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = convert(
///     read_disk,
///     |thrown: Thrown<std::io::Error>| match thrown {
///         Thrown::Error(error) => LoadError::Io(error.to_string()),
///         Thrown::Panic(panic) => LoadError::Crashed(panic.to_string()),
///     },
/// )
/// .await;
///
/// assert_eq!(outcome, Err(LoadError::Crashed("panicked: disk on fire".into())));
/// # }
/// ```
pub async fn convert<A, Fut, T, X, K, E>(attempt: A, catch: K) -> Outcome<T, E>
where
    A: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    K: FnOnce(Thrown<X>) -> E,
{
    convert_with(attempt, |thrown| core::future::ready(catch(thrown))).await
}

/// [`convert`] with an asynchronous `catch` mapper.
///
/// Useful when building the domain error needs I/O, such as reporting the
/// failure before mapping it.
///
/// # Examples
///
/// ```
/// use chain_rail::convert::convert_with;
/// use chain_rail::Thrown;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = convert_with(
///     || async { Err::<u8, _>("refused") },
///     |thrown: Thrown<&str>| async move { format!("reported: {thrown}") },
/// )
/// .await;
///
/// assert_eq!(outcome, Err("reported: refused".to_owned()));
/// # }
/// ```
pub async fn convert_with<A, Fut, T, X, K, KFut, E>(attempt: A, catch: K) -> Outcome<T, E>
where
    A: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    K: FnOnce(Thrown<X>) -> KFut,
    KFut: Future<Output = E>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(attempt)) {
        Ok(future) => future,
        Err(payload) => return Err(catch(Thrown::Panic(Panic::new(payload))).await),
    };

    let thrown = match CatchUnwind::new(future).await {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(error)) => Thrown::Error(error),
        Err(panic) => Thrown::Panic(panic),
    };
    Err(catch(thrown).await)
}
