//! Outcome aliases and the value types that flow through a chain.
//!
//! An outcome is a plain [`Result`]: `Ok` is a success, `Err` an expected,
//! typed failure. Defects are panics and never appear here, except as a
//! [`Panic`] captured by [`convert`](crate::convert::convert).
//!
//! # Examples
//!
//! ```
//! use chain_rail::types::{Outcome, Record};
//!
//! let outcome: Outcome<Record<i32>, &str> = Ok(Record::new().with("a", 2));
//! assert!(outcome.is_ok());
//! ```
use futures_core::future::{BoxFuture, LocalBoxFuture};

pub mod panic;
pub mod record;

pub use panic::*;
pub use record::*;

/// The value every step consumes and produces.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The domain error type
pub type Outcome<V, E> = Result<V, E>;

/// An outcome that is already settled.
///
/// Returned by [`succeed`](crate::convert::succeed) and [`fail`](crate::convert::fail).
pub type Settled<V, E> = core::future::Ready<Outcome<V, E>>;

/// A type-erased, `Send` asynchronous outcome.
pub type BoxOutcome<'a, V, E> = BoxFuture<'a, Outcome<V, E>>;

/// A type-erased asynchronous outcome for futures that are not `Send`.
pub type LocalBoxOutcome<'a, V, E> = LocalBoxFuture<'a, Outcome<V, E>>;
