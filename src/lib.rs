//! # chain-rail
//!
//! Composable, short-circuiting chains of fallible asynchronous steps.
//!
//! Every step consumes the outcome of the previous step (a success value or an
//! error) together with a read-only context, and produces a new outcome.
//! Failures skip every success-oriented step until an error handler
//! intercepts them.
//!
//! Two kinds of failure never mix:
//!
//! - a **domain failure** is an `Err` value in the [`Outcome`] channel;
//! - a **defect** is a panic, which unwinds to whoever polls the chain.
//!   [`convert`](convert::convert) is the only place where a panic is turned into an `Err`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `chain_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Eager chain
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = start_with::<_, &str>(1)
//!     .on_success(|_, _| fail::<i32, _>("first step failed"))
//!     .on_success(|n, _| succeed(n + 1))
//!     .await;
//!
//! assert_eq!(outcome, Err("first step failed"));
//! # }
//! ```
//!
//! ## Recovery
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = start_with::<i32, &str>(1)
//!     .on_success(|_, _| fail::<i32, _>("unavailable"))
//!     .on_error(|_, _| succeed::<_, &str>(0))
//!     .await;
//!
//! assert_eq!(outcome, Ok(0));
//! # }
//! ```
//!
//! ## Reusable definition
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let add_two = prepare::<i32, (), &str>().on_success(|n, _| succeed(n + 2));
//!
//! let (a, b) = tokio::join!(add_two.run_async(1, ()), add_two.run_async(40, ()));
//! assert_eq!((a, b), (Ok(3), Ok(42)));
//! # }
//! ```

mod macros;

/// Combinators that turn callbacks into chain steps
pub mod action;
/// Future adapters for panic capture and failure logging
pub mod async_ext;
/// Eager and lazy chains
pub mod chain;
/// Outcome constructors and panic conversion
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for chain composition
pub mod traits;
/// Outcome aliases, records and captured panics
pub mod types;

pub use chain::{prepare, start, start_in, start_with, Delayed, DelayedNode, DelayedRoot, Node};
pub use convert::{convert, convert_with, fail, succeed};
pub use traits::*;
pub use types::{
    BoxOutcome, LocalBoxOutcome, MissingField, Outcome, Panic, Record, Settled, Thrown,
};
