//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use chain_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`record!`]
//! - **Constructors**: [`succeed`], [`fail`], [`convert`], [`convert_with`], [`start`], [`start_with`], [`start_in`], [`prepare`]
//! - **Types**: [`Outcome`], [`Settled`], [`BoxOutcome`], [`LocalBoxOutcome`], [`Node`], [`DelayedRoot`], [`DelayedNode`], [`Record`], [`Thrown`], [`Panic`]
//! - **Traits**: [`Delayed`], [`Merge`], [`Step`]
//!
//! # Examples
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = start::<&str>()
//!     .add_data(|(), _| succeed(record! { "user" => "alice" }))
//!     .pass_through(|data, _| async move {
//!         assert!(data.contains_key("user"));
//!         Ok(())
//!     })
//!     .await;
//!
//! assert_eq!(outcome, Ok(record! { "user" => "alice" }));
//! # }
//! ```

pub use crate::record;

pub use crate::chain::{prepare, start, start_in, start_with, Delayed, DelayedNode, DelayedRoot, Node};
pub use crate::convert::{convert, convert_with, fail, succeed};
pub use crate::traits::{Merge, Step};
pub use crate::types::{BoxOutcome, LocalBoxOutcome, Outcome, Panic, Record, Settled, Thrown};

#[cfg(feature = "tracing")]
pub use crate::async_ext::OutcomeSpanExt;
