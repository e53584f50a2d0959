//! Eager and lazy chains of steps.
//!
//! - [`Node`] is an eager chain: it starts from a value (and optionally a
//!   context) and grows by one step per builder call. Its outcome is shared,
//!   so a node can be forked and awaited any number of times.
//! - [`DelayedRoot`] / [`DelayedNode`] form a lazy chain: a reusable
//!   definition with no data, run against `(initial, context)` pairs through
//!   [`Delayed::run_async`].
//!
//! Both share the same combinators from [`action`](crate::action) and the same
//! short-circuit rules.
//!
//! # Examples
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let eager = start_with::<_, &str>(2).on_success(|n, _| succeed(n + 2)).await;
//!
//! let lazy = prepare::<i32, (), &str>().on_success(|n, _| succeed(n + 2));
//! assert_eq!(eager, lazy.run_async(2, ()).await);
//! # }
//! ```

mod delayed;
mod node;

pub use delayed::{prepare, Delayed, DelayedNode, DelayedRoot};
pub use node::{start, start_in, start_with, Node};
