//! Combinators whose callback sees the success value and the context as one record.
//!
//! [`group`] adapts a single-argument callback into a [`Callback`] that is
//! handed `value.merge(context)`: every key of the value, plus every key of the
//! context, with context keys winning on collision. This suits chains where the
//! accumulated record and the context are read the same way.
//!
//! # Examples
//!
//! ```
//! use chain_rail::prelude::*;
//! use chain_rail::action::grouped;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = start_in::<_, &str, _>(record! { "a" => 2 }, record! { "b" => 3 })
//!     .add(grouped::on_success(|all: Record<i32>| async move {
//!         Ok::<_, &str>(all.values().sum::<i32>())
//!     }))
//!     .await;
//!
//! assert_eq!(outcome, Ok(5));
//! # }
//! ```

use core::future::Future;

use super::{AddData, OnSuccess, PassThrough};
use crate::traits::{Callback, Merge};
use crate::types::Outcome;

/// A callback over the merged `value + context` record.
///
/// Created by [`group`].
#[derive(Debug, Clone, Copy)]
pub struct Grouped<F> {
    f: F,
}

impl<F> Grouped<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F, Fut, In, C, U, X> Callback<In, C> for Grouped<F>
where
    In: Merge<C>,
    F: FnOnce(<In as Merge<C>>::Output) -> Fut,
    Fut: Future<Output = Outcome<U, X>>,
{
    type Output = U;
    type Error = X;

    #[inline]
    fn handle(self, input: In, context: C) -> impl Future<Output = Outcome<U, X>> {
        (self.f)(input.merge(context))
    }
}

/// Adapts `f` to receive `value.merge(context)` as its only argument.
#[inline]
pub fn group<F>(f: F) -> Grouped<F> {
    Grouped::new(f)
}

/// [`on_success`](super::on_success) over the merged record.
#[inline]
pub fn on_success<F>(f: F) -> OnSuccess<Grouped<F>> {
    OnSuccess::new(group(f))
}

/// [`pass_through`](super::pass_through) over the merged record.
#[inline]
pub fn pass_through<F>(f: F) -> PassThrough<Grouped<F>> {
    PassThrough::new(group(f))
}

/// [`add_data`](super::add_data) over the merged record.
///
/// Only the callback's output is merged into the value; context keys seen by
/// the callback do not leak into the accumulated data.
#[inline]
pub fn add_data<F>(f: F) -> AddData<Grouped<F>> {
    AddData::new(group(f))
}
