//! Combinators that turn a value-level callback into a chain [`Step`].
//!
//! Each combinator branches only on the `Ok`/`Err` tag of the previous outcome:
//!
//! | Combinator | On `Ok(v)` | On `Err(e)` |
//! |---|---|---|
//! | [`on_success`] | `f(v, ctx)` | `Err(e)`, `f` not called |
//! | [`on_error`] | `Ok(v)`, `f` not called | `f(e, ctx)` |
//! | [`pass_through`] | `f(v, ctx)`, then the original `v` | `Err(e)` |
//! | [`add_data`] | `v.merge(f(v, ctx)?)` | `Err(e)` |
//!
//! The error value of a short-circuited outcome is moved along untouched.
//! A panic inside a callback is never intercepted.
//!
//! The free functions are usable with [`Node::add`](crate::chain::Node::add) and
//! [`Delayed::add`](crate::chain::Delayed::add); the same combinators are also
//! exposed as builder methods on both chain types.
//!
//! # Examples
//!
//! ```
//! use chain_rail::prelude::*;
//! use chain_rail::action;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = start_with::<i32, &str>(1)
//!     .add(action::on_success(|_: i32, _: ()| async { Err::<i32, _>("boom") }))
//!     .add(action::on_error(|e: &str, _: ()| {
//!         let len = e.len() as i32;
//!         async move { Ok::<_, &str>(len) }
//!     }))
//!     .await;
//!
//! assert_eq!(outcome, Ok(4));
//! # }
//! ```

use crate::macros::trace_step;
use crate::traits::{Callback, Merge, Step};
use crate::types::Outcome;

pub mod grouped;

/// Runs a callback on the success value; failures pass through.
///
/// Created by [`on_success`].
#[derive(Debug, Clone, Copy)]
pub struct OnSuccess<H> {
    handler: H,
}

impl<H> OnSuccess<H> {
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<H, V, E, C> Step<V, E, C> for OnSuccess<H>
where
    H: Callback<V, C, Error = E>,
{
    type Output = H::Output;
    type Error = E;

    async fn call(self, previous: Outcome<V, E>, context: C) -> Outcome<H::Output, E> {
        match previous {
            Ok(value) => self.handler.handle(value, context).await,
            Err(error) => {
                trace_step!("on_success skipped after a failure");
                Err(error)
            },
        }
    }
}

/// Runs a callback on the error; successes pass through unchanged.
///
/// The callback may recover (`Ok`) or replace the error, possibly with a
/// different error type.
///
/// Created by [`on_error`].
#[derive(Debug, Clone, Copy)]
pub struct OnError<H> {
    handler: H,
}

impl<H> OnError<H> {
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<H, V, E, C> Step<V, E, C> for OnError<H>
where
    H: Callback<E, C, Output = V>,
{
    type Output = V;
    type Error = H::Error;

    async fn call(self, previous: Outcome<V, E>, context: C) -> Outcome<V, H::Error> {
        match previous {
            Ok(value) => {
                trace_step!("on_error skipped after a success");
                Ok(value)
            },
            Err(error) => self.handler.handle(error, context).await,
        }
    }
}

/// Runs a side-effecting callback on a copy of the success value.
///
/// If the callback fails, the chain fails with its error; otherwise the
/// original value flows on.
///
/// Created by [`pass_through`].
#[derive(Debug, Clone, Copy)]
pub struct PassThrough<H> {
    handler: H,
}

impl<H> PassThrough<H> {
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<H, V, E, C> Step<V, E, C> for PassThrough<H>
where
    H: Callback<V, C, Output = (), Error = E>,
    V: Clone,
{
    type Output = V;
    type Error = E;

    async fn call(self, previous: Outcome<V, E>, context: C) -> Outcome<V, E> {
        match previous {
            Ok(value) => {
                self.handler.handle(value.clone(), context).await?;
                Ok(value)
            },
            Err(error) => {
                trace_step!("pass_through skipped after a failure");
                Err(error)
            },
        }
    }
}

/// Merges the callback's output into the success value.
///
/// Keys produced by the callback override existing keys, see [`Merge`].
///
/// Created by [`add_data`].
#[derive(Debug, Clone, Copy)]
pub struct AddData<H> {
    handler: H,
}

impl<H> AddData<H> {
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }
}

impl<H, V, E, C> Step<V, E, C> for AddData<H>
where
    H: Callback<V, C, Error = E>,
    V: Merge<H::Output> + Clone,
{
    type Output = <V as Merge<H::Output>>::Output;
    type Error = E;

    async fn call(self, previous: Outcome<V, E>, context: C) -> Outcome<Self::Output, E> {
        match previous {
            Ok(value) => {
                let data = self.handler.handle(value.clone(), context).await?;
                Ok(value.merge(data))
            },
            Err(error) => {
                trace_step!("add_data skipped after a failure");
                Err(error)
            },
        }
    }
}

/// Wraps `f` so it runs only on success.
#[inline]
pub fn on_success<F>(f: F) -> OnSuccess<F> {
    OnSuccess::new(f)
}

/// Wraps `f` so it runs only on failure.
#[inline]
pub fn on_error<F>(f: F) -> OnError<F> {
    OnError::new(f)
}

/// Wraps `f` as a side effect that keeps the success value.
#[inline]
pub fn pass_through<F>(f: F) -> PassThrough<F> {
    PassThrough::new(f)
}

/// Wraps `f` so its output is merged into the success value.
#[inline]
pub fn add_data<F>(f: F) -> AddData<F> {
    AddData::new(f)
}
