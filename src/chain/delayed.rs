use core::fmt;
use core::future::Future;
use core::marker::PhantomData;

use crate::action::{grouped, AddData, OnError, OnSuccess, PassThrough};
use crate::convert::succeed;
use crate::macros::trace_step;
use crate::traits::{Merge, Step};
use crate::types::Outcome;

/// A chain definition that runs only when given an initial value and a context.
///
/// A definition holds steps but no data, so it can be run any number of times,
/// sequentially or concurrently, each run independent of the others. Builders
/// consume the definition and wrap it in a [`DelayedNode`]; callbacks must be
/// `Clone` because every run calls its own copy of each step.
///
/// # Examples
///
/// ```
/// use chain_rail::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let double_positive = prepare::<i32, (), &str>()
///     .on_success(|n, _| async move { if n < 0 { Err("negative") } else { Ok(n) } })
///     .on_success(|n, _| succeed(n * 2));
///
/// assert_eq!(double_positive.run_async(2, ()).await, Ok(4));
/// assert_eq!(double_positive.run_async(-2, ()).await, Err("negative"));
/// # }
/// ```
pub trait Delayed: Sized {
    /// Type of the initial value handed to [`run_async`](Delayed::run_async).
    type Start;
    /// Context shared by every step of one run.
    type Context;
    /// Success type after the last step.
    type Output;
    /// Error type after the last step.
    type Error;

    /// Runs the whole chain against `initial` and `context`.
    fn run_async(
        &self,
        initial: Self::Start,
        context: Self::Context,
    ) -> impl Future<Output = Outcome<Self::Output, Self::Error>>;

    /// Appends an arbitrary [`Step`].
    #[inline]
    fn add<S>(self, step: S) -> DelayedNode<Self, S>
    where
        S: Step<Self::Output, Self::Error, Self::Context> + Clone,
    {
        DelayedNode::new(self, step)
    }

    /// Appends [`on_success`](crate::action::on_success).
    #[inline]
    fn on_success<F, Next, U>(self, f: F) -> DelayedNode<Self, OnSuccess<F>>
    where
        F: FnOnce(Self::Output, Self::Context) -> Next + Clone,
        Next: Future<Output = Outcome<U, Self::Error>>,
    {
        self.add(OnSuccess::new(f))
    }

    /// Appends [`on_error`](crate::action::on_error).
    #[inline]
    fn on_error<F, Next, X>(self, f: F) -> DelayedNode<Self, OnError<F>>
    where
        F: FnOnce(Self::Error, Self::Context) -> Next + Clone,
        Next: Future<Output = Outcome<Self::Output, X>>,
    {
        self.add(OnError::new(f))
    }

    /// Appends [`pass_through`](crate::action::pass_through).
    #[inline]
    fn pass_through<F, Next>(self, f: F) -> DelayedNode<Self, PassThrough<F>>
    where
        Self::Output: Clone,
        F: FnOnce(Self::Output, Self::Context) -> Next + Clone,
        Next: Future<Output = Outcome<(), Self::Error>>,
    {
        self.add(PassThrough::new(f))
    }

    /// Appends [`add_data`](crate::action::add_data).
    #[inline]
    fn add_data<F, Next, D>(self, f: F) -> DelayedNode<Self, AddData<F>>
    where
        Self::Output: Merge<D> + Clone,
        F: FnOnce(Self::Output, Self::Context) -> Next + Clone,
        Next: Future<Output = Outcome<D, Self::Error>>,
    {
        self.add(AddData::new(f))
    }

    /// Appends [`grouped::on_success`].
    #[inline]
    fn on_success_grouped<F, Next, U>(self, f: F) -> DelayedNode<Self, OnSuccess<grouped::Grouped<F>>>
    where
        Self::Output: Merge<Self::Context>,
        F: FnOnce(<Self::Output as Merge<Self::Context>>::Output) -> Next + Clone,
        Next: Future<Output = Outcome<U, Self::Error>>,
    {
        self.add(grouped::on_success(f))
    }

    /// Appends [`grouped::pass_through`].
    #[inline]
    fn pass_through_grouped<F, Next>(
        self,
        f: F,
    ) -> DelayedNode<Self, PassThrough<grouped::Grouped<F>>>
    where
        Self::Output: Merge<Self::Context> + Clone,
        F: FnOnce(<Self::Output as Merge<Self::Context>>::Output) -> Next + Clone,
        Next: Future<Output = Outcome<(), Self::Error>>,
    {
        self.add(grouped::pass_through(f))
    }

    /// Appends [`grouped::add_data`].
    #[inline]
    fn add_data_grouped<F, Next, D>(self, f: F) -> DelayedNode<Self, AddData<grouped::Grouped<F>>>
    where
        Self::Output: Merge<Self::Context> + Merge<D> + Clone,
        F: FnOnce(<Self::Output as Merge<Self::Context>>::Output) -> Next + Clone,
        Next: Future<Output = Outcome<D, Self::Error>>,
    {
        self.add(grouped::add_data(f))
    }
}

/// The head of a lazy chain: resolves every run to `Ok(initial)`.
///
/// Created by [`prepare`].
pub struct DelayedRoot<Start, C = (), E = core::convert::Infallible> {
    _marker: PhantomData<fn(Start, C) -> E>,
}

/// Starts a lazy chain definition.
#[inline]
pub fn prepare<Start, C, E>() -> DelayedRoot<Start, C, E> {
    DelayedRoot::new()
}

impl<Start, C, E> DelayedRoot<Start, C, E> {
    #[inline]
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<Start, C, E> Delayed for DelayedRoot<Start, C, E> {
    type Start = Start;
    type Context = C;
    type Output = Start;
    type Error = E;

    #[inline]
    fn run_async(&self, initial: Start, _context: C) -> impl Future<Output = Outcome<Start, E>> {
        succeed(initial)
    }
}

impl<Start, C, E> Clone for DelayedRoot<Start, C, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Start, C, E> Copy for DelayedRoot<Start, C, E> {}

impl<Start, C, E> Default for DelayedRoot<Start, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Start, C, E> fmt::Debug for DelayedRoot<Start, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DelayedRoot")
    }
}

/// A lazy chain: a predecessor definition followed by one step.
///
/// Owns its predecessor by value, so a definition is a plain nested value with
/// no shared state.
#[derive(Debug, Clone)]
pub struct DelayedNode<P, S> {
    previous: P,
    step: S,
}

impl<P, S> DelayedNode<P, S> {
    #[inline]
    pub fn new(previous: P, step: S) -> Self {
        Self { previous, step }
    }

    #[inline]
    pub fn previous(&self) -> &P {
        &self.previous
    }

    #[inline]
    pub fn step(&self) -> &S {
        &self.step
    }
}

impl<P, S> Delayed for DelayedNode<P, S>
where
    P: Delayed,
    P::Context: Clone,
    S: Step<P::Output, P::Error, P::Context> + Clone,
{
    type Start = P::Start;
    type Context = P::Context;
    type Output = S::Output;
    type Error = S::Error;

    async fn run_async(&self, initial: P::Start, context: P::Context) -> Outcome<S::Output, S::Error> {
        let previous = self.previous.run_async(initial, context.clone()).await;
        trace_step!("running delayed step");
        self.step.clone().call(previous, context).await
    }
}
