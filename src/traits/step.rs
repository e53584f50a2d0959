use core::future::Future;

use crate::types::Outcome;

/// A single link of a chain.
///
/// A step receives the outcome of everything before it together with the
/// chain's context and produces the next outcome. It is free to branch on the
/// `Ok`/`Err` tag; the combinators in [`action`](crate::action) encode the usual
/// short-circuit patterns so callers rarely write steps by hand.
///
/// Any `FnOnce(Outcome<V, E>, C) -> impl Future<Output = Outcome<U, X>>` is a step.
/// The lazy chain calls a fresh clone of each step per run, so steps added to a
/// [`DelayedNode`](crate::chain::DelayedNode) must also be `Clone`.
///
/// A panic inside a step is a defect: nothing in this crate catches it.
///
/// # Examples
///
/// ```
/// use chain_rail::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = start_with::<_, &str>(2)
///     .add(|previous: Outcome<i32, &'static str>, _: ()| async move {
///         match previous {
///             Ok(value) if value < 0 => Err("negative"),
///             Ok(value) => Ok(value + 2),
///             Err(error) => Err(error),
///         }
///     })
///     .run_async()
///     .await;
///
/// assert_eq!(outcome, Ok(4));
/// # }
/// ```
pub trait Step<V, E, C> {
    /// Success type of the produced outcome.
    type Output;
    /// Error type of the produced outcome.
    type Error;

    /// Runs the step against the previous outcome.
    fn call(
        self,
        previous: Outcome<V, E>,
        context: C,
    ) -> impl Future<Output = Outcome<Self::Output, Self::Error>>;
}

impl<F, Fut, V, E, C, U, X> Step<V, E, C> for F
where
    F: FnOnce(Outcome<V, E>, C) -> Fut,
    Fut: Future<Output = Outcome<U, X>>,
{
    type Output = U;
    type Error = X;

    #[inline]
    fn call(self, previous: Outcome<V, E>, context: C) -> impl Future<Output = Outcome<U, X>> {
        self(previous, context)
    }
}

/// A user callback wrapped by a combinator.
///
/// Success-side combinators hand it the success value, [`on_error`](crate::action::on_error)
/// hands it the error; both pass the chain's context along. Any
/// `FnOnce(In, C) -> impl Future<Output = Outcome<U, X>>` is a callback, and so is
/// the [`Grouped`](crate::action::grouped::Grouped) adapter.
pub trait Callback<In, C> {
    /// Success type of the produced outcome.
    type Output;
    /// Error type of the produced outcome.
    type Error;

    /// Invokes the callback.
    fn handle(
        self,
        input: In,
        context: C,
    ) -> impl Future<Output = Outcome<Self::Output, Self::Error>>;
}

impl<F, Fut, In, C, U, X> Callback<In, C> for F
where
    F: FnOnce(In, C) -> Fut,
    Fut: Future<Output = Outcome<U, X>>,
{
    type Output = U;
    type Error = X;

    #[inline]
    fn handle(self, input: In, context: C) -> impl Future<Output = Outcome<U, X>> {
        self(input, context)
    }
}
