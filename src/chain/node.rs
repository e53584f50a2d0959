use core::fmt;
use core::future::{Future, IntoFuture};

use futures_util::future::{FutureExt, Shared};

use crate::action::{grouped, AddData, OnError, OnSuccess, PassThrough};
use crate::convert::succeed;
use crate::traits::{Merge, Step};
use crate::types::{BoxOutcome, LocalBoxOutcome, Outcome, Settled};

/// An eager chain: the shared outcome of every step so far plus a context.
///
/// Building a node drives its steps as far as they go without waiting, so a
/// step whose input is already settled runs when it is attached. Whatever is
/// left (a step suspended on I/O, say) resumes once any clone of the node is
/// polled. The outcome is memoized: cloning a node, forking several chains
/// off it, or calling [`run_async`](Node::run_async) repeatedly never runs a
/// step twice.
///
/// Builder methods borrow the node and return a new one. The context is
/// cloned into every step and is never part of the success/failure channel.
/// Success and error types must be `Clone` since every fork observes the
/// same outcome.
///
/// # Examples
///
/// ```
/// use chain_rail::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum LookupError {
///     NotFound,
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let greeted = start_in::<_, LookupError, _>("alice", record! { "greeting" => "hello" })
///     .on_success(|name, context| async move {
///         match name {
///             "alice" => Ok(format!("{} {}", context.get("greeting").copied().unwrap_or(""), name)),
///             _ => Err(LookupError::NotFound),
///         }
///     });
///
/// let shouted = greeted.on_success(|text, _| succeed(text.to_uppercase()));
/// let counted = greeted.on_success(|text, _| succeed(text.len()));
///
/// assert_eq!(shouted.await, Ok("HELLO ALICE".to_owned()));
/// assert_eq!(counted.await, Ok(11));
/// assert_eq!(greeted.run_async().await, Ok("hello alice".to_owned()));
/// # }
/// ```
#[must_use = "a node's outcome is only observable through `run_async` or `.await`"]
pub struct Node<Fut: Future, C = ()> {
    outcome: Shared<Fut>,
    context: C,
}

/// Starts a chain that has succeeded with `()` and has no context.
#[inline]
pub fn start<E: Clone>() -> Node<Settled<(), E>> {
    Node::new(succeed(()), ())
}

/// Starts a chain that has succeeded with `initial` and has no context.
#[inline]
pub fn start_with<V: Clone, E: Clone>(initial: V) -> Node<Settled<V, E>> {
    Node::new(succeed(initial), ())
}

/// Starts a chain that has succeeded with `initial`, carrying `context`.
#[inline]
pub fn start_in<V: Clone, E: Clone, C>(initial: V, context: C) -> Node<Settled<V, E>, C> {
    Node::new(succeed(initial), context)
}

impl<Fut, C> Node<Fut, C>
where
    Fut: Future,
    Fut::Output: Clone,
{
    /// Wraps any asynchronous outcome and starts driving it.
    ///
    /// A panic raised before the first suspension point unwinds out of this
    /// call.
    pub fn new(outcome: Fut, context: C) -> Self {
        let outcome = outcome.shared();
        let _ = outcome.clone().now_or_never();
        Self { outcome, context }
    }

    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Returns the settled outcome, if some poll has already finished the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::prelude::*;
    ///
    /// let node = start_with::<_, &str>(2).on_success(|n, _| succeed(n * 2));
    /// assert_eq!(node.peek(), Some(&Ok(4)));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&Fut::Output> {
        self.outcome.peek()
    }

    /// Replaces the context.
    #[inline]
    pub fn with_context<D>(&self, context: D) -> Node<Fut, D> {
        Node { outcome: self.outcome.clone(), context }
    }

    /// Drops the context.
    #[inline]
    pub fn remove_context(&self) -> Node<Fut> {
        self.with_context(())
    }

    /// Merges `extra` into the current context; keys of `extra` win.
    ///
    /// The outcome is shared with `self`: no step runs again.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::prelude::*;
    ///
    /// let node = start::<&str>()
    ///     .add_context(record! { "a" => 2 })
    ///     .add_context(record! { "b" => 3, "a" => 4 });
    ///
    /// assert_eq!(node.context(), &record! { "a" => 4, "b" => 3 });
    /// ```
    #[inline]
    pub fn add_context<X>(&self, extra: X) -> Node<Fut, <C as Merge<X>>::Output>
    where
        C: Merge<X> + Clone,
    {
        Node { outcome: self.outcome.clone(), context: self.context.clone().merge(extra) }
    }

    /// Returns a handle to the outcome of every step of the chain.
    ///
    /// Each call hands out a new handle to the same memoized outcome.
    #[inline]
    pub fn run_async(&self) -> Shared<Fut> {
        self.outcome.clone()
    }

    #[inline]
    pub fn into_parts(self) -> (Shared<Fut>, C) {
        (self.outcome, self.context)
    }
}

impl<Fut, C, V, E> Node<Fut, C>
where
    Fut: Future<Output = Outcome<V, E>>,
    V: Clone,
    E: Clone,
    C: Clone,
{
    /// Appends an arbitrary [`Step`].
    ///
    /// The step receives the previous outcome, whichever variant it is.
    #[inline]
    pub fn add<S>(&self, step: S) -> Node<impl Future<Output = Outcome<S::Output, S::Error>>, C>
    where
        S: Step<V, E, C>,
        S::Output: Clone,
        S::Error: Clone,
    {
        let previous = self.outcome.clone();
        let step_context = self.context.clone();
        Node::new(
            async move { step.call(previous.await, step_context).await },
            self.context.clone(),
        )
    }

    /// Runs `f` on the success value; a failure skips it.
    #[inline]
    pub fn on_success<F, Next, U>(&self, f: F) -> Node<impl Future<Output = Outcome<U, E>>, C>
    where
        F: FnOnce(V, C) -> Next,
        Next: Future<Output = Outcome<U, E>>,
        U: Clone,
    {
        self.add(OnSuccess::new(f))
    }

    /// Runs `f` on the error; a success skips it.
    ///
    /// `f` may recover with `Ok` or fail with a new error type.
    #[inline]
    pub fn on_error<F, Next, X>(&self, f: F) -> Node<impl Future<Output = Outcome<V, X>>, C>
    where
        F: FnOnce(E, C) -> Next,
        Next: Future<Output = Outcome<V, X>>,
        X: Clone,
    {
        self.add(OnError::new(f))
    }

    /// Runs `f` on a clone of the success value and keeps the original.
    #[inline]
    pub fn pass_through<F, Next>(&self, f: F) -> Node<impl Future<Output = Outcome<V, E>>, C>
    where
        F: FnOnce(V, C) -> Next,
        Next: Future<Output = Outcome<(), E>>,
    {
        self.add(PassThrough::new(f))
    }

    /// Merges the output of `f` into the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::prelude::*;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcome = start_with::<_, &str>(record! { "a" => 2 })
    ///     .add_data(|_, _| succeed(record! { "b" => 3 }))
    ///     .add_data(|data, _| {
    ///         let sum = data.values().sum::<i32>();
    ///         succeed(record! { "sum" => sum })
    ///     })
    ///     .await;
    ///
    /// assert_eq!(outcome, Ok(record! { "a" => 2, "b" => 3, "sum" => 5 }));
    /// # }
    /// ```
    #[inline]
    pub fn add_data<F, Next, D>(
        &self,
        f: F,
    ) -> Node<impl Future<Output = Outcome<<V as Merge<D>>::Output, E>>, C>
    where
        V: Merge<D>,
        <V as Merge<D>>::Output: Clone,
        F: FnOnce(V, C) -> Next,
        Next: Future<Output = Outcome<D, E>>,
    {
        self.add(AddData::new(f))
    }

    /// [`on_success`](Node::on_success) with the value and context merged into one argument.
    #[inline]
    pub fn on_success_grouped<F, Next, U>(
        &self,
        f: F,
    ) -> Node<impl Future<Output = Outcome<U, E>>, C>
    where
        V: Merge<C>,
        F: FnOnce(<V as Merge<C>>::Output) -> Next,
        Next: Future<Output = Outcome<U, E>>,
        U: Clone,
    {
        self.add(grouped::on_success(f))
    }

    /// [`pass_through`](Node::pass_through) with the value and context merged into one argument.
    #[inline]
    pub fn pass_through_grouped<F, Next>(
        &self,
        f: F,
    ) -> Node<impl Future<Output = Outcome<V, E>>, C>
    where
        V: Merge<C>,
        F: FnOnce(<V as Merge<C>>::Output) -> Next,
        Next: Future<Output = Outcome<(), E>>,
    {
        self.add(grouped::pass_through(f))
    }

    /// [`add_data`](Node::add_data) with the value and context merged into one argument.
    ///
    /// Only the output of `f` is merged into the value.
    #[inline]
    pub fn add_data_grouped<F, Next, D>(
        &self,
        f: F,
    ) -> Node<impl Future<Output = Outcome<<V as Merge<D>>::Output, E>>, C>
    where
        V: Merge<C> + Merge<D>,
        <V as Merge<D>>::Output: Clone,
        F: FnOnce(<V as Merge<C>>::Output) -> Next,
        Next: Future<Output = Outcome<D, E>>,
    {
        self.add(grouped::add_data(f))
    }
}

impl<Fut, C, V, E> Node<Fut, C>
where
    Fut: Future<Output = Outcome<V, E>>,
    V: Clone,
    E: Clone,
{
    /// Erases the future type so that differently-built chains share one type.
    #[inline]
    pub fn boxed<'a>(self) -> Node<BoxOutcome<'a, V, E>, C>
    where
        Shared<Fut>: Send + 'a,
    {
        let outcome: BoxOutcome<'a, V, E> = Box::pin(self.outcome);
        Node::new(outcome, self.context)
    }

    /// [`boxed`](Node::boxed) for futures that are not `Send`.
    #[inline]
    pub fn boxed_local<'a>(self) -> Node<LocalBoxOutcome<'a, V, E>, C>
    where
        Shared<Fut>: 'a,
    {
        let outcome: LocalBoxOutcome<'a, V, E> = Box::pin(self.outcome);
        Node::new(outcome, self.context)
    }
}

#[cfg(feature = "tracing")]
impl<Fut, C> Node<Fut, C>
where
    Fut: Future,
    Fut::Output: Clone,
{
    /// Runs every remaining poll of the chain inside `span`.
    #[inline]
    pub fn instrument(
        self,
        span: tracing::Span,
    ) -> Node<tracing::instrument::Instrumented<Shared<Fut>>, C> {
        use tracing::Instrument;

        Node::new(self.outcome.instrument(span), self.context)
    }

    /// Emits a `debug` event if the chain settles with `Err`.
    #[inline]
    pub fn log_failure<V, E>(self) -> Node<crate::async_ext::LoggedOutcome<Shared<Fut>>, C>
    where
        Fut: Future<Output = Outcome<V, E>>,
        E: fmt::Debug,
    {
        use crate::async_ext::OutcomeSpanExt;

        Node::new(self.outcome.log_failure(), self.context)
    }
}

impl<Fut, C> IntoFuture for Node<Fut, C>
where
    Fut: Future,
    Fut::Output: Clone,
{
    type Output = Fut::Output;
    type IntoFuture = Shared<Fut>;

    #[inline]
    fn into_future(self) -> Shared<Fut> {
        self.outcome
    }
}

impl<Fut: Future, C: Clone> Clone for Node<Fut, C> {
    fn clone(&self) -> Self {
        Self { outcome: self.outcome.clone(), context: self.context.clone() }
    }
}

impl<Fut: Future, C: fmt::Debug> fmt::Debug for Node<Fut, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("context", &self.context).finish_non_exhaustive()
    }
}
