use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::types::Outcome;

/// Extension trait that logs failed outcomes.
///
/// # Example
///
/// ```
/// use chain_rail::async_ext::OutcomeSpanExt;
/// use chain_rail::convert::fail;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let span = tracing::info_span!("load_user", user = "alice");
/// let outcome = fail::<u32, _>("not found").log_failure_in(span).await;
/// assert_eq!(outcome, Err("not found"));
/// # }
/// ```
pub trait OutcomeSpanExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Emits a `debug` event inside the current span if the outcome is `Err`.
    fn log_failure(self) -> LoggedOutcome<Self> {
        LoggedOutcome { inner: self, span: Span::current() }
    }

    /// Emits a `debug` event inside `span` if the outcome is `Err`.
    ///
    /// The span is also entered while the inner future is polled.
    fn log_failure_in(self, span: Span) -> LoggedOutcome<Self> {
        LoggedOutcome { inner: self, span }
    }
}

impl<F, T, E> OutcomeSpanExt<T, E> for F where F: Future<Output = Outcome<T, E>> {}

pin_project! {
    /// Future returned by [`OutcomeSpanExt::log_failure`] and
    /// [`OutcomeSpanExt::log_failure_in`].
    #[must_use = "futures do nothing unless polled"]
    pub struct LoggedOutcome<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T, E> Future for LoggedOutcome<F>
where
    F: Future<Output = Outcome<T, E>>,
    E: Debug,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        let outcome = ready!(this.inner.poll(cx));
        if let Err(error) = &outcome {
            tracing::debug!(error = ?error, "chain settled with a failure");
        }
        Poll::Ready(outcome)
    }
}
