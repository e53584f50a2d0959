use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Panic;

pin_project! {
    /// A future that resolves to `Err(Panic)` instead of unwinding when the
    /// inner future panics.
    ///
    /// Polling after completion returns `Poll::Pending`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::async_ext::CatchUnwind;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let caught = CatchUnwind::new(async { panic!("boom") }).await;
    /// let panic: chain_rail::Panic = caught.unwrap_err();
    /// assert_eq!(panic.message(), Some("boom"));
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchUnwind<Fut> {
        #[pin]
        future: Fut,
        terminated: bool,
    }
}

impl<Fut> CatchUnwind<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, terminated: false }
    }
}

impl<Fut: Future> Future for CatchUnwind<Fut> {
    type Output = Result<Fut::Output, Panic>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.terminated {
            return Poll::Pending;
        }

        let future = this.future;
        let polled = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(output)) => Ok(output),
            Err(payload) => Err(Panic::new(payload)),
        };

        *this.terminated = true;
        Poll::Ready(polled)
    }
}

impl<Fut: Future> FusedFuture for CatchUnwind<Fut> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
