use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use pin_project::pin_project;

/// A batch member that may have settled.
///
/// The future is dropped in place as soon as it settles, so its resources are
/// released without waiting for the rest of the batch.
#[derive(Debug)]
#[pin_project(project = MaybeDoneProj)]
pub(crate) enum MaybeDone<Fut> {
    /// A not-yet-settled future
    Future(#[pin] Fut),
    /// The future settled and has been dropped.
    Gone,
}

impl<Fut: Future> MaybeDone<Fut> {
    /// Create a new instance of `MaybeDone`.
    pub(crate) fn new(future: Fut) -> Self {
        Self::Future(future)
    }

    /// Poll the future, dropping it once it yields its output.
    ///
    /// # Panics
    ///
    /// Panics if the future already settled.
    pub(crate) fn poll_settle(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Fut::Output> {
        let output = match self.as_mut().project() {
            MaybeDoneProj::Future(fut) => ready!(fut.poll(cx)),
            MaybeDoneProj::Gone => panic!("MaybeDone polled after it settled"),
        };
        self.set(MaybeDone::Gone);
        Poll::Ready(output)
    }

    /// Returns `true` once the future has settled and been dropped.
    #[must_use]
    pub(crate) fn is_gone(&self) -> bool {
        matches!(self, Self::Gone)
    }
}
