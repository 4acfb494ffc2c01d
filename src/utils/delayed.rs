use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

/// A future which becomes ready after it has been polled `remaining` more
/// times, waking itself on every pending poll.
#[derive(Debug)]
pub(crate) struct Delayed<T> {
    remaining: usize,
    value: Option<T>,
}

impl<T> Delayed<T> {
    pub(crate) fn new(remaining: usize, value: T) -> Self {
        Self {
            remaining,
            value: Some(value),
        }
    }
}

impl<T> Unpin for Delayed<T> {}

impl<T> Future for Delayed<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        if self.remaining == 0 {
            Poll::Ready(self.value.take().expect("polled after completion"))
        } else {
            self.remaining -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
