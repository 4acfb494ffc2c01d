use super::batch::Batch;
use super::AwaitAll as AwaitAllTrait;
use crate::utils::MaybeDone;

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A future which waits for every future in a `Vec` to settle.
///
/// This `struct` is created by the [`await_all`] method on the [`AwaitAll`]
/// trait, or by the [`await_all`][crate::future::await_all] function. See
/// their documentation for more.
///
/// [`await_all`]: crate::future::AwaitAll::await_all
/// [`AwaitAll`]: crate::future::AwaitAll
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct AwaitAll<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    batch: Batch<T, E>,
    /// The futures, pinned in place on the heap.
    futures: Pin<Box<[MaybeDone<Fut>]>>,
}

impl<Fut, T, E> AwaitAll<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        Self {
            batch: Batch::new(futures.len()),
            futures: Box::into_pin(futures.into_iter().map(MaybeDone::new).collect()),
        }
    }
}

impl<Fut, T, E> AwaitAllTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Ok = Vec<T>;
    type Error = E;
    type Future = AwaitAll<Fut::IntoFuture, T, E>;

    fn await_all(self) -> Self::Future {
        AwaitAll::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut, T, E> fmt::Debug for AwaitAll<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.batch.state()).finish()
    }
}

impl<Fut, T, E> Future for AwaitAll<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        this.batch.poll_settle(this.futures.as_mut(), cx)
    }
}
