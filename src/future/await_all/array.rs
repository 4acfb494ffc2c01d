use super::batch::Batch;
use super::AwaitAll as AwaitAllTrait;
use crate::utils::{array_as_pin_slice, MaybeDone};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A future which waits for every future in an array to settle.
///
/// This `struct` is created by the [`await_all`] method on the [`AwaitAll`]
/// trait. See its documentation for more.
///
/// [`await_all`]: crate::future::AwaitAll::await_all
/// [`AwaitAll`]: crate::future::AwaitAll
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct AwaitAll<Fut, T, E, const N: usize>
where
    Fut: Future<Output = Result<T, E>>,
{
    batch: Batch<T, E>,
    #[pin]
    futures: [MaybeDone<Fut>; N],
}

impl<Fut, T, E, const N: usize> AwaitAll<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: [Fut; N]) -> Self {
        Self {
            batch: Batch::new(N),
            futures: futures.map(MaybeDone::new),
        }
    }
}

impl<Fut, T, E, const N: usize> AwaitAllTrait for [Fut; N]
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Ok = [T; N];
    type Error = E;
    type Future = AwaitAll<Fut::IntoFuture, T, E, N>;

    fn await_all(self) -> Self::Future {
        AwaitAll::new(self.map(IntoFuture::into_future))
    }
}

impl<Fut, T, E, const N: usize> fmt::Debug for AwaitAll<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.batch.state()).finish()
    }
}

impl<Fut, T, E, const N: usize> Future for AwaitAll<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<[T; N], E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        this.batch
            .poll_settle(array_as_pin_slice(this.futures), cx)
            .map(|res| {
                res.map(|values| match <[T; N]>::try_from(values) {
                    Ok(values) => values,
                    Err(_) => unreachable!("a batch of N futures yields N values"),
                })
            })
    }
}
