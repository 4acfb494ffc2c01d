use core::future::{Future, IntoFuture};

pub(crate) mod array;
mod batch;
pub(crate) mod vec;

/// Wait for every fallible future in a batch to settle.
///
/// Awaits multiple futures simultaneously. Once all of them have settled it
/// returns the success values in input order, or the first failure that was
/// observed.
pub trait AwaitAll {
    /// The output when every member succeeds.
    type Ok;

    /// The failure reason of a member.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Ok, Self::Error>>;

    /// Waits for every member of the batch to settle.
    ///
    /// All members are polled concurrently, and none of them is dropped early
    /// when another fails. The failure reported is the one observed first;
    /// members settling during the same wake-up are inspected in input order.
    fn await_all(self) -> Self::Future;
}

/// Waits for every future produced by `computations` to settle.
///
/// This is the free-function form of [`AwaitAll::await_all`], accepting any
/// iterator of futures.
///
/// # Examples
///
/// ```
/// use settle_utils::future::await_all;
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let res = await_all((1..=3).map(|n| future::ready(Ok::<_, ()>(n * 10)))).await;
///     assert_eq!(res, Ok(vec![10, 20, 30]));
/// })
/// ```
pub fn await_all<I, T, E>(computations: I) -> vec::AwaitAll<<I::Item as IntoFuture>::IntoFuture, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    vec::AwaitAll::new(
        computations
            .into_iter()
            .map(IntoFuture::into_future)
            .collect(),
    )
}
