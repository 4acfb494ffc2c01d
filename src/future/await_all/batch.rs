use crate::utils::{get_pin_mut, MaybeDone, PollState, Settlements, WakerVec};

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use tracing::{debug, trace};

/// The bookkeeping shared by every `AwaitAll` container.
///
/// Owns everything except the futures themselves, which the containers keep
/// in whatever pinned layout suits them and lend out as a pinned slice. Each
/// future is dropped as soon as it settles.
#[derive(Debug)]
pub(super) struct Batch<T, E> {
    /// A boolean which holds whether the batch has completed
    consumed: bool,
    /// The number of futures which are currently still in-flight
    pending: usize,
    /// The individual poll state of each future.
    state: Vec<PollState>,
    /// The outcomes recorded so far.
    settlements: Settlements<T, E>,
    /// A structure holding the waker passed to the batch, and the various
    /// sub-wakers passed to the contained futures.
    wakers: WakerVec,
}

impl<T, E> Batch<T, E> {
    pub(super) fn new(len: usize) -> Self {
        Self {
            consumed: false,
            pending: len,
            state: vec![PollState::Pending; len],
            settlements: Settlements::new(len),
            wakers: WakerVec::new(len),
        }
    }

    pub(super) fn state(&self) -> &[PollState] {
        &self.state
    }

    /// Poll every woken member of `futures`, and produce the combined
    /// outcome once none of them is pending anymore.
    pub(super) fn poll_settle<Fut>(
        &mut self,
        mut futures: Pin<&mut [MaybeDone<Fut>]>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<Vec<T>, E>>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        assert!(!self.consumed, "Futures must not be polled after completing");
        debug_assert_eq!(futures.len(), self.state.len());

        {
            let mut readiness = self.wakers.readiness();
            readiness.set_waker(cx.waker());
            if self.pending > 0 && !readiness.any_ready() {
                // Nothing is ready yet
                return Poll::Pending;
            }
        }

        for index in 0..self.state.len() {
            // Clear first, so stray wakes of settled members don't linger.
            let woken = self.wakers.readiness().clear_ready(index);
            if !woken || !self.state[index].is_pending() {
                continue;
            }

            let mut cx = Context::from_waker(self.wakers.get(index));
            if let Poll::Ready(outcome) =
                get_pin_mut(futures.as_mut(), index).poll_settle(&mut cx)
            {
                trace!(index, failed = outcome.is_err(), "batch member settled");
                self.state[index].set_settled();
                self.settlements.record(index, outcome);
                self.pending -= 1;
            }
        }

        if self.pending > 0 {
            return Poll::Pending;
        }

        // Mark all data as "consumed" before we take it
        self.consumed = true;
        for state in self.state.iter_mut() {
            debug_assert!(state.is_settled(), "Future should have settled");
            state.set_consumed();
        }

        let failed_at = self.settlements.first_failure();
        debug!(len = self.state.len(), ?failed_at, "batch settled");
        Poll::Ready(self.settlements.take())
    }
}
