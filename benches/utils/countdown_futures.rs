use std::cell::{Cell, RefCell};
use std::collections::BinaryHeap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use super::{shuffle, PrioritizedWaker, State};

/// A shuffled batch of `len` countdown futures. Every `fail_every`th future
/// (by completion order) settles to `Err`; `0` means none do.
pub fn futures_vec(len: usize, fail_every: usize) -> Vec<CountdownFuture> {
    let wakers = Rc::new(RefCell::new(BinaryHeap::new()));
    let completed = Rc::new(Cell::new(0));
    let mut futures: Vec<_> = (0..len)
        .map(|n| {
            let fails = fail_every != 0 && n % fail_every == fail_every - 1;
            CountdownFuture::new(n, len, fails, wakers.clone(), completed.clone())
        })
        .collect();
    shuffle(&mut futures);
    futures
}

/// A future which will _eventually_ settle, but needs to be polled N times
/// before it does. Futures settle in the order of their index, regardless of
/// the order they're polled in.
pub struct CountdownFuture {
    state: State,
    wakers: Rc<RefCell<BinaryHeap<PrioritizedWaker>>>,
    index: usize,
    max_count: usize,
    fails: bool,
    completed_count: Rc<Cell<usize>>,
}

impl CountdownFuture {
    pub fn new(
        index: usize,
        max_count: usize,
        fails: bool,
        wakers: Rc<RefCell<BinaryHeap<PrioritizedWaker>>>,
        completed_count: Rc<Cell<usize>>,
    ) -> Self {
        Self {
            state: State::Init,
            wakers,
            max_count,
            index,
            fails,
            completed_count,
        }
    }

    fn outcome(&self) -> Result<usize, usize> {
        if self.fails {
            Err(self.index)
        } else {
            Ok(self.index)
        }
    }
}

impl Future for CountdownFuture {
    type Output = Result<usize, usize>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // If we are the last future to be polled, skip straight to the Polled state.
        if self.wakers.borrow().len() + 1 == self.max_count {
            self.state = State::Polled;
        }

        match self.state {
            State::Init => {
                // Push our waker onto the stack so we get woken again someday.
                self.wakers
                    .borrow_mut()
                    .push(PrioritizedWaker(self.index, cx.waker().clone()));
                self.state = State::Polled;
                Poll::Pending
            }
            State::Polled => {
                // Wake up the next one
                let _ = self
                    .wakers
                    .borrow_mut()
                    .pop()
                    .map(|PrioritizedWaker(_, waker)| waker.wake());

                if self.completed_count.get() == self.index {
                    self.state = State::Done;
                    self.completed_count.set(self.completed_count.get() + 1);
                    Poll::Ready(self.outcome())
                } else {
                    // We're not done yet, so schedule another wakeup
                    self.wakers
                        .borrow_mut()
                        .push(PrioritizedWaker(self.index, cx.waker().clone()));
                    Poll::Pending
                }
            }
            State::Done => Poll::Ready(self.outcome()),
        }
    }
}
