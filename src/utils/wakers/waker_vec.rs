use std::sync::{Arc, Mutex, MutexGuard};
use std::task::Waker;

use super::readiness::lock;
use super::{InlineWaker, Readiness};

/// A collection of wakers which delegate to an in-line waker.
#[derive(Debug)]
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<Readiness>>,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(Readiness::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(InlineWaker::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    /// The waker handed to the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn get(&self, index: usize) -> &Waker {
        &self.wakers[index]
    }

    /// Lock and access the `Readiness`.
    ///
    /// The guard must be released before polling a member, since the member
    /// may wake itself synchronously.
    pub(crate) fn readiness(&self) -> MutexGuard<'_, Readiness> {
        lock(&self.readiness)
    }
}
