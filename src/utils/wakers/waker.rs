use std::sync::{Arc, Mutex};
use std::task::Wake;

use super::readiness::{lock, Readiness};

/// A waker for a single batch member.
///
/// Marks its member as ready and forwards the wake-up to the parent waker
/// the first time the member becomes ready.
#[derive(Debug, Clone)]
pub(crate) struct InlineWaker {
    pub(crate) index: usize,
    pub(crate) readiness: Arc<Mutex<Readiness>>,
}

impl InlineWaker {
    /// Create a new instance of `InlineWaker`.
    pub(crate) fn new(index: usize, readiness: Arc<Mutex<Readiness>>) -> Self {
        Self { index, readiness }
    }
}

impl Wake for InlineWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let mut readiness = lock(&self.readiness);
        if !readiness.set_ready(self.index) {
            // No parent yet means we haven't been polled; the first poll
            // visits every member anyway.
            if let Some(parent) = readiness.parent_waker() {
                parent.wake_by_ref();
            }
        }
    }
}
