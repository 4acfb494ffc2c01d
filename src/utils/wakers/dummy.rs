use std::sync::Arc;
use std::task::Wake;

/// A waker that does nothing when woken, for polling by hand in tests.
pub(crate) struct DummyWaker();

impl Wake for DummyWaker {
    fn wake(self: Arc<Self>) {}
}
