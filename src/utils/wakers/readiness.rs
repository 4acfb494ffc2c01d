use core::task::Waker;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fixedbitset::FixedBitSet;

/// Tracks which batch members were woken and should be polled again.
#[derive(Debug)]
pub(crate) struct Readiness {
    ready_count: usize,
    ready: FixedBitSet,
    parent_waker: Option<Waker>,
}

impl Readiness {
    /// Create a new instance with every member marked as ready, so the first
    /// poll visits all of them.
    pub(crate) fn new(len: usize) -> Self {
        let mut ready = FixedBitSet::with_capacity(len);
        ready.insert_range(..);
        Self {
            ready_count: len,
            ready,
            parent_waker: None,
        }
    }

    /// Set the ready state to `true` for the given index.
    ///
    /// Returns the old ready state for this index.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        let was_ready = self.ready.put(index);
        if !was_ready {
            self.ready_count += 1;
        }
        was_ready
    }

    /// Set the ready state to `false` for the given index.
    ///
    /// Returns whether the index was previously ready.
    pub(crate) fn clear_ready(&mut self, index: usize) -> bool {
        let was_ready = self.ready.contains(index);
        if was_ready {
            self.ready_count -= 1;
            self.ready.set(index, false);
        }
        was_ready
    }

    /// Returns `true` if any of the members are ready.
    pub(crate) fn any_ready(&self) -> bool {
        self.ready_count > 0
    }

    /// Access the parent waker.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}

/// Lock the readiness, recovering it if a waker panicked while holding it.
///
/// The bitset is valid in every state, so a poisoned lock carries no broken
/// invariant.
pub(crate) fn lock(readiness: &Mutex<Readiness>) -> MutexGuard<'_, Readiness> {
    readiness.lock().unwrap_or_else(PoisonError::into_inner)
}
