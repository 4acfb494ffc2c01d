/// Enumerate the current poll state of a batch member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum PollState {
    /// The future has not settled yet and must keep being polled.
    #[default]
    Pending,
    /// The future settled and its outcome has been recorded.
    Settled,
    /// The batch completed and handed out every recorded outcome.
    Consumed,
}

impl PollState {
    /// Returns `true` if the poll state is [`Pending`][Self::Pending].
    #[must_use]
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the poll state is [`Settled`][Self::Settled].
    #[must_use]
    #[inline]
    pub(crate) fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }

    /// Sets the poll state to [`Settled`][Self::Settled].
    #[inline]
    pub(crate) fn set_settled(&mut self) {
        *self = PollState::Settled;
    }

    /// Sets the poll state to [`Consumed`][Self::Consumed].
    #[inline]
    pub(crate) fn set_consumed(&mut self) {
        *self = PollState::Consumed;
    }
}
