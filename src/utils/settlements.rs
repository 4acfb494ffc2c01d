use std::mem;

/// The recorded outcomes of a batch, indexed by input position.
///
/// Besides the outcomes themselves this tracks which failure was recorded
/// first, so that the batch can report it once every member has settled.
#[derive(Debug)]
pub(crate) struct Settlements<T, E> {
    slots: Vec<Option<Result<T, E>>>,
    first_failure: Option<usize>,
}

impl<T, E> Settlements<T, E> {
    /// Create storage for `len` outcomes, none of them recorded yet.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            first_failure: None,
        }
    }

    /// Record the outcome of the member at `index`.
    pub(crate) fn record(&mut self, index: usize, outcome: Result<T, E>) {
        debug_assert!(
            self.slots[index].is_none(),
            "an outcome must only be recorded once"
        );
        if outcome.is_err() && self.first_failure.is_none() {
            self.first_failure = Some(index);
        }
        self.slots[index] = Some(outcome);
    }

    /// Index of the first failure recorded so far.
    pub(crate) fn first_failure(&self) -> Option<usize> {
        self.first_failure
    }

    /// Take the combined outcome, leaving the storage empty.
    ///
    /// Yields the first recorded failure if there was one, otherwise every
    /// success value in input order. Must only be called once every slot has
    /// been recorded.
    pub(crate) fn take(&mut self) -> Result<Vec<T>, E> {
        let slots = mem::take(&mut self.slots);

        if let Some(index) = self.first_failure.take() {
            return match slots.into_iter().nth(index) {
                Some(Some(Err(err))) => Err(err),
                _ => unreachable!("the first failure index points at a recorded `Err`"),
            };
        }

        Ok(slots
            .into_iter()
            .map(|slot| match slot {
                Some(Ok(value)) => value,
                _ => unreachable!("every member settles successfully before the batch is taken"),
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_ok_in_input_order() {
        let mut settlements = Settlements::<&str, &str>::new(3);
        settlements.record(2, Ok("c"));
        settlements.record(0, Ok("a"));
        settlements.record(1, Ok("b"));
        assert_eq!(settlements.first_failure(), None);
        assert_eq!(settlements.take(), Ok(vec!["a", "b", "c"]));
    }

    #[test]
    fn first_recorded_failure_wins() {
        let mut settlements = Settlements::<&str, &str>::new(3);
        settlements.record(2, Err("recorded first"));
        settlements.record(0, Err("recorded second"));
        settlements.record(1, Ok("fine"));
        assert_eq!(settlements.first_failure(), Some(2));
        assert_eq!(settlements.take(), Err("recorded first"));
    }

    #[test]
    fn empty() {
        let mut settlements = Settlements::<(), ()>::new(0);
        assert_eq!(settlements.take(), Ok(vec![]));
    }
}
