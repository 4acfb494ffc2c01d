//! Utilities to implement the futures of this crate.

mod pin;
mod poll_state;
mod settlements;
mod wakers;

#[cfg(test)]
mod delayed;

pub(crate) use pin::{array_as_pin_slice, get_pin_mut};
pub(crate) use poll_state::{MaybeDone, PollState};
pub(crate) use settlements::Settlements;
pub(crate) use wakers::WakerVec;

#[cfg(test)]
pub(crate) use delayed::Delayed;
#[cfg(test)]
pub(crate) use wakers::DummyWaker;
