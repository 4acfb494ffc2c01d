#![allow(clippy::module_inception)]

mod maybe_done;
mod poll_state;

pub(crate) use maybe_done::MaybeDone;
pub(crate) use poll_state::PollState;
