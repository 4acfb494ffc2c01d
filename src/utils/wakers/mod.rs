mod readiness;
mod waker;
mod waker_vec;

#[cfg(test)]
mod dummy;

#[cfg(test)]
pub(crate) use dummy::DummyWaker;

pub(crate) use readiness::Readiness;
pub(crate) use waker::InlineWaker;
pub(crate) use waker_vec::WakerVec;
