//! Batch settlement for fallible futures, plus a handful of small helpers.
//!
//! The centerpiece is [`future::AwaitAll`]: it waits for every future in a
//! batch to settle and then yields either all success values, in input order,
//! or the first failure it observed. Unlike `try_join` it never cuts a batch
//! short, so every member is guaranteed to have run to completion by the time
//! the result is available.
//!
//! Around it sit a few stateless helpers:
//!
//! - [`flatten`]: deep-flatten nested sequences.
//! - [`sort`]: delegate sorting to a caller-supplied function when it matters.
//! - [`currency`]: format amounts as US dollars.
//! - [`fetch`]: fetch a JSON payload from a remote endpoint.
//!
//! # Examples
//!
//! ```rust
//! use settle_utils::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let batch = vec![future::ready(Ok("Hello")), future::ready(Ok("World"))];
//!     assert_eq!(batch.await_all().await, Ok::<_, ()>(vec!["Hello", "World"]));
//! })
//! ```

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The settle-utils prelude.
pub mod prelude {
    pub use super::future::AwaitAll as _;
}

pub mod currency;
pub mod fetch;
pub mod flatten;
pub mod future;
pub mod sort;

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::future::await_all::array::AwaitAll;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::future::await_all::vec::AwaitAll;
}
