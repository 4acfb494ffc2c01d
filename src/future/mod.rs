//! Awaiting batches of fallible futures.
//!
//! A batch is an ordered collection of futures which each settle to either
//! `Ok(T)` or `Err(E)`. [`AwaitAll`] waits for *every* member to settle before
//! it produces anything, and then yields either all success values in input
//! order or the first failure it observed.
//!
//! # Examples
//!
//! ```
//! use settle_utils::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let batch = vec![future::ready(Ok("Hello")), future::ready(Ok("World"))];
//!     let res: Result<_, &str> = batch.await_all().await;
//!     assert_eq!(res, Ok(vec!["Hello", "World"]));
//!
//!     let batch = [future::ready(Err("Error")), future::ready(Ok("World"))];
//!     assert_eq!(batch.await_all().await, Err("Error"));
//! })
//! ```
//!
//! # Compared to `try_join`
//!
//! | Name       | Return signature    | When does it return? |
//! | ---        | ---                 | ---                  |
//! | `try_join` | `Result<Vec<T>, E>` | On the first `Err`, or once all are `Ok`
//! | `AwaitAll` | `Result<Vec<T>, E>` | Once all members have settled
//!
//! A failing member never cuts the batch short: slower members keep running
//! until they settle, and only then is the first failure reported. Any other
//! failures are dropped.
pub use await_all::{await_all, AwaitAll};

pub(crate) mod await_all;
