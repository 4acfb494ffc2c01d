//! Deep flattening of nested sequences.
//!
//! # Examples
//!
//! ```
//! use settle_utils::flatten::flatten;
//! use settle_utils::nested;
//!
//! let input = nested![1, 2, 3, [4, 5, [6, 7, [8, 9, 10]]]];
//! assert_eq!(flatten(input), (1..=10).collect::<Vec<_>>());
//! ```

use std::vec;

/// A value, or a sequence of further nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A single value.
    Item(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(list: Vec<Nested<T>>) -> Self {
        Nested::List(list)
    }
}

impl<T> IntoIterator for Nested<T> {
    type Item = T;
    type IntoIter = FlattenIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        FlattenIter::new(vec![self])
    }
}

/// Build a `Vec<Nested<T>>` from a bracketed literal.
///
/// Every element is either an expression, taken as a single value, or a
/// bracketed list, which nests.
///
/// ```
/// use settle_utils::flatten::Nested;
/// use settle_utils::nested;
///
/// assert_eq!(
///     nested![1, [2, -3]],
///     vec![
///         Nested::Item(1),
///         Nested::List(vec![Nested::Item(2), Nested::Item(-3)]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@acc [$($out:expr,)*]) => {
        ::std::vec![$($out),*]
    };
    (@acc [$($out:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @acc [$($out,)* $crate::flatten::Nested::List($crate::nested![$($inner)*]),]
            $($($rest)*)?
        )
    };
    (@acc [$($out:expr,)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @acc [$($out,)* $crate::flatten::Nested::Item($value),]
            $($($rest)*)?
        )
    };
    ($($items:tt)*) => {
        $crate::nested!(@acc [] $($items)*)
    };
}

/// Flatten arbitrarily nested sequences into a single sequence.
///
/// Values are yielded depth-first, so the output keeps the left-to-right
/// order in which they appear in the input.
pub fn flatten<T>(items: Vec<Nested<T>>) -> Vec<T> {
    FlattenIter::new(items).collect()
}

/// A depth-first iterator over the values of nested sequences.
///
/// Keeps an explicit stack of the sequences it's descended into, so deeply
/// nested input doesn't grow the call stack.
#[derive(Debug)]
pub struct FlattenIter<T> {
    stack: Vec<vec::IntoIter<Nested<T>>>,
}

impl<T> FlattenIter<T> {
    /// Create a new iterator over `items`.
    pub fn new(items: Vec<Nested<T>>) -> Self {
        Self {
            stack: vec![items.into_iter()],
        }
    }
}

impl<T> Iterator for FlattenIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Nested::Item(value)) => return Some(value),
                Some(Nested::List(inner)) => self.stack.push(inner.into_iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
