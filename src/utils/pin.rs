use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub(crate) fn get_pin_mut<T>(slice: Pin<&mut [T]>, index: usize) -> Pin<&mut T> {
    // SAFETY: indexing never moves elements out of the slice, and the element
    // is pinned because the slice it lives in is pinned.
    unsafe { slice.map_unchecked_mut(|slice| &mut slice[index]) }
}

/// Views a pinned array as a pinned slice.
#[inline]
pub(crate) fn array_as_pin_slice<T, const N: usize>(array: Pin<&mut [T; N]>) -> Pin<&mut [T]> {
    // SAFETY: unsizing an array reference does not move its elements.
    unsafe { array.map_unchecked_mut(|array| array.as_mut_slice()) }
}
