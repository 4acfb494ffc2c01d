//! Conditional delegation of list sorting.

/// Hand `items` to `sort_fn` when there's anything to sort.
///
/// If `sort_fn` is `None` or `items` holds at most one element, `items` is
/// returned unchanged and `sort_fn` is never invoked. Otherwise `sort_fn` is
/// invoked exactly once with the full sequence, and whatever it returns is
/// the result. This never sorts anything itself.
///
/// # Examples
///
/// ```
/// use settle_utils::sort::sort_list;
///
/// let sorted = sort_list(vec![3, 2, 1], Some(|mut items: Vec<i32>| {
///     items.sort_unstable();
///     items
/// }));
/// assert_eq!(sorted, [1, 2, 3]);
///
/// let untouched = sort_list(vec![3, 2, 1], None::<fn(Vec<i32>) -> Vec<i32>>);
/// assert_eq!(untouched, [3, 2, 1]);
/// ```
pub fn sort_list<T, F>(items: Vec<T>, sort_fn: Option<F>) -> Vec<T>
where
    F: FnOnce(Vec<T>) -> Vec<T>,
{
    match sort_fn {
        Some(sort_fn) if items.len() > 1 => sort_fn(items),
        _ => items,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::cell::RefCell;

    #[test]
    fn calls_the_sorter_once_with_the_full_list() {
        let calls = RefCell::new(Vec::new());
        let res = sort_list(
            vec![3, 2, 1],
            Some(|items: Vec<i32>| {
                calls.borrow_mut().push(items.clone());
                items
            }),
        );
        assert_eq!(calls.into_inner(), [[3, 2, 1]]);
        assert_eq!(res, [3, 2, 1]);
    }

    #[test]
    fn skips_the_sorter_for_short_lists() {
        let calls = RefCell::new(0);
        let sorter = |items: Vec<i32>| {
            *calls.borrow_mut() += 1;
            items
        };
        assert_eq!(sort_list(vec![1], Some(sorter)), [1]);
        assert_eq!(sort_list(Vec::new(), Some(sorter)), Vec::<i32>::new());
        assert_eq!(calls.into_inner(), 0);
    }

    #[test]
    fn without_a_sorter_keeps_the_order() {
        let res = sort_list(vec!["b", "a"], None::<fn(Vec<&str>) -> Vec<&str>>);
        assert_eq!(res, ["b", "a"]);
    }

    #[test]
    fn returns_what_the_sorter_returns() {
        let res = sort_list(vec![2, 3, 1], Some(|mut items: Vec<i32>| {
            items.sort_unstable_by(|a, b| b.cmp(a));
            items
        }));
        assert_eq!(res, [3, 2, 1]);
    }
}
