use std::cmp::Ordering;

/// Finds `target` in the ascending slice `src`.
///
/// Returns the index of a matching element, or `None` when absent (or when
/// `target` is incomparable, e.g. `NaN`). With duplicates, any matching
/// index may be returned.
pub fn binary_search<T>(src: &[T], target: &T) -> Option<usize>
where T: PartialOrd {
    let mut lo = 0;
    let mut hi = src.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match src[mid].partial_cmp(target)? {
            Ordering::Less    => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal   => return Some(mid),
        }
    }
    None
}

/// Returns `(max, second)` of `src`, or `None` for an empty slice.
///
/// `second` is the largest value strictly below `max` when one exists;
/// if every element equals `max` it is `max` itself.
///
/// ```text
/// [1, 2, 3, 4]     -> (4, 3)
/// [-8, -3, -2, -10] -> (-2, -3)
/// [5, 5]           -> (5, 5)
/// ```
pub fn find_top_two_max<T>(src: &[T]) -> Option<(T, T)>
where T: PartialOrd + Copy {
    let (&first, rest) = src.split_first()?;

    let mut max_1 = first;
    let mut max_2 = first;
    for &item in rest {
        if item > max_1 {
            max_2 = max_1;
            max_1 = item;
        } else if item < max_1 && (item > max_2 || max_1 == max_2) {
            max_2 = item;
        }
    }
    Some((max_1, max_2))
}
