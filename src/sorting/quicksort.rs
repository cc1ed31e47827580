/// Returns a sorted copy of `src`.
///
/// Partitions around the first element into `less`, `equal` and `greater`
/// groups and recurses on the outer two. Elements that compare equal keep
/// their input order. Values incomparable with the pivot (e.g. `NaN`) go to
/// `greater`; the pivot itself always lands in `equal`, so every recursion
/// works on a strictly shorter slice.
pub fn quicksort<T>(src: &[T]) -> Vec<T>
where T: PartialOrd + Clone {
    let Some((pivot, rest)) = src.split_first() else {
        return Vec::new();
    };

    let mut less    = Vec::new();
    let mut equal   = vec![pivot.clone()];
    let mut greater = Vec::new();
    for item in rest {
        if item == pivot {
            equal.push(item.clone());
        } else if item < pivot {
            less.push(item.clone());
        } else {
            greater.push(item.clone());
        }
    }

    let mut sorted = quicksort(&less);
    sorted.extend(equal);
    sorted.extend(quicksort(&greater));
    sorted
}
