//! tests for quicksort, binary search and top-two maximum
use itersolve::sorting::quicksort::quicksort;
use itersolve::sorting::search::{binary_search, find_top_two_max};
use proptest::prelude::*;

#[test]
fn quicksort_basic() {
    assert_eq!(quicksort(&[3, 1, 4, 1, 5, 9, 2, 6]), vec![1, 1, 2, 3, 4, 5, 6, 9]);
    assert_eq!(quicksort::<i32>(&[]), Vec::<i32>::new());
    assert_eq!(quicksort(&[7]), vec![7]);
}

#[test]
fn quicksort_leaves_input_untouched() {
    let src = vec![2.5, -1.0, 0.0];
    let sorted = quicksort(&src);

    assert_eq!(src, vec![2.5, -1.0, 0.0]);
    assert_eq!(sorted, vec![-1.0, 0.0, 2.5]);
}

#[test]
fn binary_search_hits_and_misses() {
    let src = [1, 3, 5, 7, 9, 11];

    assert_eq!(binary_search(&src, &1), Some(0));
    assert_eq!(binary_search(&src, &7), Some(3));
    assert_eq!(binary_search(&src, &11), Some(5));
    assert_eq!(binary_search(&src, &4), None);
    assert_eq!(binary_search(&src, &12), None);
    assert_eq!(binary_search::<i32>(&[], &1), None);
}

#[test]
fn binary_search_nan_target() {
    assert_eq!(binary_search(&[1.0, 2.0], &f64::NAN), None);
}

#[test]
fn top_two_examples() {
    assert_eq!(find_top_two_max(&[1, 2, 3, 4]), Some((4, 3)));
    assert_eq!(find_top_two_max(&[-8, -3, -2, -10]), Some((-2, -3)));
    assert_eq!(find_top_two_max(&[5, 5]), Some((5, 5)));
    assert_eq!(find_top_two_max(&[3, 1]), Some((3, 1)));
    assert_eq!(find_top_two_max(&[4, 4, 2]), Some((4, 2)));
    assert_eq!(find_top_two_max(&[9]), Some((9, 9)));
    assert_eq!(find_top_two_max::<i32>(&[]), None);
}

proptest! {
    #[test]
    fn quicksort_matches_std(mut v in prop::collection::vec(-1000_i32..1000, 0..200)) {
        let sorted = quicksort(&v);
        v.sort();
        prop_assert_eq!(sorted, v);
    }

    #[test]
    fn binary_search_finds_present_values(
        mut v in prop::collection::vec(-1000_i32..1000, 1..200),
        pick in any::<prop::sample::Index>(),
    ) {
        v.sort();
        let target = v[pick.index(v.len())];

        let idx = binary_search(&v, &target);
        prop_assert!(idx.is_some());
        prop_assert_eq!(v[idx.unwrap()], target);
    }

    #[test]
    fn binary_search_agrees_with_contains(
        mut v in prop::collection::vec(-50_i32..50, 0..60),
        target in -60_i32..60,
    ) {
        v.sort();
        prop_assert_eq!(binary_search(&v, &target).is_some(), v.contains(&target));
    }

    #[test]
    fn top_two_matches_sorted_distinct(v in prop::collection::vec(-100_i32..100, 1..50)) {
        let mut distinct = v.clone();
        distinct.sort_unstable_by(|a, b| b.cmp(a));
        distinct.dedup();
        let second = distinct.get(1).copied().unwrap_or(distinct[0]);

        prop_assert_eq!(find_top_two_max(&v), Some((distinct[0], second)));
    }
}
