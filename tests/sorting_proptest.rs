use algorist::sorting::{bubble_sort, is_sorted, merge, merge_sort, merge_sort_by, quick_sort};
use proptest::prelude::*;

fn sorted_copy(input: &[i32]) -> Vec<i32> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

proptest! {
    #[test]
    fn test_sorts_produce_sorted_permutation(input in proptest::collection::vec(any::<i32>(), 0..200)) {
        let expected = sorted_copy(&input);
        for (name, sorted) in [
            ("bubble", bubble_sort(&input)),
            ("quick", quick_sort(&input)),
            ("merge", merge_sort(&input)),
        ] {
            prop_assert_eq!(sorted.len(), input.len(), "{} changed length", name);
            prop_assert!(is_sorted(&sorted), "{} output not sorted", name);
            // Same multiset: equal to std's sort of the input.
            prop_assert_eq!(&sorted, &expected, "{} is not a permutation", name);
        }
    }

    #[test]
    fn test_sorts_are_idempotent(input in proptest::collection::vec(-50i32..50, 0..100)) {
        let once = quick_sort(&input);
        prop_assert_eq!(quick_sort(&once), once.clone());
        prop_assert_eq!(bubble_sort(&once), once.clone());
        prop_assert_eq!(merge_sort(&once), once);
    }

    #[test]
    fn test_merge_sort_is_stable(keys in proptest::collection::vec(0u8..8, 0..200)) {
        // Tag each key with its input position; equal keys must keep tag order.
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let sorted = merge_sort_by(&tagged, |a, b| a.0.cmp(&b.0));

        let mut expected = tagged.clone();
        expected.sort_by_key(|t| t.0); // std's sort_by_key is stable
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn test_merge_of_sorted_runs(
        left in proptest::collection::vec(any::<i16>(), 0..64),
        right in proptest::collection::vec(any::<i16>(), 0..64),
    ) {
        let (mut left, mut right) = (left, right);
        left.sort_unstable();
        right.sort_unstable();

        let mut expected = left.clone();
        expected.extend_from_slice(&right);
        expected.sort_unstable();

        prop_assert_eq!(merge(left, right), expected);
    }
}

#[test]
fn test_reference_inputs() {
    let input = [64, 34, 25, 12, 22, 11, 90];
    let expected = vec![11, 12, 22, 25, 34, 64, 90];
    assert_eq!(bubble_sort(&input), expected);
    assert_eq!(quick_sort(&input), expected);
    assert_eq!(merge_sort(&input), expected);
    assert_eq!(input, [64, 34, 25, 12, 22, 11, 90]);
}

#[test]
fn test_sorts_on_owned_strings() {
    let input: Vec<String> = ["delta", "alpha", "charlie", "bravo", "alpha"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let expected = vec!["alpha", "alpha", "bravo", "charlie", "delta"];
    assert_eq!(bubble_sort(&input), expected);
    assert_eq!(quick_sort(&input), expected);
    assert_eq!(merge_sort(&input), expected);
}
