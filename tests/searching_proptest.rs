use algorist::searching::{binary_search, linear_search, linear_search_by, to_sentinel, NOT_FOUND};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_binary_search_agrees_with_membership(
        input in proptest::collection::vec(-100i32..100, 0..128),
        target in -110i32..110,
    ) {
        let mut sorted = input;
        sorted.sort_unstable();

        match binary_search(&sorted, &target) {
            Some(i) => prop_assert_eq!(sorted[i], target),
            None => {
                prop_assert!(!sorted.contains(&target));
                prop_assert_eq!(linear_search(&sorted, &target), None);
            }
        }
    }

    #[test]
    fn test_linear_search_finds_first_occurrence(
        input in proptest::collection::vec(0u8..16, 0..64),
        target in 0u8..16,
    ) {
        let expected = input.iter().position(|x| *x == target);
        prop_assert_eq!(linear_search(&input, &target), expected);
    }

    #[test]
    fn test_binary_search_never_panics_on_unsorted(
        input in proptest::collection::vec(any::<i64>(), 0..64),
        target in any::<i64>(),
    ) {
        if let Some(i) = binary_search(&input, &target) {
            prop_assert_eq!(input[i], target);
        }
    }
}

#[test]
fn test_reference_sentinels() {
    let sorted = [1, 3, 5, 7, 9, 11];
    assert_eq!(to_sentinel(binary_search(&sorted, &7)), 3);
    assert_eq!(to_sentinel(binary_search(&sorted, &6)), NOT_FOUND);
    assert_eq!(to_sentinel(linear_search(&[4, 2, 7, 1, 9, 3], &7)), 2);
    assert_eq!(to_sentinel(linear_search(&[4, 2], &8)), -1);
}

#[test]
fn test_linear_search_by_on_records() {
    let people = [("ada", 36), ("alan", 41), ("grace", 85)];
    assert_eq!(linear_search_by(&people, |p| p.1 > 40), Some(1));
    assert_eq!(linear_search_by(&people, |p| p.0.is_empty()), None);
}
