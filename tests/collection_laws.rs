//! Property-based tests for Collection laws.
//!
//! This module verifies the algebraic laws and invariants of Collection
//! using proptest.

use collectra::collection::{Collection, Sequence};
use proptest::prelude::*;

// =============================================================================
// Round-Trip Laws
// =============================================================================

proptest! {
    /// Construction/extraction round-trip: values in, same values out.
    #[test]
    fn prop_from_values_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let collection = Sequence::from_values(values.clone());
        prop_assert_eq!(collection.into_values(), values);
    }

    /// Entry round-trip: a collection rebuilt from its own entries is equal.
    #[test]
    fn prop_from_entries_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let collection = Sequence::from_values(values);
        let rebuilt = Collection::from_entries(collection.clone().into_entries());
        prop_assert_eq!(rebuilt, collection);
    }

    /// Sequential keys are always the dense range 0..n after construction.
    #[test]
    fn prop_from_values_keys_are_dense(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let collection = Sequence::from_values(values);
        let keys: Vec<usize> = collection.keys().copied().collect();
        let expected: Vec<usize> = (0..keys.len()).collect();
        prop_assert_eq!(keys, expected);
    }
}

// =============================================================================
// Push/Pop Laws
// =============================================================================

proptest! {
    /// Push then pop is the identity on content and order.
    #[test]
    fn prop_push_pop_inverse(
        values in prop::collection::vec(any::<i32>(), 0..50),
        new_value: i32
    ) {
        let original = Sequence::from_values(values);
        let mut collection = original.clone();
        collection.push(new_value);

        prop_assert_eq!(collection.pop(), Ok(new_value));
        prop_assert_eq!(collection, original);
    }

    /// Push increases the length by one.
    #[test]
    fn prop_push_length(
        values in prop::collection::vec(any::<i32>(), 0..50),
        new_value: i32
    ) {
        let mut collection = Sequence::from_values(values);
        let original_length = collection.len();
        collection.push(new_value);
        prop_assert_eq!(collection.len(), original_length + 1);
    }

    /// Popping every entry restores the values in reverse insertion order.
    #[test]
    fn prop_pop_drains_in_reverse(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let mut collection = Sequence::from_values(values.clone());
        let mut drained = Vec::new();
        while let Ok(value) = collection.pop() {
            drained.push(value);
        }
        drained.reverse();
        prop_assert_eq!(drained, values);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity law: mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values);
        let mapped = collection.clone().map(|value| value);
        prop_assert_eq!(mapped, collection);
    }

    /// Composition law: map(f) then map(g) equals map(g after f).
    #[test]
    fn prop_map_composition(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let double = |value: i32| value.wrapping_mul(2);
        let offset = |value: i32| value.wrapping_add(3);

        let collection = Sequence::from_values(values);
        let stepwise = collection.clone().map(double).map(offset);
        let composed = collection.map(|value| offset(double(value)));

        prop_assert_eq!(stepwise, composed);
    }

    /// Map preserves the key of every entry.
    #[test]
    fn prop_map_preserves_keys(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values);
        let original_keys: Vec<usize> = collection.keys().copied().collect();
        let mapped = collection.map(|value| value.to_string());
        let mapped_keys: Vec<usize> = mapped.keys().copied().collect();
        prop_assert_eq!(original_keys, mapped_keys);
    }
}

// =============================================================================
// Filter & Partition Laws
// =============================================================================

proptest! {
    /// Filtering twice equals filtering by the conjunction.
    #[test]
    fn prop_filter_conjunction(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let even = |value: &i32| value % 2 == 0;
        let positive = |value: &i32| *value > 0;

        let collection = Sequence::from_values(values);
        let stepwise = collection.clone().filter(even).filter(positive);
        let conjunction = collection.filter(|value| even(value) && positive(value));

        prop_assert_eq!(stepwise, conjunction);
    }

    /// Partition outputs are disjoint and reconstruct the original entries.
    #[test]
    fn prop_partition_disjoint_union(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values);
        let original = collection.clone().into_entries();
        let (matched, unmatched) = collection.partition(|value| value % 2 == 0);

        let matched = matched.into_entries();
        let unmatched = unmatched.into_entries();

        prop_assert_eq!(matched.len() + unmatched.len(), original.len());

        let mut merged = [matched, unmatched].concat();
        merged.sort_by_key(|(key, _)| *key);
        prop_assert_eq!(merged, original);
    }

    /// Filter keeps exactly the entries partition puts in the matched side.
    #[test]
    fn prop_filter_agrees_with_partition(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values);
        let filtered = collection.clone().filter(|value| value % 3 == 0);
        let (matched, _) = collection.partition(|value| value % 3 == 0);
        prop_assert_eq!(filtered, matched);
    }
}

// =============================================================================
// Combination Laws
// =============================================================================

proptest! {
    /// Zip output length is the minimum of the operand lengths, and every
    /// pair combines the values at the same position.
    #[test]
    fn prop_zip_pairing(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let zipped = Sequence::from_values(left.clone()).zip(right.clone());
        let pairs = zipped.into_values();

        prop_assert_eq!(pairs.len(), left.len().min(right.len()));
        for (position, (first, second)) in pairs.iter().enumerate() {
            prop_assert_eq!(*first, left[position]);
            prop_assert_eq!(*second, right[position]);
        }
    }

    /// Concat output holds both operands' values in order.
    #[test]
    fn prop_concat_values(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let combined = Sequence::from_values(left.clone()).concat(right.clone());
        let expected = [left, right].concat();
        prop_assert_eq!(combined.into_values(), expected);
    }

    /// Combine with positionally unique keys pairs the operands exactly.
    #[test]
    fn prop_combine_pairs_positionally(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let keys: Vec<usize> = (0..values.len()).collect();
        let combined = Sequence::from_values(keys.clone())
            .combine(values.clone())
            .unwrap();
        let expected: Vec<(usize, i32)> = keys.into_iter().zip(values).collect();
        prop_assert_eq!(combined.into_entries(), expected);
    }

    /// Combine rejects operands of different lengths.
    #[test]
    fn prop_combine_length_mismatch(
        values in prop::collection::vec(any::<i32>(), 0..50),
        extra: i32
    ) {
        let keys: Vec<usize> = (0..values.len()).collect();
        let mut longer = values;
        longer.push(extra);
        let result = Sequence::from_values(keys).combine(longer);
        prop_assert!(result.is_err());
    }

    /// Collapse yields exactly the leaves, depth-first, left to right.
    #[test]
    fn prop_collapse_leaves(
        nested in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..10), 0..10)
    ) {
        let collection = Sequence::from_values(nested.clone());
        let flattened = collection.collapse();
        let expected: Vec<i32> = nested.into_iter().flatten().collect();
        prop_assert_eq!(flattened.into_values(), expected);
    }

    /// flat_map equals map followed by a one-level collapse.
    #[test]
    fn prop_flat_map_is_map_then_collapse(
        values in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let expand = |value: i32| vec![value, value.wrapping_add(1)];

        let collection = Sequence::from_values(values);
        let flat_mapped = collection.clone().flat_map(expand);
        let collapsed = collection.map(expand).collapse();

        prop_assert_eq!(flat_mapped, collapsed);
    }
}

// =============================================================================
// Aggregation & Ordering Laws
// =============================================================================

proptest! {
    /// Fold agrees with the standard iterator fold over the same values.
    #[test]
    fn prop_fold_matches_iterator_fold(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values.clone());
        let folded = collection.fold(0_i64, |accumulator, value| accumulator + i64::from(value));
        let expected = values.into_iter().fold(0_i64, |accumulator, value| {
            accumulator + i64::from(value)
        });
        prop_assert_eq!(folded, expected);
    }

    /// Unseeded reduce agrees with a fold seeded by the first value.
    #[test]
    fn prop_reduce_matches_seeded_fold(
        values in prop::collection::vec(any::<i64>(), 1..50)
    ) {
        let collection = Sequence::from_values(values.clone());
        let reduced = collection.reduce(|accumulator, value| accumulator.wrapping_add(value));

        let mut iterator = values.into_iter();
        let first = iterator.next().unwrap();
        let expected = iterator.fold(first, |accumulator, value| accumulator.wrapping_add(value));

        prop_assert_eq!(reduced, Ok(expected));
    }

    /// Sum agrees with the standard iterator sum.
    #[test]
    fn prop_sum_matches_iterator_sum(
        values in prop::collection::vec(-1000_i64..1000, 0..50)
    ) {
        let collection = Sequence::from_values(values.clone());
        let expected: i64 = values.into_iter().sum();
        prop_assert_eq!(collection.sum(), expected);
    }

    /// Sort yields the same multiset in ascending order, losing nothing.
    #[test]
    fn prop_sort_is_an_ordered_permutation(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values.clone());
        let sorted = collection.sort().unwrap().into_values();

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    /// sort_desc is sort reversed.
    #[test]
    fn prop_sort_desc_reverses_sort(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let ascending = Sequence::from_values(values.clone()).sort().unwrap().into_values();
        let descending = Sequence::from_values(values).sort_desc().unwrap().into_values();

        let mut reversed = ascending;
        reversed.reverse();
        prop_assert_eq!(descending, reversed);
    }

    /// Sorting keeps each value's original key attached.
    #[test]
    fn prop_sort_preserves_key_association(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let collection = Sequence::from_values(values.clone());
        let sorted = collection.sort().unwrap();
        for (key, value) in sorted.into_entries() {
            prop_assert_eq!(value, values[key]);
        }
    }
}

// =============================================================================
// Rendering Laws
// =============================================================================

proptest! {
    /// join with a single separator agrees with the standard slice join.
    #[test]
    fn prop_join_matches_slice_join(
        values in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let collection = Sequence::from_values(values.clone());
        let rendered: Vec<String> = values.into_iter().map(|value| value.to_string()).collect();
        prop_assert_eq!(collection.join(","), rendered.join(","));
    }
}
