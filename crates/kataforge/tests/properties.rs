//! Property tests for the exercise library.
//!
//! Each property here restates a contract from the module docs: exact
//! sums and permutation-free output for the N-sum searches, product-sized
//! keypad output, order-preserving list surgery, and balanced generation
//! counted by the Catalan numbers.

use proptest::prelude::*;

use kataforge::{
    four_sum, generate_parentheses, is_balanced, letter_combinations, merge_sorted,
    merge_sorted_recursive, remove_nth_from_end, three_sum_closest, three_sum_target, ListNode,
};

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Multiset keys of the combinations, for permutation-freedom checks.
fn sorted_keys(combos: &[impl AsRef<[i64]>]) -> Vec<Vec<i64>> {
    let mut keys: Vec<Vec<i64>> = combos
        .iter()
        .map(|c| {
            let mut key = c.as_ref().to_vec();
            key.sort_unstable();
            key
        })
        .collect();
    keys.sort();
    keys
}

proptest! {
    #[test]
    fn three_sum_exact_and_permutation_free(
        nums in prop::collection::vec(-30i64..30, 0..40),
        target in -60i64..60,
    ) {
        let triples = three_sum_target(&nums, target);
        for t in &triples {
            prop_assert_eq!(t.iter().sum::<i64>(), target);
            prop_assert!(is_sorted(t));
        }
        let keys = sorted_keys(&triples);
        let mut deduped = keys.clone();
        deduped.dedup();
        prop_assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn three_sum_under_arity_is_empty(
        nums in prop::collection::vec(any::<i64>(), 0..3),
        target in any::<i64>(),
    ) {
        prop_assert!(three_sum_target(&nums, target).is_empty());
    }

    #[test]
    fn four_sum_exact_and_permutation_free(
        nums in prop::collection::vec(-20i64..20, 0..24),
        target in -40i64..40,
    ) {
        let quads = four_sum(&nums, target);
        for q in &quads {
            prop_assert_eq!(q.iter().sum::<i64>(), target);
            prop_assert!(is_sorted(q));
        }
        let keys = sorted_keys(&quads);
        let mut deduped = keys.clone();
        deduped.dedup();
        prop_assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn closest_sum_matches_brute_force(
        nums in prop::collection::vec(-50i64..50, 3..12),
        target in -200i64..200,
    ) {
        let got = three_sum_closest(&nums, target).unwrap();

        let mut best_delta = i64::MAX;
        for i in 0..nums.len() {
            for j in i + 1..nums.len() {
                for k in j + 1..nums.len() {
                    let delta = (nums[i] + nums[j] + nums[k] - target).abs();
                    best_delta = best_delta.min(delta);
                }
            }
        }
        prop_assert_eq!((got - target).abs(), best_delta);
    }

    #[test]
    fn letter_combination_count_is_set_size_product(digits in "[2-9]{0,6}") {
        let combos = letter_combinations(&digits).unwrap();
        if digits.is_empty() {
            prop_assert!(combos.is_empty());
        } else {
            let expected: usize = digits
                .chars()
                .map(|d| if d == '7' || d == '9' { 4 } else { 3 })
                .product();
            prop_assert_eq!(combos.len(), expected);
            for combo in &combos {
                prop_assert_eq!(combo.chars().count(), digits.len());
            }
        }
    }

    #[test]
    fn merge_is_sorted_union(
        xs in prop::collection::vec(-100i64..100, 0..30),
        ys in prop::collection::vec(-100i64..100, 0..30),
    ) {
        let mut xs = xs;
        let mut ys = ys;
        xs.sort_unstable();
        ys.sort_unstable();

        let merged = merge_sorted(ListNode::from_slice(&xs), ListNode::from_slice(&ys));
        let values = ListNode::to_vec(&merged);

        prop_assert_eq!(values.len(), xs.len() + ys.len());
        prop_assert!(is_sorted(&values));

        let mut expected = xs.clone();
        expected.extend(&ys);
        expected.sort_unstable();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn merge_variants_agree(
        xs in prop::collection::vec(-100i64..100, 0..20),
        ys in prop::collection::vec(-100i64..100, 0..20),
    ) {
        let mut xs = xs;
        let mut ys = ys;
        xs.sort_unstable();
        ys.sort_unstable();

        let iterative = merge_sorted(ListNode::from_slice(&xs), ListNode::from_slice(&ys));
        let recursive = merge_sorted_recursive(ListNode::from_slice(&xs), ListNode::from_slice(&ys));
        prop_assert_eq!(ListNode::to_vec(&iterative), ListNode::to_vec(&recursive));
    }

    #[test]
    fn remove_nth_drops_exactly_that_node(
        values in prop::collection::vec(-100i64..100, 1..20),
        position in any::<prop::sample::Index>(),
    ) {
        let n = position.index(values.len()) + 1;
        let list = ListNode::from_slice(&values);
        let list = remove_nth_from_end(list, n).unwrap();

        let mut expected = values.clone();
        expected.remove(values.len() - n);
        prop_assert_eq!(ListNode::to_vec(&list), expected);
    }

    #[test]
    fn generated_parentheses_are_balanced(n in 0usize..9) {
        const CATALAN: [usize; 9] = [1, 1, 2, 5, 14, 42, 132, 429, 1430];

        let all = generate_parentheses(n);
        let expected = if n == 0 { 0 } else { CATALAN[n] };
        prop_assert_eq!(all.len(), expected);
        for s in &all {
            prop_assert_eq!(s.len(), 2 * n);
            prop_assert!(is_balanced(s), "unbalanced output {:?}", s);
        }
    }
}
