//! N-sum search: fixed-arity combinations summing to a target.
//!
//! All searches sort a working copy of the input ascending, fix a prefix of
//! the combination with a duplicate-skipping forward scan, and close the
//! remaining two positions by two-pointer convergence over the sorted
//! suffix. Sorting makes duplicate suppression a purely local decision:
//! a fixed value equal to its predecessor would restart an identical
//! suffix search, and equal values under either pointer would re-emit the
//! combination that was just found.
//!
//! The central correctness property is that no two combinations in a
//! result are permutations of each other, even for duplicate-heavy input.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use kataforge_core::{KataforgeError, Result};

/// A three-element combination, values ascending.
pub type Triple = SmallVec<[i64; 3]>;

/// A four-element combination, values ascending.
pub type Quad = SmallVec<[i64; 4]>;

/// Returns all distinct triples summing to zero.
///
/// Input shorter than three elements yields an empty result. Duplicates in
/// the input are fine; the output never contains two triples that are
/// equal as multisets. O(n²).
///
/// # Examples
///
/// ```
/// use kataforge::sum::three_sum;
///
/// let triples = three_sum(&[-1, 0, 1, 2, -1, -4]);
/// assert_eq!(triples.len(), 2);
/// assert!(triples.iter().any(|t| t.as_slice() == [-1, -1, 2]));
/// assert!(triples.iter().any(|t| t.as_slice() == [-1, 0, 1]));
/// ```
pub fn three_sum(nums: &[i64]) -> Vec<Triple> {
    three_sum_target(nums, 0)
}

/// Returns all distinct triples summing to `target`.
///
/// Same contract as [`three_sum`], which is the `target = 0` case.
pub fn three_sum_target(nums: &[i64], target: i64) -> Vec<Triple> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut result: Vec<Triple> = Vec::new();
    if sorted.len() < 3 {
        return result;
    }

    for first in 0..sorted.len() - 2 {
        // An equal fixed value would restart an identical suffix search.
        if first > 0 && sorted[first] == sorted[first - 1] {
            continue;
        }
        let rest = target - sorted[first];
        for (lo, hi) in converging_pairs(&sorted, first + 1, rest) {
            result.push(smallvec![sorted[first], lo, hi]);
        }
    }

    debug!(
        event = "three_sum_done",
        target,
        input_len = nums.len(),
        found = result.len()
    );
    result
}

/// Returns all distinct quadruples summing to `target`.
///
/// The first two elements are fixed by nested duplicate-skipping scans;
/// the last two close by two-pointer convergence. Input shorter than four
/// elements yields an empty result. O(n³).
///
/// # Examples
///
/// ```
/// use kataforge::sum::four_sum;
///
/// let quads = four_sum(&[1, 0, -1, 0, -2, 2], 0);
/// assert_eq!(quads.len(), 3);
/// assert!(quads.iter().any(|q| q.as_slice() == [-2, -1, 1, 2]));
/// ```
pub fn four_sum(nums: &[i64], target: i64) -> Vec<Quad> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut result: Vec<Quad> = Vec::new();
    if sorted.len() < 4 {
        return result;
    }

    for a in 0..sorted.len() - 3 {
        if a > 0 && sorted[a] == sorted[a - 1] {
            continue;
        }
        for b in a + 1..sorted.len() - 2 {
            // The second fixed index starts at a + 1, so the skip compares
            // against b - 1 only past that point.
            if b > a + 1 && sorted[b] == sorted[b - 1] {
                continue;
            }
            let rest = target - sorted[a] - sorted[b];
            for (lo, hi) in converging_pairs(&sorted, b + 1, rest) {
                result.push(smallvec![sorted[a], sorted[b], lo, hi]);
            }
        }
    }

    debug!(
        event = "four_sum_done",
        target,
        input_len = nums.len(),
        found = result.len()
    );
    result
}

/// Returns the sum of the three elements closest to `target`.
///
/// This is the exact answer: a single two-pointer sweep per fixed element,
/// tracking the minimum absolute difference seen so far and short-circuiting
/// on an exact hit. Fewer than three elements is an
/// [`InsufficientElements`](KataforgeError::InsufficientElements) error,
/// since a scalar result has no empty representation.
///
/// # Examples
///
/// ```
/// use kataforge::sum::three_sum_closest;
///
/// assert_eq!(three_sum_closest(&[-1, 2, 1, -4], 1), Ok(2));
/// ```
pub fn three_sum_closest(nums: &[i64], target: i64) -> Result<i64> {
    if nums.len() < 3 {
        return Err(KataforgeError::InsufficientElements {
            needed: 3,
            got: nums.len(),
        });
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut best = sorted[0] + sorted[1] + sorted[2];
    for first in 0..sorted.len() - 2 {
        let mut lo = first + 1;
        let mut hi = sorted.len() - 1;
        while lo < hi {
            let sum = sorted[first] + sorted[lo] + sorted[hi];
            if (sum - target).abs() < (best - target).abs() {
                best = sum;
            }
            match sum.cmp(&target) {
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
                Ordering::Equal => return Ok(sum),
            }
        }
    }

    debug!(event = "three_sum_closest_done", target, best);
    Ok(best)
}

/// Two-pointer convergence over `sorted[start..]`: every distinct value
/// pair summing to `rest`, low value first.
///
/// After a hit both pointers step past their runs of equal values, so a
/// pair of values is reported at most once.
fn converging_pairs(sorted: &[i64], start: usize, rest: i64) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();
    if start >= sorted.len() {
        return pairs;
    }

    let mut lo = start;
    let mut hi = sorted.len() - 1;
    while lo < hi {
        let sum = sorted[lo] + sorted[hi];
        match sum.cmp(&rest) {
            Ordering::Equal => {
                pairs.push((sorted[lo], sorted[hi]));
                while lo < hi && sorted[lo] == sorted[lo + 1] {
                    lo += 1;
                }
                while lo < hi && sorted[hi] == sorted[hi - 1] {
                    hi -= 1;
                }
                lo += 1;
                hi -= 1;
            }
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }
    pairs
}
