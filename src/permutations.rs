//! This module generates every ordering of a slice with Heap's algorithm.
//!
//! Heap's algorithm reaches each new ordering from the previous one with a
//! single transposition. The `n!` rows are counted up front so the result is
//! allocated exactly once.

use itertools::Itertools;

use crate::{
    error::CombinatoricsResult,
    numeric::factorial::{factorial_exact, factorial_exact_checked},
};

/// Runs Heap's algorithm over an index permutation and appends the first
/// `count` orderings to `rows`
fn fill_permutations<T: Clone>(elements: &[T], count: usize, rows: &mut Vec<Vec<T>>) {
    let n = elements.len();
    log::debug!("generating {count} permutations of {n} elements");

    let mut indices = (0..n).collect_vec();
    let mut counters = vec![0_usize; n];
    rows.push(elements.to_vec());

    let mut level = 0;
    while level < n && rows.len() < count {
        if counters[level] < level {
            if level % 2 == 0 {
                indices.swap(0, level);
            } else {
                indices.swap(counters[level], level);
            }
            rows.push(indices.iter().map(|&i| elements[i].clone()).collect_vec());
            counters[level] += 1;
            level = 0;
        } else {
            counters[level] = 0;
            level += 1;
        }
    }

    debug_assert!(rows.len() == count, "emitted {} of {count} rows", rows.len());
}

/// Handles the orderings that do not need the general algorithm. Returns
/// `None` when `elements` has more than two items.
fn trivial_permutations<T: Clone>(elements: &[T]) -> Option<Vec<Vec<T>>> {
    match elements {
        [] => Some(Vec::new()),
        [_] => Some(vec![elements.to_vec()]),
        [first, second] => Some(vec![
            vec![first.clone(), second.clone()],
            vec![second.clone(), first.clone()],
        ]),
        _ => None,
    }
}

/// Produces every ordering of `elements`
///
/// Rows follow the visiting order of Heap's algorithm, starting with the
/// input itself, and every row differs from the one before it by swapping
/// exactly two elements.
///
/// # Panics
///
/// Panics if `elements.len()!` does not fit into a `usize`. See
/// [`try_permutations`] for a fallible version.
///
/// ```rust
/// use combinatorics_rs::permutations;
///
/// assert!(permutations(&[1, 2, 3]) == vec![
///     vec![1, 2, 3], vec![2, 1, 3], vec![3, 1, 2],
///     vec![1, 3, 2], vec![2, 3, 1], vec![3, 2, 1],
/// ]);
/// ```
pub fn permutations<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    if let Some(rows) = trivial_permutations(elements) {
        return rows;
    }

    let count = factorial_exact(elements.len());
    let mut rows = Vec::with_capacity(count);
    fill_permutations(elements, count, &mut rows);
    rows
}

/// Fallible version of [`permutations`] that reports
/// [`CombinatoricsError::MagnitudeTooLarge`] when `elements.len()!` does not
/// fit into a `usize`
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, try_permutations};
///
/// assert!(try_permutations(&[1, 2, 3, 4]).unwrap().len() == 24);
/// assert!(try_permutations(&[0_u8; 40]) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
///
/// [`CombinatoricsError::MagnitudeTooLarge`]: crate::CombinatoricsError::MagnitudeTooLarge
pub fn try_permutations<T: Clone>(elements: &[T]) -> CombinatoricsResult<Vec<Vec<T>>> {
    if let Some(rows) = trivial_permutations(elements) {
        return Ok(rows);
    }

    let count = factorial_exact_checked(elements.len())?;
    let mut rows = Vec::with_capacity(count);
    fill_permutations(elements, count, &mut rows);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;
    use crate::CombinatoricsError;

    /// Number of positions at which two rows disagree
    fn differing_positions<T: PartialEq>(left: &[T], right: &[T]) -> usize {
        left.iter().zip(right).filter(|(l, r)| l != r).count()
    }

    #[test]
    /// Pins the visiting order for three elements
    fn test_three_elements() {
        let expected = vec![
            vec![1, 2, 3],
            vec![2, 1, 3],
            vec![3, 1, 2],
            vec![1, 3, 2],
            vec![2, 3, 1],
            vec![3, 2, 1],
        ];
        let rows = permutations(&[1, 2, 3]);
        assert!(rows == expected, "got {rows:?}");
        assert!(rows.len() == factorial_exact(3_usize));
    }

    #[test]
    fn test_special_cases() {
        assert!(permutations::<i32>(&[]).is_empty());
        assert!(permutations(&[1]) == vec![vec![1]]);
        assert!(permutations(&[1, 2]) == vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    /// Pins the start of the four element sequence so the even and odd swap
    /// rules are both covered
    fn test_four_elements_prefix() {
        let rows = permutations(&['a', 'b', 'c', 'd']);
        let prefix = rows
            .iter()
            .take(8)
            .map(|row| row.iter().collect::<String>())
            .collect_vec();
        assert!(
            prefix == ["abcd", "bacd", "cabd", "acbd", "bcad", "cbad", "dbac", "bdac"],
            "got {prefix:?}"
        );
    }

    #[test]
    /// Every ordering shows up exactly once and consecutive rows differ by
    /// one swap
    fn test_distinct_and_single_swap() {
        for n in 3..=7 {
            let elements = (0..n).collect_vec();
            let rows = permutations(&elements);
            assert!(rows.len() == factorial_exact(n));

            let unique: HashSet<_> = rows.iter().collect();
            assert!(unique.len() == rows.len(), "duplicate rows for n = {n}");

            for (previous, next) in rows.iter().tuple_windows() {
                assert!(differing_positions(previous, next) == 2);
            }
        }
    }

    #[test]
    /// Same set of orderings as itertools, just visited in another order
    fn test_matches_itertools() {
        let elements = vec!["w", "x", "y", "z", "v"];
        let mut expected = elements
            .iter()
            .cloned()
            .permutations(elements.len())
            .collect_vec();
        let mut rows = permutations(&elements);

        expected.sort();
        rows.sort();
        assert!(rows == expected);
    }

    #[test]
    fn test_repeatable() {
        let elements = [5, 1, 4, 2];
        assert!(permutations(&elements) == permutations(&elements));
    }

    #[test]
    fn test_try_permutations() {
        for n in 0..=6 {
            let elements = (0..n).collect_vec();
            assert!(try_permutations(&elements) == Ok(permutations(&elements)));
        }
        assert!(try_permutations(&[(); 21]) == Err(CombinatoricsError::MagnitudeTooLarge));
    }
}
