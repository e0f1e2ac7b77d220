//! This module generates every k-element subset of a slice in lexicographic
//! order of the chosen indices.
//!
//! The number of rows is computed up front with the binomial coefficient so
//! the whole result is allocated once. Rows are then produced by walking an
//! index tuple through its lexicographic successors, odometer style.

use itertools::Itertools;

use crate::{
    error::{CombinatoricsError, CombinatoricsResult},
    numeric::binomial::{binomial_exact, binomial_exact_checked},
};

/// Moves `indices` to its lexicographic successor among the k-subsets of
/// `0..n`. Returns `false` once the last subset has been reached.
fn advance_indices(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    // Last position that has not reached its largest allowed value
    let Some(position) = (0..k).rev().find(|&p| indices[p] < n - k + p) else {
        return false;
    };

    indices[position] += 1;
    for p in position + 1..k {
        indices[p] = indices[p - 1] + 1;
    }
    true
}

/// Appends `count` combinations of size `k` to `rows`
fn fill_combinations<T: Clone>(elements: &[T], k: usize, count: usize, rows: &mut Vec<Vec<T>>) {
    log::debug!("generating {count} combinations of {k} from {}", elements.len());

    let mut indices = (0..k).collect_vec();
    for emitted in 0..count {
        rows.push(indices.iter().map(|&i| elements[i].clone()).collect_vec());
        if !advance_indices(&mut indices, elements.len()) {
            debug_assert!(emitted + 1 == count, "ran out after {} of {count} rows", emitted + 1);
            break;
        }
    }
}

/// Produces every `k` element combination of `elements`
///
/// Rows follow the lexicographic order of the chosen indices and keep the
/// elements in their original relative order. A `k` of zero or larger than
/// the slice gives an empty result and `k == elements.len()` gives the whole
/// slice as its only row.
///
/// # Panics
///
/// Panics if the number of combinations does not fit into a `usize`. See
/// [`try_combinations`] for a fallible version.
///
/// ```rust
/// use combinatorics_rs::combinations;
///
/// let rows = combinations(&[1, 2, 3, 4], 2);
///
/// assert!(rows == vec![
///     vec![1, 2], vec![1, 3], vec![1, 4],
///     vec![2, 3], vec![2, 4], vec![3, 4],
/// ]);
/// ```
pub fn combinations<T: Clone>(elements: &[T], k: usize) -> Vec<Vec<T>> {
    let n = elements.len();
    if k < 1 || k > n {
        return Vec::new();
    }
    if k == n {
        return vec![elements.to_vec()];
    }

    let count = binomial_exact(n, k);
    let mut rows = Vec::with_capacity(count);
    fill_combinations(elements, k, count, &mut rows);
    rows
}

/// Fallible version of [`combinations`] that reports
/// [`CombinatoricsError::MagnitudeTooLarge`] when the number of rows does not
/// fit into a `usize`
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, try_combinations};
///
/// assert!(try_combinations(&['a', 'b', 'c'], 2).unwrap().len() == 3);
///
/// let too_many = vec![0_u8; 1000];
/// assert!(try_combinations(&too_many, 500) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
///
/// [`CombinatoricsError::MagnitudeTooLarge`]: crate::CombinatoricsError::MagnitudeTooLarge
pub fn try_combinations<T: Clone>(elements: &[T], k: usize) -> CombinatoricsResult<Vec<Vec<T>>> {
    let n = elements.len();
    if k < 1 || k > n {
        return Ok(Vec::new());
    }
    if k == n {
        return Ok(vec![elements.to_vec()]);
    }

    let count = binomial_exact_checked(n, k)?;
    let mut rows = Vec::with_capacity(count);
    fill_combinations(elements, k, count, &mut rows);
    Ok(rows)
}

/// Produces the combinations of every size from `1` to `elements.len()`,
/// smallest size first
///
/// The buffer is sized for all `2^n - 1` rows before any of them are
/// generated.
///
/// # Panics
///
/// Panics if the total number of rows does not fit into a `usize`.
///
/// ```rust
/// use combinatorics_rs::all_combinations;
///
/// assert!(all_combinations(&[1, 2, 3]) == vec![
///     vec![1], vec![2], vec![3],
///     vec![1, 2], vec![1, 3], vec![2, 3],
///     vec![1, 2, 3],
/// ]);
/// ```
pub fn all_combinations<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    let n = elements.len();
    let counts = (1..=n).map(|k| binomial_exact(n, k)).collect_vec();
    let total = counts
        .iter()
        .try_fold(0_usize, |total, &count| total.checked_add(count));
    let Some(total) = total else {
        panic!("the combinations of {n} elements overflow usize");
    };

    let mut rows = Vec::with_capacity(total);
    for (k, count) in (1..=n).zip(counts) {
        fill_combinations(elements, k, count, &mut rows);
    }
    rows
}

/// Fallible version of [`all_combinations`]. Every row count is validated
/// before any rows are generated.
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, try_all_combinations};
///
/// assert!(try_all_combinations(&[1, 2]).unwrap() == vec![vec![1], vec![2], vec![1, 2]]);
/// assert!(try_all_combinations(&[(); 70]) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
pub fn try_all_combinations<T: Clone>(elements: &[T]) -> CombinatoricsResult<Vec<Vec<T>>> {
    let n = elements.len();
    let counts = (1..=n)
        .map(|k| binomial_exact_checked(n, k))
        .collect::<CombinatoricsResult<Vec<_>>>()?;
    let total = counts
        .iter()
        .try_fold(0_usize, |total, &count| total.checked_add(count))
        .ok_or(CombinatoricsError::MagnitudeTooLarge)?;

    let mut rows = Vec::with_capacity(total);
    for (k, count) in (1..=n).zip(counts) {
        fill_combinations(elements, k, count, &mut rows);
    }
    Ok(rows)
}

/// Provides the parallel version of [`all_combinations`] using the rayon
/// library
#[cfg(feature = "rayon")]
pub mod rayon {
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    use super::combinations;

    /// Generates each selection size on the rayon pool and joins them in the
    /// same order as [`all_combinations`]
    ///
    /// ```rust
    /// use combinatorics_rs::{all_combinations, combinations::rayon::par_all_combinations};
    ///
    /// let letters = ['a', 'b', 'c', 'd', 'e'];
    /// assert!(par_all_combinations(&letters) == all_combinations(&letters));
    /// ```
    ///
    /// [`all_combinations`]: super::all_combinations
    pub fn par_all_combinations<T: Clone + Send + Sync>(elements: &[T]) -> Vec<Vec<T>> {
        (1..=elements.len())
            .into_par_iter()
            .map(|k| combinations(elements, k))
            .collect::<Vec<_>>()
            .concat()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use lazy_static::lazy_static;

    use super::*;

    lazy_static! {
        /// Expected rows for `[1, 2, 3, 4, 5]`, indexed by `k - 1`, built from
        /// nested loops so the ordering is obviously lexicographic
        static ref FIVE_ROWS: Vec<Vec<Vec<i32>>> = {
            let mut by_size = vec![(1..=5).map(|a| vec![a]).collect_vec()];

            let mut pairs = Vec::new();
            for a in 1..=4 {
                for b in a + 1..=5 {
                    pairs.push(vec![a, b]);
                }
            }
            by_size.push(pairs);

            let mut triples = Vec::new();
            for a in 1..=3 {
                for b in a + 1..=4 {
                    for c in b + 1..=5 {
                        triples.push(vec![a, b, c]);
                    }
                }
            }
            by_size.push(triples);

            let mut quads = Vec::new();
            for a in 1..=2 {
                for b in a + 1..=3 {
                    for c in b + 1..=4 {
                        for d in c + 1..=5 {
                            quads.push(vec![a, b, c, d]);
                        }
                    }
                }
            }
            by_size.push(quads);

            by_size.push(vec![vec![1, 2, 3, 4, 5]]);
            by_size
        };
    }

    const FIVE: [i32; 5] = [1, 2, 3, 4, 5];

    #[test]
    #[rustfmt::skip]
    /// Pins the exact order for choosing 2 out of 5
    fn test_pairs_of_five() {
        let expected = vec![
            vec![1, 2], vec![1, 3], vec![1, 4], vec![1, 5],
            vec![2, 3], vec![2, 4], vec![2, 5],
            vec![3, 4], vec![3, 5],
            vec![4, 5],
        ];
        let rows = combinations(&FIVE, 2);
        assert!(rows == expected, "got {rows:?}");
        assert!(rows.len() == binomial_exact(5_usize, 2));
    }

    #[test]
    fn test_each_size_of_five() {
        for k in 1..=5 {
            assert!(
                combinations(&FIVE, k) == FIVE_ROWS[k - 1],
                "combinations of size {k} did not match"
            );
        }
    }

    #[test]
    fn test_all_of_five() {
        assert!(all_combinations(&FIVE) == FIVE_ROWS.concat());
    }

    #[test]
    fn test_out_of_range_k() {
        assert!(combinations(&FIVE, 0).is_empty());
        assert!(combinations(&FIVE, 6).is_empty());
        assert!(try_combinations(&FIVE, 6) == Ok(Vec::new()));
    }

    #[test]
    fn test_empty_input() {
        let empty: [i32; 0] = [];
        for k in 0..=2 {
            assert!(combinations(&empty, k).is_empty());
        }
        assert!(all_combinations(&empty).is_empty());
        assert!(try_all_combinations(&empty) == Ok(Vec::new()));
    }

    #[test]
    #[rustfmt::skip]
    fn test_small_inputs() {
        assert!(combinations(&[1], 1) == vec![vec![1]]);
        assert!(all_combinations(&[1]) == vec![vec![1]]);

        assert!(combinations(&[1, 2], 1) == vec![vec![1], vec![2]]);
        assert!(combinations(&[1, 2], 2) == vec![vec![1, 2]]);
        assert!(all_combinations(&[1, 2]) == vec![vec![1], vec![2], vec![1, 2]]);

        assert!(
            all_combinations(&[1, 2, 3])
                == vec![
                    vec![1], vec![2], vec![3],
                    vec![1, 2], vec![1, 3], vec![2, 3],
                    vec![1, 2, 3],
                ]
        );
    }

    #[test]
    /// Elements need neither ordering nor equality to be combined
    fn test_opaque_elements() {
        #[derive(Clone)]
        struct Opaque(&'static str);

        let rows = combinations(&[Opaque("x"), Opaque("y"), Opaque("z")], 2);
        let names = rows
            .iter()
            .map(|row| row.iter().map(|o| o.0).join(""))
            .collect_vec();
        assert!(names == ["xy", "xz", "yz"]);
    }

    #[test]
    /// itertools produces the same lexicographic order, so it is used as an
    /// independent oracle for larger inputs
    fn test_matches_itertools() {
        let letters = ('a'..='j').collect_vec();
        for k in 1..=letters.len() {
            let expected = letters.iter().cloned().combinations(k).collect_vec();
            let rows = combinations(&letters, k);
            assert!(rows.len() == binomial_exact(letters.len(), k));
            assert!(rows == expected, "size {k} diverged from itertools");
        }
    }

    #[test]
    fn test_repeatable() {
        assert!(combinations(&FIVE, 3) == combinations(&FIVE, 3));
        assert!(all_combinations(&FIVE) == all_combinations(&FIVE));
    }

    #[test]
    fn test_try_matches_infallible() {
        for k in 0..=6 {
            assert!(try_combinations(&FIVE, k) == Ok(combinations(&FIVE, k)));
        }
        assert!(try_all_combinations(&FIVE) == Ok(all_combinations(&FIVE)));
    }

    #[test]
    /// The row count is rejected before anything is allocated
    fn test_try_too_many_rows() {
        let wide = vec![(); 200];
        assert!(try_combinations(&wide, 100) == Err(CombinatoricsError::MagnitudeTooLarge));
        assert!(try_all_combinations(&wide) == Err(CombinatoricsError::MagnitudeTooLarge));
    }

    #[test]
    #[rustfmt::skip]
    /// The successor function walks off the end exactly once
    fn test_advance_indices() {
        let mut indices = vec![0, 1];
        let mut seen = vec![indices.clone()];
        while advance_indices(&mut indices, 4) {
            seen.push(indices.clone());
        }
        assert!(seen == vec![
            vec![0, 1], vec![0, 2], vec![0, 3],
            vec![1, 2], vec![1, 3], vec![2, 3],
        ]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_sequential() {
        let letters = ('a'..='h').collect_vec();
        assert!(super::rayon::par_all_combinations(&letters) == all_combinations(&letters));
        assert!(super::rayon::par_all_combinations::<char>(&[]).is_empty());
    }
}
