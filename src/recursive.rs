//! Recursive prefix based generators.
//!
//! These were the first implementations of the generators. They build rows by
//! prepending a head element to every result of a smaller sub problem, which
//! allocates heavily and is considerably slower than the pre-sized versions in
//! [`combinations`] and [`permutations`]. They are kept as an independent
//! reference for cross checking the faster generators and as a baseline in
//! the benchmarks.
//!
//! [`combinations`]: mod@crate::combinations
//! [`permutations`]: mod@crate::permutations

use itertools::Itertools;

/// Produces every `k` element combination of `elements` in lexicographic
/// order by pairing the first element with the combinations of the rest
///
/// ```rust
/// use combinatorics_rs::recursive;
///
/// let elements = [1, 2, 3, 4, 5];
///
/// assert!(recursive::combinations(&elements, 2) == combinatorics_rs::combinations(&elements, 2));
/// ```
pub fn combinations<T: Clone>(elements: &[T], k: usize) -> Vec<Vec<T>> {
    if k < 1 || k > elements.len() {
        return Vec::new();
    }
    if k == elements.len() {
        return vec![elements.to_vec()];
    }

    let Some((head, body)) = elements.split_first() else {
        return Vec::new();
    };

    let mut rows = if k == 1 {
        vec![vec![head.clone()]]
    } else {
        combinations(body, k - 1)
            .into_iter()
            .map(|tail| std::iter::once(head.clone()).chain(tail).collect_vec())
            .collect_vec()
    };
    if body.len() >= k {
        rows.extend(combinations(body, k));
    }
    rows
}

/// Produces the combinations of every size from `1` to `elements.len()`
pub fn all_combinations<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    (1..=elements.len())
        .map(|k| combinations(elements, k))
        .concat()
}

/// Produces every ordering of `elements` by fixing each element in turn and
/// permuting the remaining ones
///
/// Unlike [`crate::permutations()`] the rows come out in lexicographic order of
/// the original positions.
///
/// ```rust
/// use combinatorics_rs::recursive;
///
/// assert!(recursive::permutations(&[1, 2, 3]) == vec![
///     vec![1, 2, 3], vec![1, 3, 2], vec![2, 1, 3],
///     vec![2, 3, 1], vec![3, 1, 2], vec![3, 2, 1],
/// ]);
/// ```
pub fn permutations<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    elements
        .iter()
        .enumerate()
        .flat_map(|(position, entry)| {
            let rest = elements[..position]
                .iter()
                .chain(&elements[position + 1..])
                .cloned()
                .collect_vec();
            if rest.is_empty() {
                vec![vec![entry.clone()]]
            } else {
                permutations(&rest)
                    .into_iter()
                    .map(|tail| std::iter::once(entry.clone()).chain(tail).collect_vec())
                    .collect_vec()
            }
        })
        .collect()
}
