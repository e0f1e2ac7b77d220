//! Method style access to the generators for anything that can be viewed as a
//! slice

use crate::{
    combinations::{all_combinations, combinations, try_all_combinations, try_combinations},
    error::CombinatoricsResult,
    permutations::{permutations, try_permutations},
};

/// Provides the generators as methods on slices, vectors and arrays
///
/// ```rust
/// use combinatorics_rs::CombinatoricsExt;
///
/// let crew = vec!["ada", "grace", "linus"];
///
/// assert!(crew.combinations(2) == vec![
///     vec!["ada", "grace"], vec!["ada", "linus"], vec!["grace", "linus"],
/// ]);
/// assert!(crew.all_combinations().len() == 7);
/// assert!(crew.permutations().len() == 6);
/// ```
pub trait CombinatoricsExt<T: Clone> {
    /// See [`combinations`](crate::combinations::combinations)
    fn combinations(&self, k: usize) -> Vec<Vec<T>>;

    /// See [`try_combinations`](crate::combinations::try_combinations)
    fn try_combinations(&self, k: usize) -> CombinatoricsResult<Vec<Vec<T>>>;

    /// See [`all_combinations`](crate::combinations::all_combinations)
    fn all_combinations(&self) -> Vec<Vec<T>>;

    /// See [`try_all_combinations`](crate::combinations::try_all_combinations)
    fn try_all_combinations(&self) -> CombinatoricsResult<Vec<Vec<T>>>;

    /// See [`permutations`](crate::permutations::permutations)
    fn permutations(&self) -> Vec<Vec<T>>;

    /// See [`try_permutations`](crate::permutations::try_permutations)
    fn try_permutations(&self) -> CombinatoricsResult<Vec<Vec<T>>>;
}

impl<T: Clone> CombinatoricsExt<T> for [T] {
    fn combinations(&self, k: usize) -> Vec<Vec<T>> {
        combinations(self, k)
    }

    fn try_combinations(&self, k: usize) -> CombinatoricsResult<Vec<Vec<T>>> {
        try_combinations(self, k)
    }

    fn all_combinations(&self) -> Vec<Vec<T>> {
        all_combinations(self)
    }

    fn try_all_combinations(&self) -> CombinatoricsResult<Vec<Vec<T>>> {
        try_all_combinations(self)
    }

    fn permutations(&self) -> Vec<Vec<T>> {
        permutations(self)
    }

    fn try_permutations(&self) -> CombinatoricsResult<Vec<Vec<T>>> {
        try_permutations(self)
    }
}
