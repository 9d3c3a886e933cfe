//! Unordered subsets of a fixed set of indices
//!
//! Selections are built left to right in a buffer of length `k`. Each level
//! only looks at domain elements after the one chosen by the level above it,
//! which keeps every selection strictly ascending and gives a lexicographic
//! output order without any swapping.

use crate::{counting::combination_count, error::Result, groups::IndexGroup};

/// Returns every unordered selection of `k` distinct elements drawn from
/// `0..n`, each one as an ascending list of indices
///
/// The result holds exactly `C(n, k)` items in lexicographic order.
///
/// ```
/// use groups_enumerator_rs::combine;
///
/// assert_eq!(combine(3, 2).unwrap(), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
///
/// # Errors
///
/// [`GroupsError::Domain`] if `n < k`, [`GroupsError::Overflow`] if the
/// number of selections does not fit in a `usize`.
///
/// [`GroupsError::Domain`]: crate::error::GroupsError::Domain
/// [`GroupsError::Overflow`]: crate::error::GroupsError::Overflow
pub fn combine(n: usize, k: usize) -> Result<Vec<IndexGroup>> {
    let size = combination_count(n, k)?;
    if k == 0 {
        // Only the empty selection, no workspace needed
        return Ok(vec![IndexGroup::new()]);
    }
    log::debug!("Enumerating {size} combinations of {k} from {n}");

    let domain: Vec<usize> = (0..n).collect();
    let mut combination = vec![0; k];
    let mut combinations = vec![IndexGroup::new(); size];
    let produced = select(&domain, k, 0, &mut combination, &mut combinations);
    debug_assert_eq!(produced, size);

    Ok(combinations)
}

/// Fills the slots of `combination` that are still open, starting the search
/// at `start`, and writes every finished selection into `combinations`
///
/// Returns how many selections were written.
fn select(
    domain: &[usize],
    remaining: usize,
    start: usize,
    combination: &mut [usize],
    combinations: &mut [IndexGroup],
) -> usize {
    if remaining == 0 {
        combinations[0] = combination.to_vec();
        return 1;
    }

    // Buffer fills left to right as the recursion goes deeper
    let slot = combination.len() - remaining;
    // Anything past this leaves too few elements to finish the selection
    let end = domain.len() - remaining;

    let mut produced = 0;
    for (offset, element) in domain[start..=end].iter().enumerate() {
        combination[slot] = *element;
        produced += select(
            domain,
            remaining - 1,
            start + offset + 1,
            combination,
            &mut combinations[produced..],
        );
    }

    produced
}

/// Provides the combination generator using the rayon library to split the
/// work across threads
#[cfg(feature = "rayon")]
pub mod rayon {
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    use super::select;
    use crate::{counting::combination_count, error::Result, groups::IndexGroup};

    /// Parallel version of [`combine`]
    ///
    /// Every possible first element gets its own worker writing into its own
    /// range of the result, so the output is identical to the sequential
    /// version, including its order.
    ///
    /// [`combine`]: super::combine
    pub fn par_combine(n: usize, k: usize) -> Result<Vec<IndexGroup>> {
        if k == 0 {
            return super::combine(n, k);
        }

        let size = combination_count(n, k)?;
        log::debug!(
            "Enumerating {size} combinations of {k} from {n} over {} branches",
            n - k + 1
        );

        let domain: Vec<usize> = (0..n).collect();
        let mut combinations = vec![IndexGroup::new(); size];

        // Branches are uneven, starting with a lower element leaves more to
        // pick from
        let mut branches = Vec::with_capacity(n - k + 1);
        let mut rest = combinations.as_mut_slice();
        for first in 0..=(n - k) {
            let len = combination_count(n - 1 - first, k - 1)?;
            let (branch, tail) = std::mem::take(&mut rest).split_at_mut(len);
            branches.push((first, branch));
            rest = tail;
        }

        branches.into_par_iter().for_each(|(first, branch)| {
            let mut combination = vec![0; k];
            combination[0] = domain[first];
            select(&domain, k - 1, first + 1, &mut combination, branch);
        });

        Ok(combinations)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{counting::factorial, error::GroupsError};

    #[test]
    fn test_combine_three_choose_two() {
        assert_eq!(
            combine(3, 2).unwrap(),
            vec![vec![0, 1], vec![0, 2], vec![1, 2]]
        );
    }

    #[test]
    fn test_combine_count_law() {
        for n in 0..=8 {
            for k in 0..=n {
                let expected =
                    factorial(n).unwrap() / (factorial(k).unwrap() * factorial(n - k).unwrap());
                assert_eq!(
                    combine(n, k).unwrap().len(),
                    expected,
                    "wrong number of combinations for n = {n}, k = {k}"
                );
            }
        }
    }

    #[test]
    /// Every selection must be strictly ascending within the domain, which
    /// also makes its elements distinct
    fn test_combine_items_ascending() {
        for item in combine(7, 4).unwrap() {
            assert_eq!(item.len(), 4);
            assert!(item.iter().all(|i| *i < 7), "{item:?} leaves the domain");
            assert!(
                item.iter().tuple_windows().all(|(a, b)| a < b),
                "{item:?} is not strictly ascending"
            );
        }
    }

    #[test]
    /// Selections are unique as sets and come out in lexicographic order
    fn test_combine_unique_and_lexicographic() {
        let combinations = combine(7, 3).unwrap();

        assert!(
            combinations
                .iter()
                .map(|item| item.iter().sorted().collect_vec())
                .all_unique()
        );
        assert!(combinations.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn test_combine_whole_domain() {
        assert_eq!(combine(5, 5).unwrap(), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_combine_empty_selection() {
        assert_eq!(combine(4, 0).unwrap(), vec![Vec::<usize>::new()]);
        assert_eq!(combine(0, 0).unwrap(), vec![Vec::<usize>::new()]);
    }

    #[test]
    /// Picking nothing from the largest domain is still a single empty
    /// selection and must not build the domain
    fn test_combine_empty_selection_of_huge_domain() {
        assert_eq!(
            combine(usize::MAX, 0).unwrap(),
            vec![Vec::<usize>::new()]
        );
    }

    #[test]
    fn test_combine_is_deterministic() {
        assert_eq!(combine(9, 4).unwrap(), combine(9, 4).unwrap());
    }

    #[test]
    fn test_combine_rejects_k_above_n() {
        assert_eq!(combine(2, 3), Err(GroupsError::Domain { n: 2, k: 3 }));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_combine_matches_sequential() {
        use super::rayon::par_combine;

        for (n, k) in [(0, 0), (3, 2), (4, 0), (6, 6), (9, 4), (10, 1), (usize::MAX, 0)] {
            assert_eq!(par_combine(n, k).unwrap(), combine(n, k).unwrap());
        }
        assert_eq!(par_combine(2, 3), Err(GroupsError::Domain { n: 2, k: 3 }));
    }
}
