//! Ordered subsets of a fixed set of indices
//!
//! The domain `0..n` is held in a single workspace that is reordered in place
//! while recursing. Each level picks one of the remaining free elements by
//! swapping it into the last free slot, recurses on a pool one element
//! smaller, then swaps it back so the next sibling sees the original order.
//! Once `k` elements are fixed, the tail of the workspace holds one finished
//! arrangement.

use crate::{counting::permutation_count, error::Result, groups::IndexGroup};

/// Returns every ordered arrangement of `k` distinct elements drawn from
/// `0..n`
///
/// The result holds exactly `n!/(n-k)!` items and is produced in the same
/// order on every call.
///
/// ```
/// use groups_enumerator_rs::permute;
///
/// let permutations = permute(3, 2).unwrap();
/// assert_eq!(
///     permutations,
///     vec![vec![2, 0], vec![1, 0], vec![0, 1], vec![2, 1], vec![0, 2], vec![1, 2]]
/// );
/// ```
///
/// # Errors
///
/// [`GroupsError::Domain`] if `n < k`, [`GroupsError::Overflow`] if the
/// number of arrangements does not fit in a `usize`.
///
/// [`GroupsError::Domain`]: crate::error::GroupsError::Domain
/// [`GroupsError::Overflow`]: crate::error::GroupsError::Overflow
pub fn permute(n: usize, k: usize) -> Result<Vec<IndexGroup>> {
    let size = permutation_count(n, k)?;
    if k == 0 {
        // Only the empty arrangement, no workspace needed
        return Ok(vec![IndexGroup::new()]);
    }
    log::debug!("Enumerating {size} permutations of {k} from {n}");

    let mut domain: Vec<usize> = (0..n).collect();
    let mut permutations = vec![IndexGroup::new(); size];
    let produced = enumerate(&mut domain, n, k, &mut permutations);
    debug_assert_eq!(produced, size);

    Ok(permutations)
}

/// Recursively fills `permutations` with every arrangement reachable from the
/// current workspace and returns how many were written
///
/// `free` is the number of leading workspace slots still up for selection,
/// every slot after it is already fixed.
fn enumerate(
    domain: &mut [usize],
    free: usize,
    k: usize,
    permutations: &mut [IndexGroup],
) -> usize {
    if k == 0 {
        permutations[0] = domain[free..].to_vec();
        return 1;
    }

    let last = free - 1;
    let mut produced = 0;
    for i in 0..free {
        domain.swap(i, last);
        produced += enumerate(domain, last, k - 1, &mut permutations[produced..]);
        domain.swap(i, last);
    }

    log::trace!("{produced} permutations with {free} free slots");
    produced
}

/// Provides the permutation generator using the rayon library to split the
/// work across threads
#[cfg(feature = "rayon")]
pub mod rayon {
    use rayon::{
        iter::{IndexedParallelIterator, ParallelIterator},
        slice::ParallelSliceMut,
    };

    use super::enumerate;
    use crate::{counting::permutation_count, error::Result, groups::IndexGroup};

    /// Parallel version of [`permute`]
    ///
    /// Every choice for the last slot gets its own worker with its own copy of
    /// the workspace. The output is identical to the sequential version,
    /// including its order.
    ///
    /// [`permute`]: super::permute
    pub fn par_permute(n: usize, k: usize) -> Result<Vec<IndexGroup>> {
        if k == 0 {
            return super::permute(n, k);
        }

        let size = permutation_count(n, k)?;
        // Each top level branch produces the arrangements of k - 1 from n - 1
        let branch = permutation_count(n - 1, k - 1)?;
        log::debug!("Enumerating {size} permutations of {k} from {n} over {n} branches");

        let mut permutations = vec![IndexGroup::new(); size];
        permutations
            .par_chunks_mut(branch)
            .enumerate()
            .for_each(|(i, chunk)| {
                let mut domain: Vec<usize> = (0..n).collect();
                domain.swap(i, n - 1);
                enumerate(&mut domain, n - 1, k - 1, chunk);
            });

        Ok(permutations)
    }
}
