//! Analytic sizes of the groups this library enumerates. Every generator sizes
//! its result collection from these before doing any work, so an overflow here
//! is reported instead of silently producing a short result.

use crate::error::{GroupsError, Result};

/// Computes `n!`, failing if the value does not fit in a `usize`
pub fn factorial(n: usize) -> Result<usize> {
    (2..=n).try_fold(1_usize, |acc, i| {
        acc.checked_mul(i)
            .ok_or(GroupsError::Overflow { what: "factorial" })
    })
}

/// Number of ordered arrangements of `k` elements taken from `n`, `n!/(n-k)!`
///
/// Calculated as the falling product `n * (n-1) * ... * (n-k+1)`, so this only
/// overflows when the count itself does.
pub fn permutation_count(n: usize, k: usize) -> Result<usize> {
    if n < k {
        return Err(GroupsError::Domain { n, k });
    }

    ((n - k)..n).try_fold(1_usize, |acc, i| {
        acc.checked_mul(i + 1)
            .ok_or(GroupsError::Overflow { what: "permutations" })
    })
}

/// Number of unordered selections of `k` elements taken from `n`, `C(n, k)`
pub fn combination_count(n: usize, k: usize) -> Result<usize> {
    if n < k {
        return Err(GroupsError::Domain { n, k });
    }

    // C(n, k) == C(n, n - k)
    let steps = k.min(n - k);
    let count = (0..steps).try_fold(1_u128, |acc, i| {
        // acc holds C(n, i) here so the division is exact
        let next = acc * (n - i) as u128 / (i + 1) as u128;
        if next > usize::MAX as u128 {
            None
        } else {
            Some(next)
        }
    });

    count
        .and_then(|c| usize::try_from(c).ok())
        .ok_or(GroupsError::Overflow {
            what: "combinations",
        })
}

/// Validates a set of rows and returns the number of items their cartesian
/// product holds, which is the product of the row lengths
pub fn cartesian_size<T, R>(rows: &[R]) -> Result<usize>
where
    R: AsRef<[T]>,
{
    if rows.is_empty() {
        return Err(GroupsError::EmptyInput);
    }

    rows.iter()
        .map(|row| row.as_ref().len())
        .enumerate()
        .try_fold(1_usize, |total, (row, len)| {
            if len == 0 {
                return Err(GroupsError::EmptyRow { row });
            }
            total.checked_mul(len).ok_or(GroupsError::Overflow {
                what: "cartesian product",
            })
        })
}

/// Provides the number of items the cartesian product of a set of rows
/// produces
pub trait CartesianSize {
    /// Produces the number of combinations these rows can produce
    fn cartesian_size(&self) -> Result<usize>;
}

impl<T> CartesianSize for [Vec<T>] {
    fn cartesian_size(&self) -> Result<usize> {
        cartesian_size::<T, Vec<T>>(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(10), Ok(3_628_800));
    }

    #[test]
    /// 21! is the first factorial past u64
    fn test_factorial_overflow() {
        assert!(factorial(20).is_ok());
        assert_eq!(
            factorial(21),
            Err(GroupsError::Overflow { what: "factorial" })
        );
    }

    #[test]
    fn test_permutation_count_matches_factorials() {
        for n in 0..=10 {
            for k in 0..=n {
                assert_eq!(
                    permutation_count(n, k).unwrap(),
                    factorial(n).unwrap() / factorial(n - k).unwrap(),
                    "wrong count for n = {n}, k = {k}"
                );
            }
        }
    }

    #[test]
    /// The falling product keeps working past the point where `n!` overflows
    fn test_permutation_count_large_n_small_k() {
        assert_eq!(permutation_count(100, 2), Ok(9_900));
        assert_eq!(
            permutation_count(usize::MAX, 3),
            Err(GroupsError::Overflow {
                what: "permutations"
            })
        );
    }

    #[test]
    /// An empty arrangement of the largest domain counts once
    fn test_counts_of_empty_subset_of_huge_domain() {
        assert_eq!(permutation_count(usize::MAX, 0), Ok(1));
        assert_eq!(permutation_count(usize::MAX, 1), Ok(usize::MAX));
        assert_eq!(combination_count(usize::MAX, 0), Ok(1));
    }

    #[test]
    fn test_combination_count_matches_factorials() {
        for n in 0..=12 {
            for k in 0..=n {
                assert_eq!(
                    combination_count(n, k).unwrap(),
                    factorial(n).unwrap() / (factorial(k).unwrap() * factorial(n - k).unwrap()),
                    "wrong count for n = {n}, k = {k}"
                );
            }
        }
    }

    #[test]
    fn test_combination_count_large_values() {
        assert_eq!(combination_count(60, 30), Ok(118_264_581_564_861_424));
        assert!(combination_count(200, 100).is_err());
    }

    #[test]
    fn test_counts_reject_k_above_n() {
        assert_eq!(permutation_count(2, 3), Err(GroupsError::Domain { n: 2, k: 3 }));
        assert_eq!(combination_count(2, 3), Err(GroupsError::Domain { n: 2, k: 3 }));
    }

    #[test]
    fn test_cartesian_size_of_slices() {
        let rows: [&[char]; 2] = [&['a', 'b', 'c'], &['d', 'e']];
        assert_eq!(cartesian_size::<char, _>(&rows), Ok(6));
    }

    #[test]
    fn test_cartesian_size() {
        let rows = vec![vec![1, 2], vec![3, 4, 5], vec![6]];
        assert_eq!(rows.as_slice().cartesian_size(), Ok(6));
    }

    #[test]
    /// One binary row per bit of a usize doubles the product past its limit
    fn test_cartesian_size_overflow() {
        let bits = usize::BITS as usize;
        let rows = vec![vec![false, true]; bits];

        assert_eq!(
            rows.as_slice().cartesian_size(),
            Err(GroupsError::Overflow {
                what: "cartesian product"
            })
        );
        assert_eq!(rows[1..].cartesian_size(), Ok(1 << (bits - 1)));
    }

    #[test]
    fn test_cartesian_size_rejects_empty_inputs() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(none.as_slice().cartesian_size(), Err(GroupsError::EmptyInput));

        let hole = vec![vec![1], vec![], vec![2]];
        assert_eq!(
            hole.as_slice().cartesian_size(),
            Err(GroupsError::EmptyRow { row: 1 })
        );
    }
}
