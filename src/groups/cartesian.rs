//! Cartesian product of a ragged set of rows
//!
//! Rather than recursing, every item of the product is addressed by a single
//! counter. Reading that counter as a mixed radix number, where the radix of
//! digit `i` is the length of row `i`, gives one index per row. The first row
//! is the least significant digit, so its choice changes fastest.
//!
//! Positions are 1 based and the item for position `p` is stored at index
//! `p - 1`. Position `total` wraps every digit back to zero, which puts the
//! all-first-elements item at the very end of the product.

use std::marker::PhantomData;

use crate::{counting::cartesian_size, error::Result};

/// Returns every combination formed by picking exactly one element from each
/// row, in row order
///
/// ```
/// use groups_enumerator_rs::cartesian;
///
/// let rows = vec![vec!["a0", "a1"], vec!["b0", "b1", "b2"]];
/// assert_eq!(
///     cartesian(&rows).unwrap(),
///     vec![
///         vec!["a1", "b0"],
///         vec!["a0", "b1"],
///         vec!["a1", "b1"],
///         vec!["a0", "b2"],
///         vec!["a1", "b2"],
///         vec!["a0", "b0"],
///     ]
/// );
/// ```
///
/// # Errors
///
/// [`GroupsError::EmptyInput`] when there are no rows,
/// [`GroupsError::EmptyRow`] when any row has no elements and
/// [`GroupsError::Overflow`] when the product does not fit in a `usize`.
///
/// [`GroupsError::EmptyInput`]: crate::error::GroupsError::EmptyInput
/// [`GroupsError::EmptyRow`]: crate::error::GroupsError::EmptyRow
/// [`GroupsError::Overflow`]: crate::error::GroupsError::Overflow
pub fn cartesian<T, R>(rows: &[R]) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let combinations = Cartesian::<T, R>::new(rows)?;
    log::debug!(
        "Enumerating {} combinations over {} rows",
        combinations.len(),
        rows.len()
    );

    // Exact size hint, so this allocates the whole product once
    Ok(combinations.collect())
}

/// Returns the single combination stored at `index` of [`cartesian`] without
/// building the rest of the product, or `None` if `index` is past its end
///
/// # Errors
///
/// Same as [`cartesian`].
pub fn cartesian_at<T, R>(rows: &[R], index: usize) -> Result<Option<Vec<T>>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let total = cartesian_size::<T, R>(rows)?;

    Ok((index < total).then(|| decompose(rows, index + 1)))
}

/// Picks one element per row by reading `position` as a mixed radix number
fn decompose<T, R>(rows: &[R], mut position: usize) -> Vec<T>
where
    T: Clone,
    R: AsRef<[T]>,
{
    rows.iter()
        .map(|row| {
            let row = row.as_ref();
            let element = row[position % row.len()].clone();
            position /= row.len();
            element
        })
        .collect()
}

/// Lazily walks the cartesian product of a set of rows, producing the same
/// items in the same order as [`cartesian`]
#[derive(Debug, Clone)]
pub struct Cartesian<'a, T, R> {
    rows: &'a [R],
    /// Next index handed out from the front
    front: usize,
    /// One past the next index handed out from the back
    back: usize,
    _element: PhantomData<T>,
}

impl<'a, T, R> Cartesian<'a, T, R>
where
    T: Clone,
    R: AsRef<[T]>,
{
    /// Validates the rows and prepares to walk their product
    ///
    /// # Errors
    ///
    /// Same as [`cartesian`].
    pub fn new(rows: &'a [R]) -> Result<Self> {
        let total = cartesian_size::<T, R>(rows)?;

        Ok(Self {
            rows,
            front: 0,
            back: total,
            _element: PhantomData,
        })
    }
}

impl<T, R> Iterator for Cartesian<'_, T, R>
where
    T: Clone,
    R: AsRef<[T]>,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.front += 1;
        Some(decompose(self.rows, self.front))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T, R> DoubleEndedIterator for Cartesian<'_, T, R>
where
    T: Clone,
    R: AsRef<[T]>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let item = decompose(self.rows, self.back);
        self.back -= 1;
        Some(item)
    }
}

impl<T, R> ExactSizeIterator for Cartesian<'_, T, R>
where
    T: Clone,
    R: AsRef<[T]>,
{
}

/// Provides the cartesian combiner using the rayon library to split the work
/// across threads
#[cfg(feature = "rayon")]
pub mod rayon {
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    use super::decompose;
    use crate::{counting::cartesian_size, error::Result};

    /// Parallel version of [`cartesian`]
    ///
    /// Every position is independent so the whole range is handed to rayon.
    /// The collected order matches the sequential version.
    ///
    /// [`cartesian`]: super::cartesian
    pub fn par_cartesian<T, R>(rows: &[R]) -> Result<Vec<Vec<T>>>
    where
        T: Clone + Send,
        R: AsRef<[T]> + Sync,
    {
        let total = cartesian_size::<T, R>(rows)?;
        log::debug!(
            "Enumerating {total} combinations over {} rows in parallel",
            rows.len()
        );

        Ok((0..total)
            .into_par_iter()
            .map(|index| decompose(rows, index + 1))
            .collect())
    }
}
