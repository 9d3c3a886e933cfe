//! Errors produced while sizing or enumerating a group

use thiserror::Error;

/// Every way a call into this library can fail
///
/// All of them are raised before any result collection is allocated, so a
/// failed call never hands back a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupsError {
    /// The subset size is larger than the set it is drawn from
    #[error("n ({n}) is less than k ({k})")]
    Domain { n: usize, k: usize },

    /// The size of the result does not fit in a `usize`
    #[error("size of {what} overflows usize")]
    Overflow { what: &'static str },

    /// The cartesian combiner was given no rows at all
    #[error("cannot combine an empty set of rows")]
    EmptyInput,

    /// One of the rows given to the cartesian combiner has no elements
    #[error("row {row} has no elements to choose from")]
    EmptyRow { row: usize },
}

pub type Result<T> = std::result::Result<T, GroupsError>;
