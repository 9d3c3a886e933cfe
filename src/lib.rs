//! Enumerates the groups that can be drawn from a fixed set of indices: the
//! ordered subsets ([`permute`]), the unordered subsets ([`combine`]) and the
//! cartesian product of a ragged set of rows ([`cartesian`]).
//!
//! Every call sizes its result up front from [`counting`], builds it in one
//! pass and hands it back. Nothing is shared between calls.
#![forbid(unsafe_code)]

pub mod counting;
pub mod error;
pub mod groups;

pub use error::{GroupsError, Result};
pub use groups::{
    IndexGroup,
    cartesian::{Cartesian, cartesian, cartesian_at},
    combination::combine,
    permutation::permute,
};
