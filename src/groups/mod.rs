//! This module holds the three enumeration algorithms. None of them share any
//! state, each call builds its own workspace and hands back an owned result.

pub mod cartesian;
pub mod combination;
pub mod permutation;

/// A single arrangement or selection of indices from `0..n`
pub type IndexGroup = Vec<usize>;
