//! The implicit, transient tree behind every proof.
//!
//! Leaves are hashed into a bottom level, right-padded with [`Padding`] up to
//! `2^height` slots, and folded pairwise until one digest remains. Nothing
//! here is persisted; each call owns its levels.

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

use super::digest::{Digest, Padding};
use super::error::{ProofError, Result};
use super::hash::HashMethod;
use super::options::ProofOptions;

/// Height of the complete binary tree holding `leaf_count` leaves: the bit
/// length of `leaf_count - 1`, so 1 leaf has height 0 and 1024 leaves height 10.
pub fn tree_height(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        0
    } else {
        (usize::BITS - (leaf_count - 1).leading_zeros()) as usize
    }
}

/// Reject empty leaf sets and trees that reach the height bound. Returns the
/// height on success.
pub(crate) fn checked_height(leaf_count: usize, options: &ProofOptions) -> Result<usize> {
    if leaf_count == 0 {
        return Err(ProofError::InvalidInput(
            "leaf collection cannot be empty".to_string(),
        ));
    }

    let height = tree_height(leaf_count);
    if height >= options.max_height {
        return Err(ProofError::InvalidInput(format!(
            "{} leaves need a tree of height {}, limit is below {}",
            leaf_count, height, options.max_height
        )));
    }
    Ok(height)
}

/// Hash every leaf and pad the level to `2^height` entries.
pub(crate) fn leaf_level<Method, L>(
    leaves: &[L],
    height: usize,
    options: &ProofOptions,
) -> Vec<Digest>
where
    Method: HashMethod,
    L: AsRef<[u8]> + Sync,
{
    let start = Instant::now();
    let mut level: Vec<Digest> = if leaves.len() >= options.parallel_threshold {
        leaves
            .par_iter()
            .map(|leaf| Method::hash_leaf(leaf.as_ref()))
            .collect()
    } else {
        leaves
            .iter()
            .map(|leaf| Method::hash_leaf(leaf.as_ref()))
            .collect()
    };

    level.resize(1 << height, Padding.into());
    debug!(
        "Hashed {} leaves into a level of {} in {:?}",
        leaves.len(),
        level.len(),
        start.elapsed()
    );
    level
}

/// Pair adjacent digests left to right into the next level up.
pub(crate) fn parent_level<Method: HashMethod>(
    level: &[Digest],
    options: &ProofOptions,
) -> Vec<Digest> {
    if level.len() >= options.parallel_threshold {
        level
            .par_chunks_exact(2)
            .map(|pair| Method::hash_internal(&pair[0], &pair[1]))
            .collect()
    } else {
        level
            .iter()
            .tuples()
            .map(|(left, right)| Method::hash_internal(left, right))
            .collect()
    }
}

/// Fold a padded level all the way up to its root.
pub(crate) fn fold_to_root<Method: HashMethod>(
    mut level: Vec<Digest>,
    options: &ProofOptions,
) -> Result<Digest> {
    while level.len() > 1 {
        level = parent_level::<Method>(&level, options);
    }
    level
        .pop()
        .ok_or_else(|| ProofError::InvalidInput("leaf collection cannot be empty".to_string()))
}
