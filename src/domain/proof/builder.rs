use log::{debug, info};
use std::marker::PhantomData;
use std::time::Instant;

use super::Proof;
use crate::domain::{
    digest::Digest,
    error::{ProofError, Result},
    hash::{sha256::Sha256Tagged, HashMethod},
    options::ProofOptions,
    tree::{checked_height, fold_to_root, leaf_level, parent_level},
};

/// Builds authentication paths over an ordered leaf collection.
///
/// Each call materialises the padded tree one level at a time and drops it
/// before returning.
pub struct ProofBuilder<Method>
where
    Method: HashMethod,
{
    options: ProofOptions,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> Default for ProofBuilder<Method> {
    fn default() -> Self {
        Self::new(ProofOptions::default())
    }
}

impl<Method: HashMethod> ProofBuilder<Method> {
    pub fn new(options: ProofOptions) -> Self {
        Self {
            options,
            method: PhantomData,
        }
    }

    pub fn options(&self) -> &ProofOptions {
        &self.options
    }

    /// Build the proof that `leaves[pos]` sits at `pos`.
    ///
    /// The path holds one sibling per level, bottom first. Fails with
    /// `InvalidInput` for an empty collection, an out-of-range position, or a
    /// tree whose height reaches `max_height`.
    pub fn build<L>(&self, leaves: &[L], pos: usize) -> Result<Proof>
    where
        L: AsRef<[u8]> + Sync,
    {
        let total_start = Instant::now();
        let height = checked_height(leaves.len(), &self.options)?;
        if pos >= leaves.len() {
            return Err(ProofError::InvalidInput(format!(
                "position {} is outside 0..{}",
                pos,
                leaves.len()
            )));
        }
        debug!(
            "Building proof for position {} of {} leaves (height {})",
            pos,
            leaves.len(),
            height
        );

        let mut level = leaf_level::<Method, _>(leaves, height, &self.options);
        let mut path = Vec::with_capacity(height);
        let mut level_pos = pos;

        for _ in 0..height {
            let sibling = if level_pos % 2 == 0 {
                level[level_pos + 1]
            } else {
                level[level_pos - 1]
            };
            path.push(sibling);

            level = parent_level::<Method>(&level, &self.options);
            level_pos /= 2;
        }

        info!("Total duration of build: {:?}", total_start.elapsed());
        Ok(Proof::new(leaves[pos].as_ref().to_vec(), pos, path))
    }

    /// Root of the padded tree over `leaves`, under the same input checks as
    /// [`ProofBuilder::build`].
    pub fn root<L>(&self, leaves: &[L]) -> Result<Digest>
    where
        L: AsRef<[u8]> + Sync,
    {
        let start = Instant::now();
        let height = checked_height(leaves.len(), &self.options)?;
        let level = leaf_level::<Method, _>(leaves, height, &self.options);
        let root = fold_to_root::<Method>(level, &self.options)?;
        debug!("Computed root of {} leaves in {:?}", leaves.len(), start.elapsed());
        Ok(root)
    }
}

pub type ProofBuilderSha256 = ProofBuilder<Sha256Tagged>;
