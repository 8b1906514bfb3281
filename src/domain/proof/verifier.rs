use log::{debug, warn};
use std::marker::PhantomData;

use super::Proof;
use crate::domain::{
    digest::Digest,
    error::{ProofError, Result},
    hash::{sha256::Sha256Tagged, HashMethod},
    options::ProofOptions,
};

/// Checks a [`Proof`] against a trusted root without the leaf collection.
pub struct ProofVerifier<Method>
where
    Method: HashMethod,
{
    options: ProofOptions,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> Default for ProofVerifier<Method> {
    fn default() -> Self {
        Self::new(ProofOptions::default())
    }
}

impl<Method: HashMethod> ProofVerifier<Method> {
    pub fn new(options: ProofOptions) -> Self {
        Self {
            options,
            method: PhantomData,
        }
    }

    pub fn options(&self) -> &ProofOptions {
        &self.options
    }

    /// Recompute the root by folding the path over the leaf digest.
    ///
    /// Fails with `ProofTooLong` before any hashing if the path reaches
    /// `max_height`, and with `MalformedProof` if `pos` needs more levels
    /// than the path provides.
    pub fn compute_root(&self, proof: &Proof) -> Result<Digest> {
        let len = proof.path.len();
        if len >= self.options.max_height {
            warn!(
                "Rejecting proof with {} path entries (limit {})",
                len, self.options.max_height
            );
            return Err(ProofError::ProofTooLong {
                len,
                max: self.options.max_height,
            });
        }

        if len < usize::BITS as usize && proof.pos >> len != 0 {
            warn!(
                "Rejecting proof: position {} does not fit a path of {}",
                proof.pos, len
            );
            return Err(ProofError::MalformedProof(format!(
                "position {} needs more than {} levels",
                proof.pos, len
            )));
        }

        let mut acc = Method::hash_leaf(&proof.leaf);
        let mut pos = proof.pos;
        for sibling in &proof.path {
            acc = if pos % 2 == 0 {
                Method::hash_internal(&acc, sibling)
            } else {
                Method::hash_internal(sibling, &acc)
            };
            pos /= 2;
        }
        Ok(acc)
    }

    /// `Ok(true)` iff the recomputed root equals `trusted_root` byte for byte.
    /// A mismatch is `Ok(false)`; only malformed proofs are errors.
    pub fn verify(&self, proof: &Proof, trusted_root: &Digest) -> Result<bool> {
        let computed = self.compute_root(proof)?;
        let valid = computed == *trusted_root;
        debug!(
            "Proof for position {} ({} levels): computed {}, trusted {}, valid = {}",
            proof.pos,
            proof.path.len(),
            computed,
            trusted_root,
            valid
        );
        Ok(valid)
    }
}

pub type ProofVerifierSha256 = ProofVerifier<Sha256Tagged>;
