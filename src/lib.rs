#![deny(clippy::all)]

//! Merkle tree inclusion proofs over SHA-256 with `leaf:` / `node:` domain
//! separation.
//!
//! A holder of the full leaf collection builds a [`Proof`] for one position;
//! anyone holding a trusted root can later check it with only that proof.

mod domain;
pub mod interfaces;

pub use domain::digest::{Digest, Padding, HASH_SIZE};
pub use domain::error::{ProofError, Result};
pub use domain::hash::{sha256::Sha256Tagged, HashMethod};
pub use domain::options::{ProofOptions, MAX_HEIGHT, PARALLEL_THRESHOLD};
pub use domain::proof::builder::{ProofBuilder, ProofBuilderSha256};
pub use domain::proof::verifier::{ProofVerifier, ProofVerifierSha256};
pub use domain::proof::Proof;
pub use domain::tree::tree_height;

/// Build a proof for `leaves[pos]` with the default options.
pub fn build_proof<L>(leaves: &[L], pos: usize) -> Result<Proof>
where
    L: AsRef<[u8]> + Sync,
{
    ProofBuilderSha256::default().build(leaves, pos)
}

/// Root of the padded tree over `leaves` with the default options.
pub fn compute_root<L>(leaves: &[L]) -> Result<Digest>
where
    L: AsRef<[u8]> + Sync,
{
    ProofBuilderSha256::default().root(leaves)
}

/// Check `proof` against `trusted_root` with the default options.
pub fn verify_proof(proof: &Proof, trusted_root: &Digest) -> Result<bool> {
    ProofVerifierSha256::default().verify(proof, trusted_root)
}
