use super::digest::Digest;

pub mod builder;
pub mod verifier;

/// An inclusion proof: the leaf, its position, and the sibling digests from
/// the bottom of the tree up to just below the root.
///
/// Shared by [`builder::ProofBuilder`] and [`verifier::ProofVerifier`]; a
/// trusted root is the only other input verification needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Proof {
    /// data of the leaf being proven
    pub leaf: Vec<u8>,
    /// zero-based position of the leaf
    pub pos: usize,
    /// sibling digests, bottom to top
    pub path: Vec<Digest>,
}

impl Proof {
    pub fn new(leaf: Vec<u8>, pos: usize, path: Vec<Digest>) -> Self {
        Self { leaf, pos, path }
    }

    /// Number of levels the path spans.
    pub fn height(&self) -> usize {
        self.path.len()
    }
}
