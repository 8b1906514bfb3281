use super::digest::Digest;

pub mod sha256;

/// Domain-separated tree hashing.
///
/// Implementations must prefix leaf and node inputs with distinct tags,
/// neither a prefix of the other, so a leaf digest can never be replayed
/// as an internal node (or the reverse).
pub trait HashMethod {
    /// Tag prepended to leaf data.
    const LEAF_TAG: &'static [u8];

    /// Tag prepended to a pair of child digests.
    const NODE_TAG: &'static [u8];

    /// Hash a leaf’s data: `H(LEAF_TAG || data)`.
    fn hash_leaf(data: &[u8]) -> Digest;

    /// Hash two child digests together: `H(NODE_TAG || left || right)`.
    fn hash_internal(left: &Digest, right: &Digest) -> Digest;
}
