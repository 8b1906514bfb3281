use super::HashMethod;
use crate::domain::digest::Digest;
use sha2::{digest::FixedOutput, Digest as _, Sha256};

/// SHA-256 with `leaf:` / `node:` input tags.
pub struct Sha256Tagged;

impl HashMethod for Sha256Tagged {
    const LEAF_TAG: &'static [u8] = b"leaf:";
    const NODE_TAG: &'static [u8] = b"node:";

    fn hash_leaf(data: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(Self::LEAF_TAG);
        hasher.update(data);
        Digest::from_bytes(hasher.finalize_fixed().into())
    }

    fn hash_internal(left: &Digest, right: &Digest) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(Self::NODE_TAG);
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest::from_bytes(hasher.finalize_fixed().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Digest as _;

    #[test]
    fn test_leaf_vectors() {
        assert_eq!(
            Sha256Tagged::hash_leaf(b"").to_hex(),
            "0x08679e383d66dbc4192bae473a37843066188e42635077349d1c7db7cf25b20c"
        );
        assert_eq!(
            Sha256Tagged::hash_leaf(b"abc").to_hex(),
            "0xae86af21da23b6ca9879bbbe59537cc86ea67415e57b62a01e6382a3e78d8d1a"
        );
    }

    #[test]
    fn test_internal_vector() {
        let zero = Digest::default();
        assert_eq!(
            Sha256Tagged::hash_internal(&zero, &zero).to_hex(),
            "0x625527f217fa2b23eb296d7b108420f7f210473301a43eddfb24b00b6785b61a"
        );
    }

    #[test]
    fn test_leaf_differs_from_raw_sha256() {
        let data = b"test data";
        let raw: [u8; 32] = Sha256::digest(data).into();
        assert_ne!(
            Sha256Tagged::hash_leaf(data).as_bytes(),
            &raw,
            "Leaf hash must include the leaf tag"
        );
    }

    #[test]
    fn test_internal_is_order_sensitive() {
        let a = Sha256Tagged::hash_leaf(b"A");
        let b = Sha256Tagged::hash_leaf(b"B");
        assert_ne!(
            Sha256Tagged::hash_internal(&a, &b),
            Sha256Tagged::hash_internal(&b, &a),
            "Swapping children must change the parent digest"
        );
    }

    #[test]
    fn test_domain_separation() {
        // A 64-byte leaf shaped like two concatenated digests must not hash
        // to the node built from those same digests.
        let left = Sha256Tagged::hash_leaf(b"left");
        let right = Sha256Tagged::hash_leaf(b"right");
        let mut joined = Vec::with_capacity(64);
        joined.extend_from_slice(left.as_bytes());
        joined.extend_from_slice(right.as_bytes());

        assert_ne!(
            Sha256Tagged::hash_leaf(&joined),
            Sha256Tagged::hash_internal(&left, &right),
            "Leaf and node domains must not collide"
        );
    }

    #[test]
    fn test_tags_are_not_prefixes_of_each_other() {
        let leaf = Sha256Tagged::LEAF_TAG;
        let node = Sha256Tagged::NODE_TAG;
        assert_ne!(leaf, node);
        assert!(!leaf.starts_with(node) && !node.starts_with(leaf));
    }
}
