use std::fmt;

use super::error::{ProofError, Result};

/// Output size of the tree hash (SHA-256).
pub const HASH_SIZE: usize = 32;

/// A fixed-length tree hash. Leaf and node digests share this layout; the
/// hashing tags keep the two domains apart.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; HASH_SIZE]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse a hex digest, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(trimmed)
            .map_err(|e| ProofError::MalformedProof(format!("digest is not hex: {e}")))?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = ProofError;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; HASH_SIZE] = value.try_into().map_err(|_| {
            ProofError::MalformedProof(format!(
                "digest must be {} bytes, got {}",
                HASH_SIZE,
                value.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; HASH_SIZE]> for Digest {
    fn from(value: [u8; HASH_SIZE]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Sentinel for a slot past the last real leaf in the padded bottom level.
///
/// It only ever enters the tree as an input to `hash_internal`; its digest is
/// all zero bytes and is never produced by `hash_leaf`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding;

impl Padding {
    pub const DIGEST: Digest = Digest([0u8; HASH_SIZE]);
}

impl From<Padding> for Digest {
    fn from(_: Padding) -> Self {
        Padding::DIGEST
    }
}
