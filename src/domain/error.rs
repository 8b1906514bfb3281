use thiserror::Error;

/// Errors raised while building or checking an inclusion proof.
///
/// A root mismatch is not an error: `verify` reports it as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// Empty leaf set, position out of range, or a tree too tall to build.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The authentication path reaches or exceeds the height bound.
    #[error("Proof too long: path has {len} entries, must be below {max}")]
    ProofTooLong { len: usize, max: usize },

    /// Wrong digest length, or a position the path cannot address.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),
}

pub type Result<T> = std::result::Result<T, ProofError>;
