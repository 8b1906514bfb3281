/// Trees must be strictly shorter than this; proofs must have fewer entries.
pub const MAX_HEIGHT: usize = 20;

/// Level width at which hashing moves onto the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofOptions {
    pub max_height: usize,
    pub parallel_threshold: usize,
}

impl Default for ProofOptions {
    fn default() -> Self {
        Self {
            max_height: MAX_HEIGHT,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl ProofOptions {
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
