use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{digest::Digest, error::ProofError, proof::Proof};

/// JSON shape of a stored proof. Leaf bytes and digests are `0x`-hex so
/// arbitrary leaf data survives the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub leaf: String,
    pub pos: usize,
    pub path: Vec<String>,
}

impl From<&Proof> for ProofJson {
    fn from(value: &Proof) -> Self {
        Self {
            leaf: format!("0x{}", hex::encode(&value.leaf)),
            pos: value.pos,
            path: value.path.iter().map(Digest::to_hex).collect(),
        }
    }
}

impl TryFrom<ProofJson> for Proof {
    type Error = ProofError;

    fn try_from(value: ProofJson) -> Result<Self, Self::Error> {
        let leaf = decode_hex(&value.leaf)
            .map_err(|e| ProofError::MalformedProof(format!("leaf is not hex: {e}")))?;
        let path = value
            .path
            .iter()
            .map(|h| Digest::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Proof::new(leaf, value.pos, path))
    }
}

pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}

pub fn to_json_string(proof: &Proof) -> Result<String> {
    serde_json::to_string_pretty(&ProofJson::from(proof)).context("Failed to encode proof as JSON")
}

pub fn from_json_str(s: &str) -> Result<Proof> {
    let json: ProofJson = serde_json::from_str(s).context("Failed to parse proof JSON")?;
    Ok(Proof::try_from(json)?)
}

pub fn write_json_file(proof: &Proof, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json_string(proof)?)
        .with_context(|| format!("Failed to write proof to {}", path.display()))
}

pub fn read_json_file(path: impl AsRef<Path>) -> Result<Proof> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read proof from {}", path.display()))?;
    from_json_str(&contents)
}
