//! Line-oriented proof files:
//!
//! ```text
//! leaf position: 743
//! leaf value: 0x64617461206974656d20373433
//! Hash values in proof:
//!   0x…
//! ```

use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;
use std::fs;
use std::path::Path;

use super::json::decode_hex;
use crate::domain::{digest::Digest, proof::Proof};

const POSITION_PREFIX: &str = "leaf position: ";
const LEAF_PREFIX: &str = "leaf value: ";
const PATH_HEADER: &str = "Hash values in proof:";

pub fn to_text(proof: &Proof) -> String {
    let mut out = format!(
        "{}{}\n{}0x{}\n{}\n",
        POSITION_PREFIX,
        proof.pos,
        LEAF_PREFIX,
        hex::encode(&proof.leaf),
        PATH_HEADER
    );
    if !proof.path.is_empty() {
        out.push_str(&proof.path.iter().map(|d| format!("  {d}")).join("\n"));
        out.push('\n');
    }
    out
}

pub fn from_text(s: &str) -> Result<Proof> {
    let mut lines = s.lines().enumerate();

    let (_, line) = lines.next().ok_or_else(|| anyhow!("Proof text is empty"))?;
    let pos = line
        .strip_prefix(POSITION_PREFIX)
        .ok_or_else(|| anyhow!("line 1: expected `{}`", POSITION_PREFIX.trim_end()))?
        .trim()
        .parse::<usize>()
        .context("line 1: leaf position is not an unsigned integer")?;

    let (_, line) = lines
        .next()
        .ok_or_else(|| anyhow!("line 2: missing leaf value"))?;
    let leaf = line
        .strip_prefix(LEAF_PREFIX)
        .ok_or_else(|| anyhow!("line 2: expected `{}`", LEAF_PREFIX.trim_end()))?;
    let leaf = decode_hex(leaf.trim()).context("line 2: leaf value is not hex")?;

    match lines.next() {
        Some((_, line)) if line.trim_end() == PATH_HEADER => {}
        _ => bail!("line 3: expected `{}`", PATH_HEADER),
    }

    let mut path = Vec::new();
    for (idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let digest = Digest::from_hex(line).with_context(|| format!("line {}", idx + 1))?;
        path.push(digest);
    }

    Ok(Proof::new(leaf, pos, path))
}

pub fn write_text_file(proof: &Proof, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_text(proof))
        .with_context(|| format!("Failed to write proof to {}", path.display()))
}

pub fn read_text_file(path: impl AsRef<Path>) -> Result<Proof> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read proof from {}", path.display()))?;
    from_text(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ProofError;
    use crate::domain::proof::builder::ProofBuilderSha256;

    #[test]
    fn test_layout() {
        let proof = Proof::new(b"ab".to_vec(), 3, vec![Digest::default()]);
        let text = to_text(&proof);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("leaf position: 3"));
        assert_eq!(lines.next(), Some("leaf value: 0x6162"));
        assert_eq!(lines.next(), Some("Hash values in proof:"));
        assert_eq!(lines.next(), Some(format!("  {}", Digest::default()).as_str()));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_text_file_round_trip() {
        let leaves: Vec<Vec<u8>> = (0..37).map(|i| format!("item {i}").into_bytes()).collect();
        let proof = ProofBuilderSha256::default().build(&leaves, 36).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("proof.txt");
        write_text_file(&proof, &file).unwrap();
        assert_eq!(read_text_file(&file).unwrap(), proof);
    }

    #[test]
    fn test_empty_path_round_trip() {
        let proof = Proof::new(b"solo".to_vec(), 0, vec![]);
        assert_eq!(from_text(&to_text(&proof)).unwrap(), proof);
    }

    #[test]
    fn test_bad_position_line() {
        let err = from_text("leaf position: minus one\n").unwrap_err();
        assert!(err.to_string().contains("line 1"), "got {err}");
    }

    #[test]
    fn test_missing_header() {
        let err = from_text("leaf position: 0\nleaf value: 0x61\n  0x00\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "got {err}");
    }

    #[test]
    fn test_short_digest_names_line() {
        let text = "leaf position: 0\nleaf value: 0x61\nHash values in proof:\n  0x0011\n";
        let err = from_text(text).unwrap_err();
        assert!(err.to_string().contains("line 4"), "got {err}");
        assert!(matches!(
            err.downcast_ref::<ProofError>(),
            Some(ProofError::MalformedProof(_))
        ));
    }
}
