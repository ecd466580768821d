//! Checkpoint save/load
//!
//! A checkpoint is an opaque blob that round-trips the full engine state
//! exactly: seed lists, corpus, error registries, and the resume cursor.
//! The blob is a JSON envelope carrying a format version, a save
//! timestamp, and a SHA-256 checksum of the state payload; anything that
//! fails structural or integrity validation loads as `CorruptCheckpoint`.

use crate::engine::EngineState;
use crate::persist::{PersistError, PersistResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Bumped whenever the envelope or state layout changes incompatibly
const CHECKPOINT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    saved_at: DateTime<Utc>,
    checksum: String,
    state: serde_json::Value,
}

/// Hex SHA-256 of the canonical JSON rendering of the state payload
fn state_checksum(state: &serde_json::Value) -> PersistResult<String> {
    let canonical = serde_json::to_string(state)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Serializes the full engine state into an opaque checkpoint blob
pub fn encode_checkpoint(state: &EngineState) -> PersistResult<Vec<u8>> {
    let payload = serde_json::to_value(state)?;
    let envelope = Envelope {
        version: CHECKPOINT_VERSION,
        saved_at: Utc::now(),
        checksum: state_checksum(&payload)?,
        state: payload,
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Reconstructs engine state from a checkpoint blob
///
/// # Errors
///
/// Returns `PersistError::CorruptCheckpoint` when the blob is not a valid
/// envelope, carries an unknown version, fails its integrity check, or
/// does not decode to a structurally valid engine state.
pub fn decode_checkpoint(blob: &[u8]) -> PersistResult<EngineState> {
    let envelope: Envelope = serde_json::from_slice(blob)
        .map_err(|e| PersistError::CorruptCheckpoint(format!("not a checkpoint envelope: {}", e)))?;

    if envelope.version != CHECKPOINT_VERSION {
        return Err(PersistError::CorruptCheckpoint(format!(
            "unsupported checkpoint version {}",
            envelope.version
        )));
    }

    let expected = state_checksum(&envelope.state)?;
    if expected != envelope.checksum {
        return Err(PersistError::CorruptCheckpoint(
            "checksum mismatch, checkpoint content was altered".to_string(),
        ));
    }

    let state: EngineState = serde_json::from_value(envelope.state)
        .map_err(|e| PersistError::CorruptCheckpoint(format!("invalid engine state: {}", e)))?;

    state.validate().map_err(PersistError::CorruptCheckpoint)?;

    Ok(state)
}

/// Saves a checkpoint blob to a file
pub fn save_checkpoint(state: &EngineState, path: &Path) -> PersistResult<()> {
    let blob = encode_checkpoint(state)?;
    std::fs::write(path, blob)?;
    tracing::info!(
        "Checkpointed {} sentence pairs at cursor {} to {}",
        state.corpus.len(),
        state.cursor,
        path.display()
    );
    Ok(())
}

/// Loads engine state back from a checkpoint file
pub fn load_checkpoint(path: &Path) -> PersistResult<EngineState> {
    let blob = std::fs::read(path)?;
    decode_checkpoint(&blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{SentencePair, Side};
    use crate::seeds::SeedStore;

    fn populated_state() -> EngineState {
        let seeds = SeedStore::from_lists(
            vec!["cat".to_string(), "dog".to_string()],
            vec!["chat".to_string(), "chien".to_string()],
        )
        .unwrap();

        let mut state = EngineState::new(seeds);
        state
            .corpus
            .append(SentencePair::new("The cat sleeps", "Le chat dort"));
        state.corpus.record_error("dog", Side::Source);
        state.cursor = 1;
        state
    }

    #[test]
    fn test_roundtrip_reconstructs_identical_state() {
        let state = populated_state();
        let blob = encode_checkpoint(&state).unwrap();
        let restored = decode_checkpoint(&blob).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn test_garbage_blob_is_corrupt() {
        let result = decode_checkpoint(b"definitely not json");
        assert!(matches!(result, Err(PersistError::CorruptCheckpoint(_))));
    }

    #[test]
    fn test_wrong_shape_json_is_corrupt() {
        let result = decode_checkpoint(br#"{"hello": "world"}"#);
        assert!(matches!(result, Err(PersistError::CorruptCheckpoint(_))));
    }

    #[test]
    fn test_unknown_version_is_corrupt() {
        let state = populated_state();
        let blob = encode_checkpoint(&state).unwrap();
        let mut envelope: serde_json::Value = serde_json::from_slice(&blob).unwrap();
        envelope["version"] = serde_json::json!(99);
        let tampered = serde_json::to_vec(&envelope).unwrap();

        let result = decode_checkpoint(&tampered);
        assert!(matches!(result, Err(PersistError::CorruptCheckpoint(_))));
    }

    #[test]
    fn test_tampered_state_fails_integrity_check() {
        let state = populated_state();
        let blob = encode_checkpoint(&state).unwrap();
        let mut envelope: serde_json::Value = serde_json::from_slice(&blob).unwrap();
        envelope["state"]["cursor"] = serde_json::json!(0);
        let tampered = serde_json::to_vec(&envelope).unwrap();

        let result = decode_checkpoint(&tampered);
        assert!(matches!(result, Err(PersistError::CorruptCheckpoint(_))));
    }

    #[test]
    fn test_out_of_range_cursor_is_corrupt() {
        let mut state = populated_state();
        state.cursor = 10;
        let blob = encode_checkpoint(&state).unwrap();

        let result = decode_checkpoint(&blob);
        assert!(matches!(result, Err(PersistError::CorruptCheckpoint(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl.ckpt");

        let state = populated_state();
        save_checkpoint(&state, &path).unwrap();
        let restored = load_checkpoint(&path).unwrap();

        assert_eq!(restored, state);
    }
}
