//! Checkpoint - Save/Restore Source Position
//!
//! A source is fully described by its seed and how many draws it has made, so
//! a snapshot is just that pair. Restoring rebuilds the stream from the seed
//! and discards the already-consumed bytes.
//!
//! # Critical Invariants
//!
//! - **Determinism**: the restored source's next draw equals the original's
//! - **Offset**: the restored source reports the snapshot's offset

use crate::error::{Result, SyncRandError};
use crate::rng::source::Source;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest offset [`Source::restore`] will replay (128 MiB of stream)
pub const MAX_REPLAY_OFFSET: u64 = 1 << 24;

/// Serializable position of a [`Source`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Seed the source was created from
    pub seed: Vec<u8>,

    /// Draws made at snapshot time
    pub offset: u64,
}

impl SourceSnapshot {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SyncRandError::Snapshot(e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SyncRandError::Snapshot(e.to_string()))
    }
}

impl Source {
    /// Capture the seed and current draw offset
    ///
    /// # Example
    /// ```
    /// use syncrand::Source;
    ///
    /// let mut source = Source::new(b"hello");
    /// source.int63();
    /// let snapshot = source.snapshot();
    ///
    /// let mut restored = Source::restore(&snapshot).unwrap();
    /// assert_eq!(restored.seed_offset(), 1);
    /// assert_eq!(restored.int63(), source.int63());
    /// ```
    pub fn snapshot(&self) -> SourceSnapshot {
        SourceSnapshot {
            seed: self.seed_bytes().to_vec(),
            offset: self.seed_offset(),
        }
    }

    /// Rebuild a source positioned at the snapshot's offset
    ///
    /// Cost is linear in the offset, so snapshots from untrusted sources are
    /// capped at [`MAX_REPLAY_OFFSET`] draws.
    ///
    /// # Errors
    /// [`SyncRandError::Snapshot`] if the offset exceeds [`MAX_REPLAY_OFFSET`]
    pub fn restore(snapshot: &SourceSnapshot) -> Result<Self> {
        if snapshot.offset > MAX_REPLAY_OFFSET {
            return Err(SyncRandError::Snapshot(format!(
                "offset {} exceeds the replay limit of {} draws",
                snapshot.offset, MAX_REPLAY_OFFSET
            )));
        }

        let mut source = Source::new(&snapshot.seed);
        source.skip(snapshot.offset);
        debug!(offset = snapshot.offset, "restored source from snapshot");
        Ok(source)
    }
}
