//! Crate error type
//!
//! Two classes of failure exist:
//! - **Fatal**: caller bugs or protocol desynchronization (mismatched nonce
//!   lengths, reseeding, calling exchange steps out of order). The operation
//!   that raised it must be abandoned.
//! - **Recoverable**: the peer failed verification. The round is lost but the
//!   caller decides what happens next (renegotiate, disconnect, report).
//!
//! Plain commitment verification never errors; see [`crate::verify`].

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SyncRandError>;

/// Errors produced by seed combination, the random source and the exchange
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncRandError {
    #[error("no nonces passed to make_seed")]
    NoNonces,

    #[error("mismatched nonce lengths: nonce {index} has {found} bytes, expected {expected}")]
    MismatchedNonceLengths {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot reseed a shake source: construct a new Source instead")]
    ReseedUnsupported,

    #[error("bound must be positive, got {n}")]
    InvalidBound { n: i64 },

    #[error("min must be less than max (min={min}, max={max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("invalid exchange config: {0}")]
    InvalidConfig(String),

    #[error("{operation} is not allowed while {phase}")]
    OutOfOrder {
        phase: &'static str,
        operation: &'static str,
    },

    #[error("failed to read operating system entropy: {0}")]
    Entropy(String),

    #[error("invalid source snapshot: {0}")]
    Snapshot(String),

    #[error("peer commitment rejected")]
    PeerRejected,
}

impl SyncRandError {
    /// Whether the caller can continue after this error.
    ///
    /// Only a rejected peer is recoverable; everything else is a programming
    /// error or a desynchronized protocol.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SyncRandError::PeerRejected)
    }
}
