//! Pairwise commit-reveal exchange
//!
//! Drives one round of seed agreement between us and a single peer:
//!
//! 1. Publish our [`Commitment`]
//! 2. Receive the peer's commitment ([`Exchange::receive_commitment`])
//! 3. Reveal our nonce ([`Exchange::reveal`]), only once theirs is committed
//! 4. Receive and verify the peer's nonce ([`Exchange::receive_nonce`]),
//!    which yields the shared [`Source`]
//!
//! Moving the messages between peers is the caller's job. Calling a step in
//! the wrong phase is a fatal [`SyncRandError::OutOfOrder`]; a peer failing
//! verification is the recoverable [`SyncRandError::PeerRejected`], after
//! which the exchange is finished and a new one must be started.

mod config;

pub use config::{ExchangeConfig, MIN_NONCE_LEN};

use crate::commit::{commit, verify, Commitment};
use crate::error::{Result, SyncRandError};
use crate::rng::Source;
use crate::seed::make_seed;
use rand_core::{OsRng, RngCore};
use std::fmt;
use tracing::{debug, warn};

/// Where an exchange currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Our commitment is ready; the peer's has not arrived
    AwaitingCommitment,
    /// Both commitments held; waiting for the peer's nonce
    AwaitingReveal,
    /// Peer verified and the seed has been derived
    Complete,
    /// Peer failed verification or desynchronized
    Rejected,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Phase::AwaitingCommitment => "awaiting commitment",
            Phase::AwaitingReveal => "awaiting reveal",
            Phase::Complete => "complete",
            Phase::Rejected => "rejected",
        }
    }
}

/// One round of seed agreement with a single peer
pub struct Exchange {
    nonce: Vec<u8>,
    ours: Commitment,
    theirs: Option<Commitment>,
    phase: Phase,
}

impl Exchange {
    /// Start an exchange with a caller-supplied nonce
    pub fn new(nonce: Vec<u8>) -> Self {
        let ours = commit(&nonce);
        debug!(commitment = %ours.short_hex(), "exchange started");
        Self {
            nonce,
            ours,
            theirs: None,
            phase: Phase::AwaitingCommitment,
        }
    }

    /// Start an exchange with a fresh nonce from the operating system
    ///
    /// # Errors
    /// - [`SyncRandError::InvalidConfig`] if the config fails validation
    /// - [`SyncRandError::Entropy`] if the OS random source fails
    pub fn generate(config: &ExchangeConfig) -> Result<Self> {
        config.validate()?;
        let mut nonce = vec![0u8; config.nonce_len];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| SyncRandError::Entropy(e.to_string()))?;
        Ok(Self::new(nonce))
    }

    /// Our commitment, safe to publish at any time
    pub fn commitment(&self) -> Commitment {
        self.ours
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Record the peer's commitment
    ///
    /// A peer echoing our own commitment is rejected here, before we reveal
    /// anything.
    pub fn receive_commitment(&mut self, theirs: Commitment) -> Result<()> {
        self.expect_phase(Phase::AwaitingCommitment, "receive_commitment")?;

        if theirs == self.ours {
            warn!(commitment = %theirs.short_hex(), "peer echoed our commitment");
            self.phase = Phase::Rejected;
            return Err(SyncRandError::PeerRejected);
        }

        self.theirs = Some(theirs);
        self.phase = Phase::AwaitingReveal;
        debug!(commitment = %theirs.short_hex(), "peer commitment received");
        Ok(())
    }

    /// Our nonce, available once the peer is committed
    pub fn reveal(&self) -> Result<&[u8]> {
        match self.phase {
            Phase::AwaitingReveal | Phase::Complete => Ok(&self.nonce),
            phase => Err(SyncRandError::OutOfOrder {
                phase: phase.as_str(),
                operation: "reveal",
            }),
        }
    }

    /// Verify the peer's nonce and derive the shared source
    ///
    /// # Errors
    /// - [`SyncRandError::PeerRejected`] if the nonce does not match the
    ///   peer's commitment
    /// - [`SyncRandError::MismatchedNonceLengths`] if the nonce verifies but
    ///   its length differs from ours
    pub fn receive_nonce(&mut self, their_nonce: &[u8]) -> Result<Source> {
        self.expect_phase(Phase::AwaitingReveal, "receive_nonce")?;
        let theirs = self.theirs.ok_or(SyncRandError::OutOfOrder {
            phase: self.phase.as_str(),
            operation: "receive_nonce",
        })?;

        if !verify(&self.ours, &theirs, their_nonce) {
            warn!(commitment = %theirs.short_hex(), "peer nonce failed verification");
            self.phase = Phase::Rejected;
            return Err(SyncRandError::PeerRejected);
        }

        let seed = match make_seed([self.nonce.as_slice(), their_nonce]) {
            Ok(seed) => seed,
            Err(e) => {
                self.phase = Phase::Rejected;
                return Err(e);
            }
        };

        self.phase = Phase::Complete;
        debug!(seed_len = seed.len(), "exchange complete");
        Ok(Source::from(&seed))
    }

    fn expect_phase(&self, expected: Phase, operation: &'static str) -> Result<()> {
        if self.phase != expected {
            return Err(SyncRandError::OutOfOrder {
                phase: self.phase.as_str(),
                operation,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exchange")
            .field("ours", &self.ours)
            .field("theirs", &self.theirs)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
