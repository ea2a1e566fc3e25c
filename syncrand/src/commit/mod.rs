//! Nonce commitments
//!
//! A commitment binds a peer to its secret nonce before anyone reveals
//! anything. It is the first 32 bytes of SHAKE128 over
//! `"syncrand:nonce:" || nonce`.

use crate::rng::XofStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Domain separation tag absorbed before the nonce
pub const NONCE_TAG: &[u8] = b"syncrand:nonce:";

/// Commitment length in bytes
pub const COMMITMENT_LEN: usize = 32;

/// Public binding of a secret nonce
///
/// Equality is constant-time.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Short hex prefix for log lines
    pub(crate) fn short_hex(&self) -> String {
        self.0[..4].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl From<[u8; COMMITMENT_LEN]> for Commitment {
    fn from(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Commitment(bytes)
    }
}

impl TryFrom<&[u8]> for Commitment {
    type Error = std::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Commitment(bytes.try_into()?))
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Commitment {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Commitment {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Commitment {}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({}..)", self.short_hex())
    }
}

/// Commit to a nonce
///
/// # Example
/// ```
/// use syncrand::commit;
///
/// let commitment = commit(b"hello");
/// assert_eq!(commitment.as_bytes()[..4], [171, 228, 27, 72]);
/// ```
pub fn commit(nonce: &[u8]) -> Commitment {
    Commitment(XofStream::absorb(NONCE_TAG, nonce).squeeze())
}

/// Check a peer's revealed nonce against its earlier commitment
///
/// Returns `true` only if the peer's commitment differs from ours and
/// recommitting their nonce reproduces their commitment. A peer echoing our
/// own commitment back is always rejected. Both comparisons are constant-time.
///
/// # Example
/// ```
/// use syncrand::{commit, verify};
///
/// let ours = commit(b"goodbye");
/// let theirs = commit(b"hello");
/// assert!(verify(&ours, &theirs, b"hello"));
/// assert!(!verify(&theirs, &theirs, b"hello"));
/// ```
pub fn verify(ours: &Commitment, theirs: &Commitment, their_nonce: &[u8]) -> bool {
    let distinct = !ours.ct_eq(theirs);
    let matches = theirs.ct_eq(&commit(their_nonce));
    bool::from(distinct & matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_known_vector() {
        let expected: [u8; 32] = [
            171, 228, 27, 72, 163, 255, 25, 92, 68, 116, 250, 75, 192, 215, 100, 130, 254, 230,
            109, 124, 53, 74, 223, 85, 206, 179, 238, 95, 98, 236, 215, 215,
        ];
        assert_eq!(commit(b"hello").as_bytes(), &expected);
    }

    #[test]
    fn test_try_from_slice_checks_length() {
        let commitment = commit(b"hello");
        let roundtrip = Commitment::try_from(commitment.as_ref()).unwrap();
        assert_eq!(roundtrip, commitment);
        assert!(Commitment::try_from(&commitment.as_ref()[..31]).is_err());
    }

    #[test]
    fn test_debug_shows_prefix() {
        assert_eq!(format!("{:?}", commit(b"hello")), "Commitment(abe41b48..)");
    }

    #[test]
    fn test_verify_rejects_wrong_nonce() {
        let ours = commit(b"goodbye");
        let theirs = commit(b"hello");
        assert!(!verify(&ours, &theirs, b"helloe"));
    }
}
