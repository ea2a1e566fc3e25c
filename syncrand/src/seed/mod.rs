//! Seed combination
//!
//! The shared seed is the XOR of every peer's revealed nonce. XOR is
//! commutative and associative, so the order nonces arrive in does not
//! matter, and no single peer can steer the result once the others have
//! committed.

use crate::error::{Result, SyncRandError};

/// Shared seed produced by [`make_seed`]
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Vec<u8>);

impl Seed {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed({} bytes)", self.0.len())
    }
}

/// XOR equal-length nonces into a seed
///
/// # Errors
/// - [`SyncRandError::NoNonces`] if `nonces` is empty
/// - [`SyncRandError::MismatchedNonceLengths`] if any nonce differs in length
///   from the first
///
/// # Example
/// ```
/// use syncrand::make_seed;
///
/// let seed = make_seed([&b"hello"[..], &b"henlo"[..]]).unwrap();
/// assert_eq!(seed.as_bytes(), &[0, 0, 2, 0, 0]);
/// ```
pub fn make_seed<I, N>(nonces: I) -> Result<Seed>
where
    I: IntoIterator<Item = N>,
    N: AsRef<[u8]>,
{
    let mut nonces = nonces.into_iter();
    let first = nonces.next().ok_or(SyncRandError::NoNonces)?;
    let mut seed = first.as_ref().to_vec();

    for (i, nonce) in nonces.enumerate() {
        let nonce = nonce.as_ref();
        if nonce.len() != seed.len() {
            return Err(SyncRandError::MismatchedNonceLengths {
                index: i + 1,
                expected: seed.len(),
                found: nonce.len(),
            });
        }
        for (acc, byte) in seed.iter_mut().zip(nonce) {
            *acc ^= byte;
        }
    }

    Ok(Seed(seed))
}
