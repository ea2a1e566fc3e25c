//! SHAKE128 output stream
//!
//! Wraps an absorbed SHAKE128 context that has been switched to squeezing.
//! The sponge state is never exposed; callers only squeeze bytes out of it or
//! fork it. Keccak's XOF has no practical output limit, so squeezing is
//! infallible.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader};
use std::fmt;

/// Byte stream squeezed from a domain-tagged SHAKE128 context
#[derive(Clone)]
pub struct XofStream {
    reader: Shake128Reader,
    /// Bytes squeezed so far (including bytes inherited by a fork)
    squeezed: u64,
}

impl XofStream {
    /// Absorb `tag || input` and switch to squeezing
    ///
    /// # Example
    /// ```
    /// use syncrand::rng::XofStream;
    ///
    /// let mut stream = XofStream::absorb(b"syncrand:nonce:", b"hello");
    /// let digest: [u8; 32] = stream.squeeze();
    /// assert_eq!(digest[0], 171);
    /// ```
    pub fn absorb(tag: &[u8], input: &[u8]) -> Self {
        let mut hasher = Shake128::default();
        hasher.update(tag);
        hasher.update(input);
        Self {
            reader: hasher.finalize_xof(),
            squeezed: 0,
        }
    }

    /// Squeeze exactly `N` fresh bytes
    pub fn squeeze<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        self.squeeze_into(&mut out);
        out
    }

    /// Fill `out` with fresh bytes from the stream
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.reader.read(out);
        self.squeezed += out.len() as u64;
    }

    /// Independent copy positioned at the same point in the stream
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Bytes squeezed so far, counting those inherited through forks
    pub fn bytes_squeezed(&self) -> u64 {
        self.squeezed
    }
}

impl fmt::Debug for XofStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sponge state stays opaque
        f.debug_struct("XofStream")
            .field("squeezed", &self.squeezed)
            .finish_non_exhaustive()
    }
}
