//! SHAKE128-backed deterministic random source
//!
//! Every draw squeezes 8 fresh bytes from a SHAKE128 stream absorbed from
//! `"syncrand:seed:" || seed`. Peers holding the same seed therefore see the
//! same sequence of values, and any peer can fork the stream at any point
//! (for rollback or speculative execution) without recomputing from the seed.
//!
//! # Determinism
//!
//! Draw `k` is a pure function of `(seed, k)`. This is what lets two
//! lockstep peers stay in sync:
//! - Same seed → same sequence
//! - Cloning at draw `k` → both copies continue with draw `k`
//! - Snapshot `(seed, k)` → a rebuilt source continues with draw `k`

use crate::error::{Result, SyncRandError};
use crate::rng::stream::XofStream;
use crate::seed::Seed;
use rand_core::{impls, RngCore};
use std::fmt;

/// Domain separation tag absorbed before the seed
pub const SEED_TAG: &[u8] = b"syncrand:seed:";

/// Bytes squeezed per draw
pub(crate) const DRAW_BYTES: u64 = 8;

const INT63_MASK: u64 = (1 << 63) - 1;
const FLOAT_BITS: u32 = 53;

/// Deterministic random source keyed by a shared seed
///
/// # Example
/// ```
/// use syncrand::Source;
///
/// let mut source = Source::new(b"hello");
/// assert_eq!(source.int63(), 6164488906953303115);
/// assert_eq!(source.seed_offset(), 1);
/// ```
#[derive(Clone)]
pub struct Source {
    stream: XofStream,
    /// Seed bytes, kept so the source can be checkpointed
    seed: Vec<u8>,
    /// Number of draws since creation (inherited across clones)
    offset: u64,
}

impl Source {
    /// Create a new source from seed bytes
    ///
    /// # Example
    /// ```
    /// use syncrand::{make_seed, Source};
    ///
    /// let seed = make_seed([&b"hello"[..], &b"aloha"[..]]).unwrap();
    /// let mut source = Source::from(&seed);
    /// assert_eq!(source.int63(), 4154673063121253460);
    /// ```
    pub fn new(seed: &[u8]) -> Self {
        Self {
            stream: XofStream::absorb(SEED_TAG, seed),
            seed: seed.to_vec(),
            offset: 0,
        }
    }

    /// Draw the next non-negative 63-bit value
    ///
    /// Squeezes 8 bytes, reads them as a little-endian `u64` and clears the
    /// top bit.
    pub fn int63(&mut self) -> i64 {
        let bytes: [u8; 8] = self.stream.squeeze();
        self.offset += 1;
        (u64::from_le_bytes(bytes) & INT63_MASK) as i64
    }

    /// Number of draws performed on this instance since creation
    ///
    /// A clone starts from its parent's offset at the time of cloning.
    pub fn seed_offset(&self) -> u64 {
        self.offset
    }

    /// Independent copy at the current stream position
    ///
    /// Equivalent to `clone()`; named for call sites that branch execution.
    ///
    /// # Example
    /// ```
    /// use syncrand::Source;
    ///
    /// let mut main = Source::new(b"hello");
    /// main.int63();
    /// let mut branch = main.fork();
    /// assert_eq!(main.int63(), branch.int63());
    /// assert_eq!(main.seed_offset(), branch.seed_offset());
    /// ```
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Reseeding is not supported
    ///
    /// A SHAKE stream cannot be rekeyed mid-stream; build a new [`Source`]
    /// instead. Always returns [`SyncRandError::ReseedUnsupported`] and
    /// leaves the source untouched.
    pub fn reseed(&mut self, _seed: i64) -> Result<()> {
        Err(SyncRandError::ReseedUnsupported)
    }

    /// Draw a value uniformly from `[0, n)`
    ///
    /// Powers of two take a single draw. Other bounds reject draws above the
    /// largest multiple of `n` so the result is unbiased, which may consume
    /// more than one draw.
    ///
    /// # Errors
    /// [`SyncRandError::InvalidBound`] if `n <= 0`
    pub fn int63n(&mut self, n: i64) -> Result<i64> {
        if n <= 0 {
            return Err(SyncRandError::InvalidBound { n });
        }
        if n & (n - 1) == 0 {
            return Ok(self.int63() & (n - 1));
        }
        let max = (INT63_MASK - (1u64 << 63) % n as u64) as i64;
        let mut value = self.int63();
        while value > max {
            value = self.int63();
        }
        Ok(value % n)
    }

    /// Draw a value uniformly from `[min, max)`
    ///
    /// # Errors
    /// [`SyncRandError::InvalidRange`] if `min >= max` or the span does not
    /// fit in an `i64`
    ///
    /// # Example
    /// ```
    /// use syncrand::Source;
    ///
    /// let mut source = Source::new(b"dice");
    /// let roll = source.range(1, 7).unwrap();
    /// assert!((1..7).contains(&roll));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> Result<i64> {
        let span = match max.checked_sub(min) {
            Some(span) if min < max => span,
            _ => return Err(SyncRandError::InvalidRange { min, max }),
        };
        Ok(min + self.int63n(span)?)
    }

    /// Draw an `f64` in `[0.0, 1.0)` using 53 bits of a single draw
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.int63() & ((1i64 << FLOAT_BITS) - 1);
        bits as f64 / (1u64 << FLOAT_BITS) as f64
    }

    pub(crate) fn seed_bytes(&self) -> &[u8] {
        &self.seed
    }

    /// Advance past `draws` values without producing them
    pub(crate) fn skip(&mut self, draws: u64) {
        let mut sink = [0u8; 512];
        let mut remaining = draws * DRAW_BYTES;
        while remaining > 0 {
            let chunk = remaining.min(sink.len() as u64) as usize;
            self.stream.squeeze_into(&mut sink[..chunk]);
            remaining -= chunk as u64;
        }
        self.offset += draws;
    }
}

impl From<&Seed> for Source {
    fn from(seed: &Seed) -> Self {
        Source::new(seed.as_bytes())
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("seed_len", &self.seed.len())
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

/// Lets the source drive `rand` distributions.
///
/// All methods are built on [`Source::int63`], so the draw offset keeps
/// counting 63-bit draws: `next_u32` takes one, `next_u64` takes two.
impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        (self.int63() >> 31) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let low = (self.int63() as u64) >> 31;
        let high = (self.int63() as u64) << 32;
        low | high
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_rejected_and_stream_untouched() {
        let mut source = Source::new(b"hello");
        assert_eq!(source.reseed(1), Err(SyncRandError::ReseedUnsupported));
        assert_eq!(source.seed_offset(), 0);
        assert_eq!(source.int63(), 6164488906953303115);
    }

    #[test]
    fn test_int63n_invalid_bound() {
        let mut source = Source::new(b"hello");
        assert_eq!(source.int63n(0), Err(SyncRandError::InvalidBound { n: 0 }));
        assert_eq!(
            source.int63n(-5),
            Err(SyncRandError::InvalidBound { n: -5 })
        );
        assert_eq!(source.seed_offset(), 0, "failed bound must not draw");
    }

    #[test]
    fn test_int63n_power_of_two_uses_one_draw() {
        let mut source = Source::new(b"hello");
        let mut reference = Source::new(b"hello");

        let value = source.int63n(1024).unwrap();
        assert_eq!(value, reference.int63() & 1023);
        assert_eq!(source.seed_offset(), 1);
    }

    #[test]
    fn test_range_invalid_bounds() {
        let mut source = Source::new(b"hello");
        assert_eq!(
            source.range(100, 50),
            Err(SyncRandError::InvalidRange { min: 100, max: 50 })
        );
        assert_eq!(
            source.range(7, 7),
            Err(SyncRandError::InvalidRange { min: 7, max: 7 })
        );
        assert!(source.range(i64::MIN, i64::MAX).is_err());
    }

    #[test]
    fn test_range_single_value() {
        let mut source = Source::new(b"hello");
        assert_eq!(source.range(5, 6).unwrap(), 5);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut source = Source::new(b"floats");
        for _ in 0..1000 {
            let val = source.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
        assert_eq!(source.seed_offset(), 1000);
    }

    #[test]
    fn test_next_u64_consumes_two_draws() {
        let mut source = Source::new(b"hello");
        let mut reference = Source::new(b"hello");

        let value = source.next_u64();
        let low = (reference.int63() as u64) >> 31;
        let high = (reference.int63() as u64) << 32;

        assert_eq!(value, low | high);
        assert_eq!(source.seed_offset(), 2);
    }

    #[test]
    fn test_skip_matches_drawing() {
        let mut drawn = Source::new(b"skip");
        for _ in 0..100 {
            drawn.int63();
        }
        let mut skipped = Source::new(b"skip");
        skipped.skip(100);

        assert_eq!(skipped.seed_offset(), 100);
        assert_eq!(drawn.int63(), skipped.int63());
    }

    #[test]
    fn test_debug_hides_seed() {
        let seed = b"topsecret";
        let source = Source::new(seed);
        let rendered = format!("{:?}", source);
        assert!(rendered.contains("seed_len: 9"));
        assert!(rendered.contains("offset: 0"));
        assert!(!rendered.contains("seed:"));
        assert!(!rendered.contains("topsecret"));
        assert!(!rendered.contains(&format!("{:?}", seed)));
        assert!(!rendered.contains(&format!("{:?}", seed.to_vec())));
    }
}
