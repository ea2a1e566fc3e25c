//! Deterministic random number generation
//!
//! Uses a SHAKE128 output stream keyed by the shared seed.
//! CRITICAL: All randomness consumed by a lockstep simulation MUST come from
//! a [`Source`] built from the agreed seed, or peers will desynchronize.

mod checkpoint;
mod source;
mod stream;

pub use checkpoint::{SourceSnapshot, MAX_REPLAY_OFFSET};
pub use source::{Source, SEED_TAG};
pub use stream::XofStream;
