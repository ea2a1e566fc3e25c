//! syncrand - shared randomness for lockstep peers
//!
//! Lets mutually distrusting peers agree on a random seed that none of them
//! can bias or predict, then draw identical pseudo-random sequences from it.
//!
//! # Architecture
//!
//! - **commit**: Nonce commitments and peer verification
//! - **seed**: Combining revealed nonces into a shared seed
//! - **rng**: Deterministic SHAKE128 random source, forking and checkpoints
//! - **exchange**: Pairwise commit-reveal round built on the above
//!
//! # Critical Invariants
//!
//! 1. Commitments and seeds are wire-compatible: tags `"syncrand:nonce:"` and
//!    `"syncrand:seed:"`, SHAKE128, 32-byte commitments, 8 bytes per draw
//! 2. A peer echoing our commitment is always rejected
//! 3. Draw `k` of a source depends only on the seed and `k`
//!
//! # Example
//! ```
//! use syncrand::{commit, make_seed, verify, Source};
//!
//! let (nonce_a, nonce_b) = (b"hello", b"aloha");
//! let (commit_a, commit_b) = (commit(nonce_a), commit(nonce_b));
//!
//! // After commitments are swapped, nonces are revealed and checked
//! assert!(verify(&commit_a, &commit_b, nonce_b));
//! assert!(verify(&commit_b, &commit_a, nonce_a));
//!
//! let seed = make_seed([nonce_a, nonce_b]).unwrap();
//! let mut source = Source::from(&seed);
//! assert_eq!(source.int63(), 4154673063121253460);
//! ```

// Module declarations
pub mod commit;
pub mod error;
pub mod exchange;
pub mod rng;
pub mod seed;

// Re-exports for convenience
pub use commit::{commit, verify, Commitment, COMMITMENT_LEN, NONCE_TAG};
pub use error::{Result, SyncRandError};
pub use exchange::{Exchange, ExchangeConfig, Phase};
pub use rng::{Source, SourceSnapshot, MAX_REPLAY_OFFSET, SEED_TAG};
pub use seed::{make_seed, Seed};
