//! Seedstream - Password-Seeded Deterministic Stream Generator
//!
//! Derives a pseudorandom byte stream whose length and content depend on
//! matching a derived byte pattern against the keystream itself. The
//! construction is a custom block-cipher feedback loop, not a standard
//! primitive: no indistinguishability claim is made and none should be
//! assumed.
//!
//! ## Pipeline
//!
//! Each `generate` call runs the following chain:
//!
//! ```text
//! password + confusion + iterations
//!     → Bootstrap (PBKDF2-HMAC-SHA256 seed, SHAKE256 pattern)
//!     → Split (64-byte seed → 32-byte key + 32-byte register)
//!     → Source (AES-256 ECB over the register, output feedback)
//!     → Draw (append bytes until the pattern is consumed front-first,
//!             then draw a 64-byte reseed)
//!     → Split (reseed → next key + register) → Source → Draw → …
//! ```
//!
//! The per-iteration segments, concatenated in order, are the final
//! stream. Every byte of state is derived from the three inputs, so
//! identical inputs always produce an identical stream.
//!
//! The iteration count has two deliberate effects from a single knob: it
//! is the PBKDF2 round count of the bootstrap and the number of chained
//! segment draws.
//!
//! ## Example
//!
//! ```
//! use seedstream::generate;
//!
//! let stream = generate(b"correct horse", b"battery staple", 4).unwrap();
//! let again = generate(b"correct horse", b"battery staple", 4).unwrap();
//! assert_eq!(stream, again);
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;

pub use error::{Result, SeedstreamError};
pub use pipeline::{generate, Generator};
