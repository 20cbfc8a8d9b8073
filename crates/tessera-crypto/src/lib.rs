//! Tessera Cryptographic Primitives
//!
//! Number-theoretic and hash-based building blocks for Tessera's
//! privacy-preserving protocols (private set intersection, homomorphic
//! aggregation). Protocols obtain one [`Context`] per thread and call every
//! primitive through it.
//!
//! # Primitives
//!
//! ```text
//! Context
//!   ├── BigNum factories, cached 0 / 1 / 2 / 3
//!   ├── SHA-256, SHA-512                    (stateless per call)
//!   ├── Random oracle                       (counter-mode SHA-512)
//!   ├── PRF                                 (HMAC-SHA512 + rejection)
//!   ├── Uniform sampling, coprime sampling  (EntropySource)
//!   └── Prime and safe-prime generation     (EntropySource)
//! ```
//!
//! # Failure Model
//!
//! Nothing in this crate panics on caller input. Violated preconditions
//! (short PRF key, oversized oracle domain, empty range, zero modulus) return
//! [`CryptoError::InvalidArgument`]; engine faults, an unseeded entropy
//! source and exhausted sampling loops have their own variants. All of them
//! indicate a bug or a broken environment, so callers are expected to
//! terminate rather than retry.
//!
//! # Security
//!
//! - Uniformity: the PRF and integer sampling use rejection sampling, so
//!   outputs carry no modulo bias
//! - Oracle bias: the random oracle reduces a value 512 bits wider than its
//!   domain, bounding bias by `2^-512`
//! - Key length: PRF keys shorter than 80 bits are refused
//! - Side channels: no constant-time guarantees beyond those of
//!   `num-bigint-dig`

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bignum;
pub mod config;
pub mod context;
pub mod digest;
pub mod entropy;
pub mod error;
pub mod oracle;
pub mod prf;
pub mod prime;
pub mod random;

pub use bignum::BigNum;
pub use config::ContextConfig;
pub use context::Context;
pub use digest::{hmac_sha512, sha256, sha512};
pub use entropy::{DeterministicEntropy, EntropySource, OsEntropy};
pub use error::CryptoError;
pub use oracle::random_oracle;
pub use prf::prf;
