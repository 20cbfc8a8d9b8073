//! Sources of secure randomness.
//!
//! A [`Context`](crate::Context) draws every random value from an
//! [`EntropySource`]. Production code uses [`OsEntropy`]; tests and
//! simulations that need reproducible output use [`DeterministicEntropy`].

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::CryptoError;

/// A cryptographically secure random byte generator.
///
/// # Invariants
///
/// - `fill` only succeeds once `is_seeded` would return true
/// - Output of `fill` is indistinguishable from uniform to anyone who does
///   not know the seed
pub trait EntropySource {
    /// Whether the source has gathered enough entropy to produce output.
    fn is_seeded(&mut self) -> bool;

    /// Fill `dest` with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system CSPRNG.
///
/// On Linux this is `getrandom(2)`, which blocks until the kernel pool is
/// initialized; other platforms use their native equivalent.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Create a handle to the OS generator.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn is_seeded(&mut self) -> bool {
        let mut probe = [0u8; 1];
        getrandom::fill(&mut probe).is_ok()
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::fill(dest).map_err(|e| CryptoError::engine(format!("OS RNG: {e}")))
    }
}

/// ChaCha20 keystream expanded from a fixed seed.
///
/// Output is fully determined by the seed. Only use this where
/// reproducibility matters more than secrecy: tests, fuzzing, simulation.
#[derive(Clone, Debug)]
pub struct DeterministicEntropy {
    rng: ChaCha20Rng,
}

impl DeterministicEntropy {
    /// Create a stream from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }
}

impl EntropySource for DeterministicEntropy {
    fn is_seeded(&mut self) -> bool {
        true
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}

/// Adapts an [`EntropySource`] to [`RngCore`] so `num-bigint-dig` samplers
/// can draw from it.
///
/// `RngCore::fill_bytes` cannot fail, so a source error is parked in the
/// adapter and the buffer is zeroed. Callers must check [`Self::finish`]
/// before trusting anything sampled through the adapter.
pub(crate) struct EntropyRng<'a, E: EntropySource + ?Sized> {
    source: &'a mut E,
    error: Option<CryptoError>,
}

impl<'a, E: EntropySource + ?Sized> EntropyRng<'a, E> {
    pub(crate) fn new(source: &'a mut E) -> Self {
        Self { source, error: None }
    }

    /// Surface the first error the source reported, if any.
    pub(crate) fn finish(self) -> Result<(), CryptoError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<E: EntropySource + ?Sized> RngCore for EntropyRng<'_, E> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if self.error.is_some() {
            dest.fill(0);
            return;
        }
        if let Err(err) = self.source.fill(dest) {
            dest.fill(0);
            self.error = Some(err);
        }
    }

    // Never reports failure: `Rng::fill` panics on `Err`, so the error is
    // parked for `finish` like in `fill_bytes`.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
