//! The single entry point to the primitive layer.

use num_bigint_dig::BigUint;

use crate::{
    bignum::BigNum,
    config::ContextConfig,
    digest::{self, SHA256_OUTPUT_SIZE, SHA512_OUTPUT_SIZE},
    entropy::{EntropySource, OsEntropy},
    error::CryptoError,
    oracle, prf, prime, random,
};

/// Owns the entropy source and cached constants used by every primitive.
///
/// A context is single-owner: randomness-consuming operations take
/// `&mut self`, so sharing one across threads requires external locking.
/// Create one context per thread instead.
///
/// Hashing, the PRF and the random oracle build their digest state per call
/// and never observe anything left over by a previous call.
pub struct Context<E: EntropySource = OsEntropy> {
    entropy: E,
    config: ContextConfig,
    zero: BigNum,
    one: BigNum,
    two: BigNum,
    three: BigNum,
}

impl Context<OsEntropy> {
    /// Create a context backed by the OS CSPRNG with default limits.
    ///
    /// # Errors
    ///
    /// - `UnseededRandomness` if the OS generator cannot produce output
    pub fn new() -> Result<Self, CryptoError> {
        Self::with_entropy(OsEntropy::new(), ContextConfig::default())
    }
}

impl<E: EntropySource> Context<E> {
    /// Create a context drawing randomness from `entropy`.
    ///
    /// # Errors
    ///
    /// - `UnseededRandomness` if `entropy` does not report itself seeded
    pub fn with_entropy(mut entropy: E, config: ContextConfig) -> Result<Self, CryptoError> {
        if !entropy.is_seeded() {
            tracing::error!("secure randomness source is not seeded");
            return Err(CryptoError::UnseededRandomness);
        }

        tracing::debug!(?config, "crypto context created");

        Ok(Self {
            entropy,
            config,
            zero: BigNum::from_u64(0),
            one: BigNum::from_u64(1),
            two: BigNum::from_u64(2),
            three: BigNum::from_u64(3),
        })
    }

    /// Limits this context applies.
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Cached zero.
    pub fn zero(&self) -> &BigNum {
        &self.zero
    }

    /// Cached one.
    pub fn one(&self) -> &BigNum {
        &self.one
    }

    /// Cached two.
    pub fn two(&self) -> &BigNum {
        &self.two
    }

    /// Cached three.
    pub fn three(&self) -> &BigNum {
        &self.three
    }

    /// [`BigNum`] from a native integer.
    pub fn create_bignum(&self, value: u64) -> BigNum {
        BigNum::from_u64(value)
    }

    /// [`BigNum`] from a big-endian byte string.
    pub fn create_bignum_from_bytes(&self, bytes: &[u8]) -> BigNum {
        BigNum::from_bytes_be(bytes)
    }

    /// [`BigNum`] wrapping an already computed [`BigUint`].
    pub fn create_bignum_from(&self, value: BigUint) -> BigNum {
        BigNum::from(value)
    }

    /// SHA-256 of `bytes`.
    pub fn sha256(&self, bytes: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        digest::sha256(bytes)
    }

    /// SHA-512 of `bytes`.
    pub fn sha512(&self, bytes: &[u8]) -> [u8; SHA512_OUTPUT_SIZE] {
        digest::sha512(bytes)
    }

    /// Hash `x` onto `[0, max_value)`. See [`oracle::random_oracle`].
    pub fn random_oracle(&self, x: &[u8], max_value: &BigNum) -> Result<BigNum, CryptoError> {
        oracle::random_oracle(x, max_value)
    }

    /// Keyed PRF onto `[0, max_value)`. See [`prf::prf`].
    pub fn prf(&self, key: &[u8], data: &[u8], max_value: &BigNum) -> Result<BigNum, CryptoError> {
        prf::prf(key, data, max_value, self.config.max_prf_rounds)
    }

    /// Random prime of exactly `bits` bits.
    pub fn generate_prime(&mut self, bits: usize) -> Result<BigNum, CryptoError> {
        prime::generate_prime(
            &mut self.entropy,
            bits,
            self.config.primality_rounds,
            self.config.max_prime_candidates,
        )
    }

    /// Random safe prime of exactly `bits` bits.
    pub fn generate_safe_prime(&mut self, bits: usize) -> Result<BigNum, CryptoError> {
        prime::generate_safe_prime(
            &mut self.entropy,
            bits,
            self.config.primality_rounds,
            self.config.max_prime_candidates,
        )
    }

    /// Uniform integer in `[0, max_value)`.
    pub fn generate_random_less_than(&mut self, max_value: &BigNum) -> Result<BigNum, CryptoError> {
        random::random_less_than(&mut self.entropy, max_value)
    }

    /// Uniform integer in `[start, end)`.
    pub fn generate_random_between(
        &mut self,
        start: &BigNum,
        end: &BigNum,
    ) -> Result<BigNum, CryptoError> {
        random::random_between(&mut self.entropy, start, end)
    }

    /// `len` secure random bytes.
    pub fn generate_random_bytes(&mut self, len: usize) -> Result<Vec<u8>, CryptoError> {
        random::random_bytes(&mut self.entropy, len)
    }

    /// Uniform integer in `[0, n)` coprime to `n`.
    pub fn relatively_prime_random_less_than(&mut self, n: &BigNum) -> Result<BigNum, CryptoError> {
        random::relatively_prime_random_less_than(
            &mut self.entropy,
            n,
            self.config.max_coprime_attempts,
        )
    }
}
