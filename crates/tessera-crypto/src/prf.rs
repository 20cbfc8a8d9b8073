//! Keyed pseudorandom function over `[0, max_value)`.
//!
//! Computes HMAC-SHA512 of the input and keeps the low `bits(max_value)`
//! bits. A candidate at or above `max_value` is rejected and the full MAC
//! output becomes the next input, so the accepted value is exactly uniform.
//! Each round accepts with probability above one half.

use zeroize::Zeroize;

use crate::{
    bignum::BigNum,
    digest::{SHA512_OUTPUT_SIZE, hmac_sha512},
    error::CryptoError,
};

/// Minimum key length in bytes (80 bits of keying material).
pub const MIN_KEY_BYTES: usize = 10;

/// Widest supported output, bounded by a single HMAC-SHA512 call.
pub const MAX_OUTPUT_BITS: usize = SHA512_OUTPUT_SIZE * 8;

/// Evaluate the PRF under `key` on `data`, returning a value in
/// `[0, max_value)`.
///
/// # Errors
///
/// - `InvalidArgument` if `key` is shorter than [`MIN_KEY_BYTES`]
/// - `InvalidArgument` if `max_value` is zero or wider than
///   [`MAX_OUTPUT_BITS`]
/// - `SamplingExhausted` if `max_rounds` candidates are all rejected
pub fn prf(
    key: &[u8],
    data: &[u8],
    max_value: &BigNum,
    max_rounds: u32,
) -> Result<BigNum, CryptoError> {
    if key.len() < MIN_KEY_BYTES {
        return Err(CryptoError::invalid(format!(
            "PRF key must be at least {MIN_KEY_BYTES} bytes, got {}",
            key.len()
        )));
    }
    if max_value.is_zero() {
        return Err(CryptoError::invalid("PRF output range must be non-empty"));
    }
    let output_bits = max_value.bit_length();
    if output_bits > MAX_OUTPUT_BITS {
        return Err(CryptoError::invalid(format!(
            "the maximum supported output length is {MAX_OUTPUT_BITS}, \
             requested output length is {output_bits}"
        )));
    }

    let mut input = data.to_vec();
    for round in 1..=max_rounds {
        let mut mac = hmac_sha512(key, &input)?;
        let mac_value = BigNum::from_bytes_be(&mac);
        mac.zeroize();
        input.zeroize();

        let candidate = mac_value.last_n_bits(output_bits);
        if candidate < *max_value {
            return Ok(candidate);
        }

        tracing::trace!(round, output_bits, "PRF candidate rejected");
        input = mac_value.to_bytes_be();
    }

    input.zeroize();
    tracing::warn!(max_rounds, output_bits, "PRF rejection sampling exhausted");
    Err(CryptoError::SamplingExhausted { operation: "PRF", attempts: u64::from(max_rounds) })
}
