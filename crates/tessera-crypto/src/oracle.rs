//! Random oracle by counter-mode SHA-512 expansion.
//!
//! To map an input onto `[0, max_value)`, the oracle hashes
//! `counter || input` for counters `1..=k`, concatenates the 512-bit blocks
//! most-significant first, trims the result to `bits(max_value) + 512` bits
//! and reduces it modulo `max_value`. The 512 extra bits keep the bias of the
//! final reduction below `2^-512`.

use crate::{bignum::BigNum, digest::sha512, error::CryptoError};

/// Statistical security margin added on top of the domain's bit length.
pub const SECURITY_MARGIN_BITS: usize = 512;

/// Bits produced by one hash block.
const BLOCK_BITS: usize = 512;

/// Block counters are single bytes; this many blocks or more is rejected.
pub const MAX_BLOCKS: usize = 255;

/// Largest supported output length before reduction, `(MAX_BLOCKS - 1) * 512`.
pub const MAX_OUTPUT_BITS: usize = (MAX_BLOCKS - 1) * BLOCK_BITS;

/// Deterministically map `x` to an integer in `[0, max_value)`.
///
/// # Errors
///
/// - `InvalidArgument` if `max_value` is zero
/// - `InvalidArgument` if `bits(max_value) + 512` exceeds
///   [`MAX_OUTPUT_BITS`]
pub fn random_oracle(x: &[u8], max_value: &BigNum) -> Result<BigNum, CryptoError> {
    if max_value.is_zero() {
        return Err(CryptoError::invalid("random oracle domain must be non-empty"));
    }

    let output_bits = max_value.bit_length() + SECURITY_MARGIN_BITS;
    let block_count = output_bits.div_ceil(BLOCK_BITS);
    if block_count >= MAX_BLOCKS {
        return Err(CryptoError::invalid(format!(
            "the domain bit length must not be greater than {MAX_OUTPUT_BITS}, \
             desired bit length: {output_bits}"
        )));
    }
    let excess_bits = block_count * BLOCK_BITS - output_bits;

    let mut input = Vec::with_capacity(1 + x.len());
    let mut expanded = BigNum::default();
    for counter in 1..=block_count {
        input.clear();
        input.extend_from_slice(&BigNum::from_u64(counter as u64).to_bytes_be());
        input.extend_from_slice(x);

        let block = BigNum::from_bytes_be(&sha512(&input));
        expanded = (&expanded << BLOCK_BITS) + &block;
    }

    (&expanded >> excess_bits).modulo(max_value)
}
