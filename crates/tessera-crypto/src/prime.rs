//! Random prime and safe-prime search.

use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use crate::{bignum::BigNum, entropy::EntropySource, error::CryptoError};

/// Odd primes below 256, used to sieve safe-prime candidates before
/// Miller-Rabin.
const SMALL_PRIMES: [u64; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Random prime with exactly `bits` bits.
///
/// # Errors
///
/// - `InvalidArgument` if `bits < 2`
/// - `SamplingExhausted` if `max_candidates` candidates are all composite
pub fn generate_prime<E: EntropySource + ?Sized>(
    source: &mut E,
    bits: usize,
    rounds: usize,
    max_candidates: u64,
) -> Result<BigNum, CryptoError> {
    if bits < 2 {
        return Err(CryptoError::invalid(format!("prime size must be at least 2 bits, got {bits}")));
    }

    for attempt in 1..=max_candidates {
        let candidate = random_candidate(source, bits)?;
        if candidate.is_prime(rounds) {
            tracing::debug!(bits, attempt, "generated prime");
            return Ok(candidate);
        }
    }

    Err(exhausted("prime search", bits, max_candidates))
}

/// Random safe prime `p` with exactly `bits` bits, i.e. `p` and `(p - 1) / 2`
/// are both prime.
///
/// # Errors
///
/// - `InvalidArgument` if `bits < 3`
/// - `SamplingExhausted` if `max_candidates` candidates fail
pub fn generate_safe_prime<E: EntropySource + ?Sized>(
    source: &mut E,
    bits: usize,
    rounds: usize,
    max_candidates: u64,
) -> Result<BigNum, CryptoError> {
    if bits < 3 {
        return Err(CryptoError::invalid(format!(
            "safe prime size must be at least 3 bits, got {bits}"
        )));
    }

    let one = BigNum::from_u64(1);
    for attempt in 1..=max_candidates {
        let half = random_candidate(source, bits - 1)?;
        if has_small_factor(&half) || !half.is_prime(rounds) {
            continue;
        }

        let candidate = (&half << 1) + &one;
        if candidate.is_prime(rounds) {
            tracing::debug!(bits, attempt, "generated safe prime");
            return Ok(candidate);
        }
    }

    Err(exhausted("safe prime search", bits, max_candidates))
}

/// Odd random integer of exactly `bits` bits with the two top bits set.
///
/// Setting both top bits keeps `bits` exact for `2q + 1` and for products of
/// two such values.
fn random_candidate<E: EntropySource + ?Sized>(
    source: &mut E,
    bits: usize,
) -> Result<BigNum, CryptoError> {
    debug_assert!(bits >= 2);

    let len = bits.div_ceil(8);
    let mut bytes = vec![0u8; len];
    source.fill(&mut bytes)?;

    // Bits used in the leading byte, 1..=8
    let lead_bits = bits - 8 * (len - 1);
    bytes[0] &= ((1u16 << lead_bits) - 1) as u8;
    if lead_bits >= 2 {
        bytes[0] |= 0b11 << (lead_bits - 2);
    } else {
        bytes[0] |= 1;
        bytes[1] |= 0x80;
    }
    bytes[len - 1] |= 1;

    Ok(BigNum::from_bytes_be(&bytes))
}

/// True if `q` or `2q + 1` is divisible by a prime in [`SMALL_PRIMES`].
///
/// Values of at most 8 bits are never sieved since they may equal one of
/// the small primes themselves.
fn has_small_factor(q: &BigNum) -> bool {
    if q.bit_length() <= 8 {
        return false;
    }

    SMALL_PRIMES.iter().any(|&prime| {
        let rem = (q.as_biguint() % &BigUint::from(prime)).to_u64();
        matches!(rem, Some(r) if r == 0 || (2 * r + 1) % prime == 0)
    })
}

fn exhausted(operation: &'static str, bits: usize, max_candidates: u64) -> CryptoError {
    tracing::warn!(bits, max_candidates, "{operation} exhausted");
    CryptoError::SamplingExhausted { operation, attempts: max_candidates }
}
